use serde::{Deserialize, Serialize};

/// Configuração da aplicação
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub cors: CorsConfig,
    pub grading: GradingConfig,
    pub live_classes: LiveClassConfig,
}

/// Configurações gerais
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// Configuração do servidor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// Timeouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// Limites
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// Configuração do banco de dados
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // URL de conexão (o tipo é inferido do scheme)
    pub pool_size: u32, // tamanho do pool de conexões
    pub timeout: u64,   // timeout de conexão (segundos)
}

/// Configuração de cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(rename = "type")]
    pub cache_type: String,
    pub default_ttl: u64,
    pub redis: RedisConfig,
    pub memory: MemoryConfig,
}

/// Redis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    pub key_prefix: String,
    pub pool_size: u64,
}

/// Cache em memória
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    pub max_capacity: u64,
}

/// CORS
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub max_age: usize,
}

/// Regras de correção
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Diferença de totais (escala 0-1000) acima da qual a correção
    /// é marcada como divergente
    pub divergence_threshold: i32,
}

/// Regras das aulas ao vivo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveClassConfig {
    /// Janela (minutos) após o fim da aula em que ela continua sendo
    /// exibida para permitir registro de saída tardio
    pub grace_minutes: i64,
    /// TTL (segundos) do cache da listagem de aulas ativas
    pub active_list_ttl: u64,
}
