use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Carrega a configuração
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // Arquivo de configuração base
            .add_source(File::with_name("config").required(false))
            // Arquivo específico do ambiente
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Variáveis de ambiente por último
            .add_source(
                Environment::with_prefix("REDACAO")
                    .separator("_")
                    .try_parsing(true),
            );

        // Atalhos de variáveis de ambiente mais comuns
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("cache.redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option(
                "cache.redis.key_prefix",
                std::env::var("REDIS_KEY_PREFIX").ok(),
            )?
            .set_override_option("cache.redis.default_ttl", std::env::var("REDIS_TTL").ok())?
            .set_override_option(
                "grading.divergence_threshold",
                std::env::var("DIVERGENCE_THRESHOLD").ok(),
            )?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // Número de workers
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// Instância global
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Falha ao carregar a configuração: {e}");
                std::process::exit(1);
            })
        })
    }

    /// Inicializa a configuração (chamado na partida da aplicação)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuração já inicializada".to_string()))?;
        Ok(())
    }

    /// Ambiente de produção?
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// Ambiente de desenvolvimento?
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// Endereço de bind do servidor
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Caminho do socket Unix, se configurado
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}
