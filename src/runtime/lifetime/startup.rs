use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{error, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// Cria o backend de cache configurado, com fallback para memória
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    warn!("Criando backend de cache '{}'", cache_type);

    if let Some(constructor) = get_object_cache_plugin(cache_type) {
        match constructor().await {
            Ok(cache) => {
                warn!("Backend de cache '{}' criado", cache_type);
                return Ok(Arc::from(cache));
            }
            Err(e) => {
                warn!("Backend de cache '{}' falhou: {}", cache_type, e);

                // Redis indisponível não derruba a partida: cai para Moka
                if cache_type == "redis"
                    && let Some(fallback_constructor) = get_object_cache_plugin("moka")
                {
                    match fallback_constructor().await {
                        Ok(cache) => {
                            warn!("Usando fallback Moka (em memória)");
                            return Ok(Arc::from(cache));
                        }
                        Err(fallback_e) => {
                            warn!("Fallback Moka também falhou: {}", fallback_e);
                        }
                    }
                }
            }
        }
    } else {
        warn!("Backend de cache '{}' não registrado", cache_type);

        if cache_type != "moka"
            && let Some(fallback_constructor) = get_object_cache_plugin("moka")
        {
            match fallback_constructor().await {
                Ok(cache) => {
                    warn!("Usando fallback Moka (em memória)");
                    return Ok(Arc::from(cache));
                }
                Err(fallback_e) => {
                    warn!("Fallback Moka também falhou: {}", fallback_e);
                }
            }
        }
    }

    Err(format!("Nenhum backend de cache disponível (tentado: {cache_type})").into())
}

/// Prepara storage e cache antes do bind do servidor
pub async fn prepare_server_startup() -> StartupContext {
    crate::cache::register::debug_object_cache_registry();

    let cache = match create_cache().await {
        Ok(cache) => cache,
        Err(e) => {
            error!("Inicialização do cache falhou: {}", e);
            std::process::exit(1);
        }
    };

    let storage = match crate::storage::create_storage().await {
        Ok(storage) => storage,
        Err(e) => {
            error!("Inicialização do storage falhou: {}", e.format_simple());
            std::process::exit(1);
        }
    };

    StartupContext { storage, cache }
}
