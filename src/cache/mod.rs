//! Camada de cache de objetos
//!
//! Backends plugáveis (Moka em memória, Redis) registrados em um registry
//! global na carga do binário via `declare_object_cache_plugin!`.

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// Registra um backend de cache no registry global
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache_type:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$cache_type>::new()
                            .map_err($crate::errors::RedacaoError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}
