use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::cache::ObjectCache;
use crate::config::CacheConfig;
use crate::errors::{Result, SgaError};

pub type CacheFactory = fn(&CacheConfig) -> Result<Arc<dyn ObjectCache>>;

fn registry() -> &'static Mutex<HashMap<&'static str, CacheFactory>> {
    static REGISTRY: OnceLock<Mutex<HashMap<&'static str, CacheFactory>>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
}

pub fn register_cache_plugin(name: &'static str, factory: CacheFactory) {
    registry()
        .lock()
        .expect("cache registry poisoned")
        .insert(name, factory);
}

/// Registers every built-in backend. Called once from startup before
/// `create_object_cache`.
pub fn register_builtin_plugins() {
    register_cache_plugin("memory", crate::cache::object_cache::moka::create);
}

pub fn create_object_cache(config: &CacheConfig) -> Result<Arc<dyn ObjectCache>> {
    let name = config.cache_type.as_str();
    let factory = {
        let reg = registry().lock().expect("cache registry poisoned");
        reg.get(name).copied()
    };
    match factory {
        Some(factory) => factory(config),
        None => Err(SgaError::cache_plugin_not_found(format!(
            "cache backend '{name}' is not registered"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfig;

    fn memory_config(cache_type: &str) -> CacheConfig {
        CacheConfig {
            cache_type: cache_type.to_string(),
            default_ttl: 300,
            memory: MemoryConfig { max_capacity: 1024 },
        }
    }

    #[test]
    fn unknown_backend_is_rejected() {
        register_builtin_plugins();
        assert!(create_object_cache(&memory_config("carrier-pigeon")).is_err());
    }

    #[test]
    fn memory_backend_is_built_in() {
        register_builtin_plugins();
        assert!(create_object_cache(&memory_config("memory")).is_ok());
    }
}
