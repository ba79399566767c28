use crate::cache::ObjectCache;
use crate::cache::register::{create_object_cache, register_builtin_plugins};
use crate::config::AppConfig;
use crate::models::users::entities::{Estatus, UserRole};
use crate::models::users::requests::NewUsuario;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_random_password;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// Instantiates the configured cache backend, falling back to the
/// in-memory backend when the configured one is unavailable.
fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    register_builtin_plugins();

    match create_object_cache(&config.cache) {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", cache_type);
            Ok(cache)
        }
        Err(e) if cache_type != "memory" => {
            warn!("Failed to create {} cache: {}, falling back to memory", cache_type, e);
            let mut fallback = config.cache.clone();
            fallback.cache_type = "memory".to_string();
            let cache = create_object_cache(&fallback)?;
            warn!("Successfully created fallback in-memory cache backend");
            Ok(cache)
        }
        Err(e) => Err(format!("No cache backend available (tried: {cache_type}): {e}").into()),
    }
}

/// Seeds the default ADMIN account when the database holds no users at all.
async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin = NewUsuario {
        username: "admin".to_string(),
        email: "admin@localhost".to_string(),
        password_hash,
        rol: UserRole::Admin,
        estatus: Estatus::Activo,
        plantel_id: None,
        grupo_id: None,
        first_name: "Administrador".to_string(),
        last_name: "General".to_string(),
        telefono: None,
        direccion: None,
        fecha_nacimiento: None,
    };

    match storage.create_user(admin).await {
        Ok(user) => {
            info!(
                "Default admin account created successfully (ID: {}, username: {})",
                user.id, user.username
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// Prepares everything the HTTP server needs before binding:
/// storage backend (with migrations), the seed admin, and the cache.
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    Lazy::force(&crate::services::system::START_TIME);

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await;

    let cache = create_cache().expect("Failed to create cache");
    warn!("Cache backend initialized");

    StartupContext { storage, cache }
}
