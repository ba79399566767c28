pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use once_cell::sync::Lazy;

use crate::config::AppConfig;

/// Process start marker; touched during startup so uptime counts from
/// boot, not from the first status request.
pub static START_TIME: Lazy<chrono::DateTime<chrono::Utc>> = Lazy::new(chrono::Utc::now);

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    pub async fn status(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        status::handle_status(self, request).await
    }
}
