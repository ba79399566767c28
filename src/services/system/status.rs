use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use serde::Serialize;

use crate::models::ApiResponse;

use super::SystemService;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub system_name: String,
    pub version: &'static str,
    pub environment: String,
    pub uptime_seconds: i64,
}

pub async fn handle_status(
    service: &SystemService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StatusResponse {
            system_name: config.app.system_name.clone(),
            version: env!("CARGO_PKG_VERSION"),
            environment: config.app.environment.clone(),
            uptime_seconds: chrono::Utc::now()
                .signed_duration_since(*super::START_TIME)
                .num_seconds(),
        },
        "Service is running",
    )))
}
