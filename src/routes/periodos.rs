use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::periodos::requests::{CreatePeriodoRequest, PeriodoListParams};
use crate::models::users::entities::UserRole;
use crate::services::PeriodoService;

static PERIODO_SERVICE: Lazy<PeriodoService> = Lazy::new(PeriodoService::new_lazy);

pub async fn create_periodo(
    req: HttpRequest,
    periodo_data: web::Json<CreatePeriodoRequest>,
) -> ActixResult<HttpResponse> {
    PERIODO_SERVICE
        .create_periodo(periodo_data.into_inner(), &req)
        .await
}

pub async fn list_periodos(
    req: HttpRequest,
    query: web::Query<PeriodoListParams>,
) -> ActixResult<HttpResponse> {
    PERIODO_SERVICE.list_periodos(query.into_inner(), &req).await
}

pub fn configure_periodo_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/periodos")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::direction_roles()))
                    .route("", web::get().to(list_periodos))
                    .route("", web::post().to(create_periodo)),
            ),
    );
}
