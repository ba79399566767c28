use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::calificaciones::requests::{CalificacionListParams, CreateCalificacionRequest};
use crate::models::users::entities::UserRole;
use crate::services::CalificacionService;

static CALIFICACION_SERVICE: Lazy<CalificacionService> = Lazy::new(CalificacionService::new_lazy);

pub async fn create_calificacion(
    req: HttpRequest,
    calificacion_data: web::Json<CreateCalificacionRequest>,
) -> ActixResult<HttpResponse> {
    CALIFICACION_SERVICE
        .create_calificacion(calificacion_data.into_inner(), &req)
        .await
}

pub async fn list_calificaciones(
    req: HttpRequest,
    query: web::Query<CalificacionListParams>,
) -> ActixResult<HttpResponse> {
    CALIFICACION_SERVICE
        .list_calificaciones(query.into_inner(), &req)
        .await
}

pub fn configure_calificacion_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/calificaciones")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teaching_roles()))
                    .route("", web::get().to(list_calificaciones))
                    .route("", web::post().to(create_calificacion)),
            ),
    );
}
