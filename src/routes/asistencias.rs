use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::asistencias::requests::{AsistenciaListParams, CreateAsistenciaRequest};
use crate::models::users::entities::UserRole;
use crate::services::AsistenciaService;

static ASISTENCIA_SERVICE: Lazy<AsistenciaService> = Lazy::new(AsistenciaService::new_lazy);

pub async fn create_asistencia(
    req: HttpRequest,
    asistencia_data: web::Json<CreateAsistenciaRequest>,
) -> ActixResult<HttpResponse> {
    ASISTENCIA_SERVICE
        .create_asistencia(asistencia_data.into_inner(), &req)
        .await
}

pub async fn list_asistencias(
    req: HttpRequest,
    query: web::Query<AsistenciaListParams>,
) -> ActixResult<HttpResponse> {
    ASISTENCIA_SERVICE
        .list_asistencias(query.into_inner(), &req)
        .await
}

pub fn configure_asistencia_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/asistencias")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teaching_roles()))
                    .route("", web::get().to(list_asistencias))
                    .route("", web::post().to(create_asistencia)),
            ),
    );
}
