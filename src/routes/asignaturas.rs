use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::asignaturas::requests::CreateAsignaturaRequest;
use crate::models::users::entities::UserRole;
use crate::services::AsignaturaService;

static ASIGNATURA_SERVICE: Lazy<AsignaturaService> = Lazy::new(AsignaturaService::new_lazy);

pub async fn create_asignatura(
    req: HttpRequest,
    asignatura_data: web::Json<CreateAsignaturaRequest>,
) -> ActixResult<HttpResponse> {
    ASIGNATURA_SERVICE
        .create_asignatura(asignatura_data.into_inner(), &req)
        .await
}

pub async fn list_asignaturas(request: HttpRequest) -> ActixResult<HttpResponse> {
    ASIGNATURA_SERVICE.list_asignaturas(&request).await
}

pub fn configure_asignatura_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/asignaturas")
            .wrap(middlewares::RequireJWT)
            .route(
                "",
                web::get()
                    .to(list_asignaturas)
                    .wrap(middlewares::RequireRole::new_any(UserRole::teaching_roles())),
            )
            .route(
                "",
                web::post()
                    .to(create_asignatura)
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
            ),
    );
}
