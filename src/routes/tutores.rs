use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::tutores::requests::CreateTutorRequest;
use crate::models::users::entities::UserRole;
use crate::services::TutorService;
use crate::utils::SafeAlumnoIdI64;

static TUTOR_SERVICE: Lazy<TutorService> = Lazy::new(TutorService::new_lazy);

pub async fn create_tutor(
    req: HttpRequest,
    tutor_data: web::Json<CreateTutorRequest>,
) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE.create_tutor(tutor_data.into_inner(), &req).await
}

pub async fn list_tutores(
    req: HttpRequest,
    alumno_id: SafeAlumnoIdI64,
) -> ActixResult<HttpResponse> {
    TUTOR_SERVICE.list_tutores(alumno_id.0, &req).await
}

pub fn configure_tutor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tutores")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::post().to(create_tutor))
                    .route("/alumno/{alumno_id}", web::get().to(list_tutores)),
            ),
    );
}
