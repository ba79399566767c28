use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::planteles::requests::{
    ActualizarAulasRequest, CreateDirectorRequest, CreatePlantelRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::PlantelService;

static PLANTEL_SERVICE: Lazy<PlantelService> = Lazy::new(PlantelService::new_lazy);

pub async fn create_plantel(
    req: HttpRequest,
    plantel_data: web::Json<CreatePlantelRequest>,
) -> ActixResult<HttpResponse> {
    PLANTEL_SERVICE
        .create_plantel(plantel_data.into_inner(), &req)
        .await
}

pub async fn list_planteles(request: HttpRequest) -> ActixResult<HttpResponse> {
    PLANTEL_SERVICE.list_planteles(&request).await
}

pub async fn create_director(
    req: HttpRequest,
    director_data: web::Json<CreateDirectorRequest>,
) -> ActixResult<HttpResponse> {
    PLANTEL_SERVICE
        .create_director(director_data.into_inner(), &req)
        .await
}

pub async fn actualizar_aulas(
    req: HttpRequest,
    aulas_data: web::Json<ActualizarAulasRequest>,
) -> ActixResult<HttpResponse> {
    PLANTEL_SERVICE
        .actualizar_aulas(aulas_data.into_inner(), &req)
        .await
}

pub fn configure_plantel_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/planteles")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/aulas")
                    .wrap(middlewares::RequireRole::new_any(UserRole::direction_roles()))
                    .route("", web::put().to(actualizar_aulas)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::get().to(list_planteles))
                    .route("", web::post().to(create_plantel))
                    .route("/directores", web::post().to(create_director)),
            ),
    );
}
