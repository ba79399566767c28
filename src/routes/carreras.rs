use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::carreras::requests::CreateCarreraRequest;
use crate::models::users::entities::UserRole;
use crate::services::CarreraService;

static CARRERA_SERVICE: Lazy<CarreraService> = Lazy::new(CarreraService::new_lazy);

pub async fn create_carrera(
    req: HttpRequest,
    carrera_data: web::Json<CreateCarreraRequest>,
) -> ActixResult<HttpResponse> {
    CARRERA_SERVICE
        .create_carrera(carrera_data.into_inner(), &req)
        .await
}

pub async fn list_carreras(request: HttpRequest) -> ActixResult<HttpResponse> {
    CARRERA_SERVICE.list_carreras(&request).await
}

pub fn configure_carrera_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/carreras")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_carreras))
                    .route("", web::post().to(create_carrera)),
            ),
    );
}
