use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grupos::requests::{
    CreateGrupoRequest, GrupoDetailParams, PromocionRequest, UpdateGrupoRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::GrupoService;
use crate::utils::SafeGrupoIdI64;

static GRUPO_SERVICE: Lazy<GrupoService> = Lazy::new(GrupoService::new_lazy);

pub async fn list_grupos(request: HttpRequest) -> ActixResult<HttpResponse> {
    GRUPO_SERVICE.list_grupos(&request).await
}

pub async fn create_grupo(
    req: HttpRequest,
    grupo_data: web::Json<CreateGrupoRequest>,
) -> ActixResult<HttpResponse> {
    GRUPO_SERVICE.create_grupo(grupo_data.into_inner(), &req).await
}

pub async fn get_grupo(
    req: HttpRequest,
    grupo_id: SafeGrupoIdI64,
    query: web::Query<GrupoDetailParams>,
) -> ActixResult<HttpResponse> {
    GRUPO_SERVICE
        .get_grupo(grupo_id.0, query.into_inner(), &req)
        .await
}

pub async fn update_grupo(
    req: HttpRequest,
    grupo_id: SafeGrupoIdI64,
    update_data: web::Json<UpdateGrupoRequest>,
) -> ActixResult<HttpResponse> {
    GRUPO_SERVICE
        .update_grupo(grupo_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_grupo(req: HttpRequest, grupo_id: SafeGrupoIdI64) -> ActixResult<HttpResponse> {
    GRUPO_SERVICE.delete_grupo(grupo_id.0, &req).await
}

pub async fn promote_grupos(
    req: HttpRequest,
    promocion: web::Json<PromocionRequest>,
) -> ActixResult<HttpResponse> {
    GRUPO_SERVICE
        .promote_grupos(promocion.into_inner(), &req)
        .await
}

pub fn configure_grupo_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grupos")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_grupos)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teaching_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_grupo)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/promocion").route(
                    // Bulk promotion is reserved for the campus director
                    web::post()
                        .to(promote_grupos)
                        .wrap(middlewares::RequireRole::new(&UserRole::Director)),
                ),
            )
            .service(
                web::resource("/{grupo_id}")
                    .route(
                        web::get()
                            .to(get_grupo)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teaching_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_grupo)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_grupo)
                            .wrap(middlewares::RequireRole::new_any(UserRole::direction_roles())),
                    ),
            ),
    );
}
