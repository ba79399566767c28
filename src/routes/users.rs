use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{
    CreateCoordinadorRequest, CreateDocenteRequest, RegistrarAlumnoRequest, ResetPasswordRequest,
    UpdateDocenteRequest, UserListParams,
};
use crate::services::UserService;
use crate::utils::{SafeGrupoIdI64, SafeUserIdI64};

static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn list_docentes(
    req: HttpRequest,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_docentes(query.into_inner(), &req).await
}

pub async fn create_docente(
    req: HttpRequest,
    docente_data: web::Json<CreateDocenteRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .create_docente(docente_data.into_inner(), &req)
        .await
}

pub async fn get_docente(
    req: HttpRequest,
    docente_id: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_docente(docente_id.0, &req).await
}

pub async fn update_docente(
    req: HttpRequest,
    docente_id: SafeUserIdI64,
    update_data: web::Json<UpdateDocenteRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_docente(docente_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_docente(
    req: HttpRequest,
    docente_id: SafeUserIdI64,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_docente(docente_id.0, &req).await
}

pub async fn list_coordinadores(
    req: HttpRequest,
    query: web::Query<UserListParams>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .list_coordinadores(query.into_inner(), &req)
        .await
}

pub async fn create_coordinador(
    req: HttpRequest,
    coordinador_data: web::Json<CreateCoordinadorRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .create_coordinador(coordinador_data.into_inner(), &req)
        .await
}

pub async fn reset_coordinador_password(
    req: HttpRequest,
    coordinador_id: SafeUserIdI64,
    reset_data: web::Json<ResetPasswordRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .reset_coordinador_password(coordinador_id.0, reset_data.into_inner(), &req)
        .await
}

pub async fn registrar_alumno(
    req: HttpRequest,
    registro: web::Json<RegistrarAlumnoRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .registrar_alumno(registro.into_inner(), &req)
        .await
}

pub async fn list_alumnos_de_grupo(
    req: HttpRequest,
    grupo_id: SafeGrupoIdI64,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_alumnos_de_grupo(grupo_id.0, &req).await
}

pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/usuarios")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/docentes")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_docentes))
                    .route("", web::post().to(create_docente))
                    .route("/{user_id}", web::get().to(get_docente))
                    .route("/{user_id}", web::put().to(update_docente))
                    .route("/{user_id}", web::delete().to(delete_docente)),
            )
            .service(
                web::scope("/coordinadores")
                    .wrap(middlewares::RequireRole::new_any(UserRole::direction_roles()))
                    .route("", web::get().to(list_coordinadores))
                    .route("", web::post().to(create_coordinador))
                    .route(
                        "/{user_id}/reset-password",
                        web::post().to(reset_coordinador_password),
                    ),
            )
            .service(
                web::scope("/alumnos")
                    .route(
                        "",
                        web::post()
                            .to(registrar_alumno)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    )
                    .route(
                        "/grupo/{grupo_id}",
                        web::get().to(list_alumnos_de_grupo).wrap(
                            middlewares::RequireRole::new_any(UserRole::teaching_roles()),
                        ),
                    ),
            ),
    );
}
