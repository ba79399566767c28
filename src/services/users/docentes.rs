use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        entities::{Estatus, UserRole},
        requests::{
            CreateDocenteRequest, NewUsuario, UpdateDocenteRequest, UpdateUsuarioData,
            UserListParams,
        },
        responses::UserResponse,
    },
};
use crate::services::{acting_plantel, authenticated_user};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_username};

use super::UserService;

pub async fn handle_list_docentes(
    service: &UserService,
    params: UserListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match authenticated_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let plantel_id = match acting_plantel(&user) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage
        .list_users_by_rol(plantel_id, UserRole::Docente, params)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Docentes retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Docente listing failed: {e}"),
            )),
        ),
    }
}

pub async fn handle_create_docente(
    service: &UserService,
    create_request: CreateDocenteRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match authenticated_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let plantel_id = match acting_plantel(&user) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    if let Err(msg) = validate_username(&create_request.username) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserNameInvalid,
            msg,
        )));
    }
    if let Err(msg) = validate_email(&create_request.email) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserEmailInvalid,
            msg,
        )));
    }

    // Username and email are globally unique
    match storage
        .get_user_by_username_or_email(&create_request.username)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Username is already taken",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Docente creation failed: {e}"),
                )),
            );
        }
    }

    let password_hash = match hash_password(&create_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreationFailed,
                    "Docente creation failed",
                )),
            );
        }
    };

    let new_user = NewUsuario {
        username: create_request.username,
        email: create_request.email,
        password_hash,
        rol: UserRole::Docente,
        estatus: Estatus::Activo,
        plantel_id: Some(plantel_id),
        grupo_id: None,
        first_name: create_request.first_name,
        last_name: create_request.last_name,
        telefono: create_request.telefono,
        direccion: None,
        fecha_nacimiento: None,
    };

    match storage.create_user(new_user).await {
        Ok(usuario) => {
            tracing::info!("Docente {} registered", usuario.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { usuario },
                "Docente created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserCreationFailed,
                format!("Docente creation failed: {e}"),
            )),
        ),
    }
}

pub async fn handle_get_docente(
    service: &UserService,
    docente_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match authenticated_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let plantel_id = match acting_plantel(&user) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    match storage.get_user_scoped(docente_id, plantel_id).await {
        Ok(Some(usuario)) if usuario.rol == UserRole::Docente => Ok(HttpResponse::Ok().json(
            ApiResponse::success(UserResponse { usuario }, "Docente retrieved successfully"),
        )),
        Ok(_) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Docente not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Docente lookup failed: {e}"),
            )),
        ),
    }
}

pub async fn handle_update_docente(
    service: &UserService,
    docente_id: i64,
    update_request: UpdateDocenteRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match authenticated_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let plantel_id = match acting_plantel(&user) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    // Only docentes of the acting campus are reachable
    match storage.get_user_scoped(docente_id, plantel_id).await {
        Ok(Some(target)) if target.rol == UserRole::Docente => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Docente not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Docente lookup failed: {e}"),
                )),
            );
        }
    }

    let update = UpdateUsuarioData {
        email: update_request.email,
        first_name: update_request.first_name,
        last_name: update_request.last_name,
        telefono: update_request.telefono,
        estatus: update_request.estatus,
        ..Default::default()
    };

    match storage
        .update_user_scoped(docente_id, plantel_id, update)
        .await
    {
        Ok(Some(usuario)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { usuario },
            "Docente updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Docente not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Docente update failed: {e}"),
            )),
        ),
    }
}

/// Logical removal: the docente is marked BAJA, not deleted, so historical
/// group and subject assignments stay intact.
pub async fn handle_delete_docente(
    service: &UserService,
    docente_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match authenticated_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let plantel_id = match acting_plantel(&user) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    // Only docentes of the acting campus are reachable
    match storage.get_user_scoped(docente_id, plantel_id).await {
        Ok(Some(target)) if target.rol == UserRole::Docente => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Docente not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Docente lookup failed: {e}"),
                )),
            );
        }
    }

    let update = UpdateUsuarioData {
        estatus: Some(Estatus::Baja),
        ..Default::default()
    };

    match storage
        .update_user_scoped(docente_id, plantel_id, update)
        .await
    {
        Ok(Some(_)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_empty("Docente deregistered"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Docente not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Docente removal failed: {e}"),
            )),
        ),
    }
}
