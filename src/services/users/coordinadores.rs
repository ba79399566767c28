use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        entities::{Estatus, UserRole},
        requests::{CreateCoordinadorRequest, NewUsuario, ResetPasswordRequest, UserListParams},
        responses::UserResponse,
    },
};
use crate::services::{acting_plantel, authenticated_user};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_username};

use super::UserService;

pub async fn handle_list_coordinadores(
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
        .list_users_by_rol(plantel_id, UserRole::Coord, params)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Coordinadores retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Coordinador listing failed: {e}"),
            )),
        ),
    }
}

pub async fn handle_create_coordinador(
    service: &UserService,
    create_request: CreateCoordinadorRequest,
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
                    format!("Coordinador creation failed: {e}"),
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
                    "Coordinador creation failed",
                )),
            );
        }
    };

    let new_user = NewUsuario {
        username: create_request.username,
        email: create_request.email,
        password_hash,
        rol: UserRole::Coord,
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
            tracing::info!("Coordinador {} registered", usuario.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { usuario },
                "Coordinador created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserCreationFailed,
                format!("Coordinador creation failed: {e}"),
            )),
        ),
    }
}

pub async fn handle_reset_password(
    service: &UserService,
    coordinador_id: i64,
    reset_request: ResetPasswordRequest,
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

    match storage.get_user_scoped(coordinador_id, plantel_id).await {
        Ok(Some(target)) if target.rol == UserRole::Coord => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "Coordinador not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Coordinador lookup failed: {e}"),
                )),
            );
        }
    }

    if reset_request.password.len() < 8 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PasswordPolicyViolation,
            "Password must be at least 8 characters long",
        )));
    }

    let hash = match hash_password(&reset_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Password reset failed",
                )),
            );
        }
    };

    match storage.set_password(coordinador_id, hash, None).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty(
            "Password reset successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "Coordinador not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Password reset failed: {e}"),
            )),
        ),
    }
}
