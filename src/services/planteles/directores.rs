use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    planteles::requests::CreateDirectorRequest,
    users::{
        entities::{Estatus, UserRole},
        requests::NewUsuario,
        responses::UserResponse,
    },
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_username};

use super::PlantelService;

/// ADMIN creates the campus director right after the campus itself.
pub async fn handle_create_director(
    service: &PlantelService,
    create_request: CreateDirectorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
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

    // Directors are always attached to an existing campus
    match storage.get_plantel_by_id(create_request.plantel_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PlantelNotFound,
                "Campus not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Campus lookup failed: {e}"),
                )),
            );
        }
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
                    format!("Director creation failed: {e}"),
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
                    "Director creation failed",
                )),
            );
        }
    };

    let new_user = NewUsuario {
        username: create_request.username,
        email: create_request.email,
        password_hash,
        rol: UserRole::Director,
        estatus: Estatus::Activo,
        plantel_id: Some(create_request.plantel_id),
        grupo_id: None,
        first_name: create_request.first_name,
        last_name: create_request.last_name,
        telefono: None,
        direccion: None,
        fecha_nacimiento: None,
    };

    match storage.create_user(new_user).await {
        Ok(usuario) => {
            tracing::info!("Director {} registered", usuario.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { usuario },
                "Director created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserCreationFailed,
                format!("Director creation failed: {e}"),
            )),
        ),
    }
}
