use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::UpdatePerfilRequest, responses::UserInfoResponse},
    planteles::theme::CampusTheme,
    users::entities::Estatus,
    users::requests::UpdateUsuarioData,
};
use crate::services::authenticated_user;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::{validate_email, validate_telefono};

use super::AuthService;

pub async fn handle_me(service: &AuthService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let user = match authenticated_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    let plantel = match user.plantel_id {
        Some(plantel_id) => storage.get_plantel_by_id(plantel_id).await.ok().flatten(),
        None => None,
    };
    let theme = CampusTheme::resolve(plantel.as_ref());

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        UserInfoResponse {
            usuario: user,
            theme,
        },
        "User information retrieved successfully",
    )))
}

pub async fn handle_update_perfil(
    service: &AuthService,
    update_request: UpdatePerfilRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match authenticated_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request);

    if let Some(ref email) = update_request.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserEmailInvalid,
            msg,
        )));
    }
    if let Some(ref telefono) = update_request.telefono
        && let Err(msg) = validate_telefono(telefono)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // Password change requires the current password. A PENDIENTE account
    // becomes ACTIVO on its first successful change.
    if let Some(ref password_nueva) = update_request.password_nueva {
        let Some(ref password_actual) = update_request.password_actual else {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Current password is required to change the password",
            )));
        };
        if !verify_password(password_actual, &user.password_hash) {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Current password is incorrect",
            )));
        }
        if password_nueva.len() < 8 {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::PasswordPolicyViolation,
                "Password must be at least 8 characters long",
            )));
        }

        let hash = match hash_password(password_nueva) {
            Ok(hash) => hash,
            Err(e) => {
                tracing::error!("Password hashing failed: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Profile update failed",
                    )),
                );
            }
        };

        let promote = (user.estatus == Estatus::Pendiente).then_some(Estatus::Activo);
        if let Err(e) = storage.set_password(user.id, hash, promote).await {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Profile update failed: {e}"),
                )),
            );
        }
    }

    let update = UpdateUsuarioData {
        email: update_request.email,
        telefono: update_request.telefono,
        direccion: update_request.direccion,
        ..Default::default()
    };

    match storage.update_own_profile(user.id, update).await {
        Ok(Some(usuario)) => {
            let plantel = match usuario.plantel_id {
                Some(plantel_id) => storage.get_plantel_by_id(plantel_id).await.ok().flatten(),
                None => None,
            };
            let theme = CampusTheme::resolve(plantel.as_ref());

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserInfoResponse { usuario, theme },
                "Profile updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Profile update failed: {e}"),
            )),
        ),
    }
}
