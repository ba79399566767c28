use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        entities::{Estatus, UserRole},
        requests::{NewUsuario, RegistrarAlumnoRequest},
        responses::AlumnoRegistradoResponse,
    },
};
use crate::services::{acting_plantel, authenticated_user};
use crate::utils::fechas::parse_fecha;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_username};

use super::UserService;

/// Student registration. No password travels in the request: every new
/// student gets the fixed temporary password from configuration, estatus
/// PENDIENTE, and must change it on first login.
pub async fn handle_registrar_alumno(
    service: &UserService,
    registro: RegistrarAlumnoRequest,
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
    let config = service.get_config();

    if let Err(msg) = validate_username(&registro.username) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserNameInvalid,
            msg,
        )));
    }
    if let Err(msg) = validate_email(&registro.email) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserEmailInvalid,
            msg,
        )));
    }

    // The target group must belong to the acting campus
    match storage.get_grupo_scoped(registro.grupo_id, plantel_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GrupoNotFound,
                "Grupo not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Grupo lookup failed: {e}"),
                )),
            );
        }
    }

    match storage
        .get_user_by_username_or_email(&registro.username)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserAlreadyExists,
                "Matrícula is already registered",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Alumno registration failed: {e}"),
                )),
            );
        }
    }

    let fecha_nacimiento = match registro.fecha_nacimiento {
        Some(ref fecha) => match parse_fecha(fecha) {
            Ok(ts) => Some(ts),
            Err(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "fecha_nacimiento must be YYYY-MM-DD",
                )));
            }
        },
        None => None,
    };

    let password_hash = match hash_password(&config.app.alumno_default_password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Password hashing failed: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserCreationFailed,
                    "Alumno registration failed",
                )),
            );
        }
    };

    let new_user = NewUsuario {
        username: registro.username,
        email: registro.email,
        password_hash,
        rol: UserRole::Alumno,
        estatus: Estatus::Pendiente,
        plantel_id: Some(plantel_id),
        grupo_id: Some(registro.grupo_id),
        first_name: registro.first_name,
        last_name: registro.last_name,
        telefono: registro.telefono,
        direccion: registro.direccion,
        fecha_nacimiento,
    };

    match storage.create_user(new_user).await {
        Ok(usuario) => {
            tracing::info!("Alumno {} registered", usuario.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AlumnoRegistradoResponse {
                    usuario,
                    temp_password_assigned: true,
                },
                "Alumno registered successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserCreationFailed,
                format!("Alumno registration failed: {e}"),
            )),
        ),
    }
}

pub async fn handle_list_alumnos_de_grupo(
    service: &UserService,
    grupo_id: i64,
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

    match storage.get_grupo_scoped(grupo_id, plantel_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GrupoNotFound,
                "Grupo not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Grupo lookup failed: {e}"),
                )),
            );
        }
    }

    match storage.list_alumnos_by_grupo(grupo_id).await {
        Ok(alumnos) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            alumnos,
            "Alumnos retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Alumno listing failed: {e}"),
            )),
        ),
    }
}
