//! Safe path-parameter extractors.
//!
//! Each extractor parses its path segment as an `i64` and rejects the
//! request with a uniform 400 response instead of actix's default error
//! page when the segment is malformed.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error::ErrorBadRequest};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! safe_id_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let body = serde_json::to_string(&ApiResponse::<()>::error_empty(
                            ErrorCode::BadRequest,
                            concat!("Invalid ", $param, " path parameter"),
                        ))
                        .unwrap_or_default();
                        Err(ErrorBadRequest(body))
                    }
                })
            }
        }
    };
}

safe_id_extractor!(SafeUserIdI64, "user_id");
safe_id_extractor!(SafeAlumnoIdI64, "alumno_id");
safe_id_extractor!(SafeGrupoIdI64, "grupo_id");
safe_id_extractor!(SafeCarreraIdI64, "carrera_id");
safe_id_extractor!(SafeAsignaturaIdI64, "asignatura_id");
safe_id_extractor!(SafePlantelIdI64, "plantel_id");
