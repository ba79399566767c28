use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    periodos::requests::{CreatePeriodoRequest, NewPeriodo},
};
use crate::utils::fechas::parse_fecha;

use super::PeriodoService;

pub async fn handle_create_periodo(
    service: &PeriodoService,
    create_request: CreatePeriodoRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if create_request.nombre.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Period name is required",
        )));
    }

    let fecha_inicio = match parse_optional_fecha(create_request.fecha_inicio.as_deref()) {
        Ok(ts) => ts,
        Err(resp) => return Ok(resp),
    };
    let fecha_fin = match parse_optional_fecha(create_request.fecha_fin.as_deref()) {
        Ok(ts) => ts,
        Err(resp) => return Ok(resp),
    };

    if let (Some(inicio), Some(fin)) = (fecha_inicio, fecha_fin)
        && fin < inicio
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "fecha_fin must not precede fecha_inicio",
        )));
    }

    let new_periodo = NewPeriodo {
        nombre: create_request.nombre,
        fecha_inicio,
        fecha_fin,
        activo: create_request.activo,
    };

    match storage.create_periodo(new_periodo).await {
        Ok(periodo) => {
            tracing::info!("Period {} created", periodo.nombre);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                periodo,
                "Period created successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Period creation failed: {e}"),
            )),
        ),
    }
}

fn parse_optional_fecha(input: Option<&str>) -> Result<Option<i64>, HttpResponse> {
    match input {
        Some(fecha) => parse_fecha(fecha).map(Some).map_err(|_| {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Dates must be YYYY-MM-DD",
            ))
        }),
        None => Ok(None),
    }
}
