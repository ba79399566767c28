pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod promote;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::grupos::{
    entities::Grupo,
    kpi::{self, GrupoKpis},
};
use crate::storage::Storage;
use crate::utils::fechas::month_range;

pub struct GrupoService {
    storage: Option<Arc<dyn Storage>>,
}

impl GrupoService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_grupos(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_grupos(self, request).await
    }

    pub async fn create_grupo(
        &self,
        create_request: crate::models::grupos::requests::CreateGrupoRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_grupo(self, create_request, request).await
    }

    pub async fn get_grupo(
        &self,
        grupo_id: i64,
        params: crate::models::grupos::requests::GrupoDetailParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_grupo(self, grupo_id, params, request).await
    }

    pub async fn update_grupo(
        &self,
        grupo_id: i64,
        update_request: crate::models::grupos::requests::UpdateGrupoRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_grupo(self, grupo_id, update_request, request).await
    }

    pub async fn delete_grupo(
        &self,
        grupo_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_grupo(self, grupo_id, request).await
    }

    pub async fn promote_grupos(
        &self,
        promocion: crate::models::grupos::requests::PromocionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        promote::handle_promote_grupos(self, promocion, request).await
    }
}

/// Assembles the KPI block of one group from its aggregates. Every ratio
/// degrades to zero instead of dividing by zero.
pub(crate) async fn kpis_for_grupo(storage: &Arc<dyn Storage>, grupo: &Grupo) -> Result<GrupoKpis> {
    let alumnos_inscritos = storage.count_alumnos_in_grupo(grupo.id).await?;
    let notas = storage.notas_for_grupo(grupo.id).await?;

    let (desde, hasta) = month_range(chrono::Utc::now());
    let (presentes, total) = storage
        .asistencia_counts_for_grupo(grupo.id, desde, hasta)
        .await?;

    Ok(GrupoKpis {
        alumnos_inscritos,
        ocupacion_pct: kpi::ocupacion_pct(alumnos_inscritos, grupo.capacidad_maxima),
        promedio_general: kpi::promedio_general(&notas),
        asistencia_mensual: kpi::asistencia_mensual(presentes, total),
    })
}
