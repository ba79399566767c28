//! Attendance storage operations.

use super::SeaOrmStorage;
use crate::entity::asistencias::{ActiveModel, Column, Entity as Asistencias};
use crate::entity::grupos::{Column as GrupoColumn, Entity as Grupos};
use crate::errors::{Result, SgaError};
use crate::models::asistencias::{entities::Asistencia, requests::NewAsistencia};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    pub async fn create_asistencia_impl(&self, req: NewAsistencia) -> Result<Asistencia> {
        let model = ActiveModel {
            alumno_id: Set(req.alumno_id),
            grupo_id: Set(req.grupo_id),
            fecha: Set(req.fecha),
            presente: Set(req.presente),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| SgaError::database_operation(format!("attendance creation failed: {e}")))?;

        Ok(model.into_asistencia())
    }

    pub async fn exists_asistencia_impl(
        &self,
        alumno_id: i64,
        desde: i64,
        hasta: i64,
    ) -> Result<bool> {
        let count = Asistencias::find()
            .filter(Column::AlumnoId.eq(alumno_id))
            .filter(Column::Fecha.gte(desde))
            .filter(Column::Fecha.lt(hasta))
            .count(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("attendance lookup failed: {e}")))?;

        Ok(count > 0)
    }

    pub async fn list_asistencias_impl(
        &self,
        grupo_id: i64,
        desde: i64,
        hasta: i64,
    ) -> Result<Vec<Asistencia>> {
        let models = Asistencias::find()
            .filter(Column::GrupoId.eq(grupo_id))
            .filter(Column::Fecha.gte(desde))
            .filter(Column::Fecha.lt(hasta))
            .order_by_asc(Column::Fecha)
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("attendance listing failed: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_asistencia()).collect())
    }

    /// Present and total counts across every group of the campus.
    pub async fn asistencia_counts_for_plantel_impl(
        &self,
        plantel_id: i64,
        desde: i64,
        hasta: i64,
    ) -> Result<(i64, i64)> {
        let grupo_ids: Vec<i64> = Grupos::find()
            .filter(GrupoColumn::PlantelId.eq(plantel_id))
            .select_only()
            .column(GrupoColumn::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("group query failed: {e}")))?;

        if grupo_ids.is_empty() {
            return Ok((0, 0));
        }

        let base = Asistencias::find()
            .filter(Column::GrupoId.is_in(grupo_ids))
            .filter(Column::Fecha.gte(desde))
            .filter(Column::Fecha.lt(hasta));

        let total = base
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("attendance count failed: {e}")))?;

        let presentes = base
            .filter(Column::Presente.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("attendance count failed: {e}")))?;

        Ok((presentes as i64, total as i64))
    }
}
