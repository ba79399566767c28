//! Grade storage operations.

use super::SeaOrmStorage;
use crate::entity::calificaciones::{ActiveModel, Column, Entity as Calificaciones};
use crate::errors::{Result, SgaError};
use crate::models::calificaciones::{entities::Calificacion, requests::NewCalificacion};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_calificacion_impl(&self, req: NewCalificacion) -> Result<Calificacion> {
        let model = ActiveModel {
            alumno_id: Set(req.alumno_id),
            asignatura_id: Set(req.asignatura_id),
            nota: Set(req.nota),
            fecha: Set(req.fecha),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| SgaError::database_operation(format!("grade creation failed: {e}")))?;

        Ok(model.into_calificacion())
    }

    pub async fn list_calificaciones_impl(
        &self,
        alumno_id: Option<i64>,
        asignatura_id: Option<i64>,
    ) -> Result<Vec<Calificacion>> {
        let mut query = Calificaciones::find();

        if let Some(alumno_id) = alumno_id {
            query = query.filter(Column::AlumnoId.eq(alumno_id));
        }
        if let Some(asignatura_id) = asignatura_id {
            query = query.filter(Column::AsignaturaId.eq(asignatura_id));
        }

        let models = query
            .order_by_desc(Column::Fecha)
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("grade listing failed: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_calificacion()).collect())
    }
}
