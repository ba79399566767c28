//! Guardian storage operations.

use super::SeaOrmStorage;
use crate::entity::tutores::{ActiveModel, Column, Entity as Tutores};
use crate::errors::{Result, SgaError};
use crate::models::tutores::{entities::Tutor, requests::CreateTutorRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_tutor_impl(&self, req: CreateTutorRequest) -> Result<Tutor> {
        let model = ActiveModel {
            alumno_id: Set(req.alumno_id),
            nombre: Set(req.nombre),
            parentesco: Set(req.parentesco),
            telefono: Set(req.telefono),
            correo: Set(req.correo),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| SgaError::database_operation(format!("guardian creation failed: {e}")))?;

        Ok(model.into_tutor())
    }

    pub async fn list_tutores_by_alumno_impl(&self, alumno_id: i64) -> Result<Vec<Tutor>> {
        let models = Tutores::find()
            .filter(Column::AlumnoId.eq(alumno_id))
            .order_by_asc(Column::Nombre)
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("guardian listing failed: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_tutor()).collect())
    }
}
