use super::SeaOrmStorage;
use crate::entity::carreras::{ActiveModel, Column, Entity as Carreras};
use crate::errors::{Result, SgaError};
use crate::models::carreras::{entities::Carrera, requests::CreateCarreraRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_carrera_impl(
        &self,
        plantel_id: i64,
        req: CreateCarreraRequest,
    ) -> Result<Carrera> {
        let model = ActiveModel {
            plantel_id: Set(plantel_id),
            nombre: Set(req.nombre),
            nivel: Set(req.nivel.to_string()),
            clave_rvoe: Set(req.clave_rvoe),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("program creation failed: {e}")))?;

        Ok(result.into_carrera())
    }

    /// Campus-scoped lookup; an id from another campus comes back as None.
    pub async fn get_carrera_scoped_impl(
        &self,
        id: i64,
        plantel_id: i64,
    ) -> Result<Option<Carrera>> {
        let result = Carreras::find()
            .filter(Column::Id.eq(id))
            .filter(Column::PlantelId.eq(plantel_id))
            .one(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("program lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_carrera()))
    }

    pub async fn list_carreras_impl(&self, plantel_id: i64) -> Result<Vec<Carrera>> {
        let carreras = Carreras::find()
            .filter(Column::PlantelId.eq(plantel_id))
            .order_by_asc(Column::Nombre)
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("program listing failed: {e}")))?;

        Ok(carreras.into_iter().map(|m| m.into_carrera()).collect())
    }
}
