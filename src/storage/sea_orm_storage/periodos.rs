use super::SeaOrmStorage;
use crate::entity::periodos::{ActiveModel, Column, Entity as Periodos};
use crate::errors::{Result, SgaError};
use crate::models::periodos::{entities::Periodo, requests::NewPeriodo};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_periodo_impl(&self, req: NewPeriodo) -> Result<Periodo> {
        let model = ActiveModel {
            nombre: Set(req.nombre),
            fecha_inicio: Set(req.fecha_inicio),
            fecha_fin: Set(req.fecha_fin),
            activo: Set(req.activo),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("period creation failed: {e}")))?;

        Ok(result.into_periodo())
    }

    pub async fn get_periodo_by_id_impl(&self, id: i64) -> Result<Option<Periodo>> {
        let result = Periodos::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("period lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_periodo()))
    }

    pub async fn list_periodos_impl(&self, activo: Option<bool>) -> Result<Vec<Periodo>> {
        let mut select = Periodos::find();
        if let Some(activo) = activo {
            select = select.filter(Column::Activo.eq(activo));
        }

        let periodos = select
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("period listing failed: {e}")))?;

        Ok(periodos.into_iter().map(|m| m.into_periodo()).collect())
    }
}
