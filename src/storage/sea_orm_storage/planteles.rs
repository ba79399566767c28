use super::SeaOrmStorage;
use crate::entity::planteles::{ActiveModel, Column, Entity as Planteles};
use crate::errors::{Result, SgaError};
use crate::models::planteles::{entities::Plantel, requests::CreatePlantelRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

const DEFAULT_TOTAL_AULAS: i32 = 20;

impl SeaOrmStorage {
    pub async fn create_plantel_impl(&self, req: CreatePlantelRequest) -> Result<Plantel> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            nombre: Set(req.nombre),
            direccion: Set(req.direccion),
            nivel_educativo: Set(req.nivel_educativo.to_string()),
            color_tema: Set(req.color_tema.unwrap_or_else(|| "blue".to_string())),
            logo_url: Set(req.logo_url),
            total_aulas: Set(req.total_aulas.unwrap_or(DEFAULT_TOTAL_AULAS)),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("campus creation failed: {e}")))?;

        Ok(result.into_plantel())
    }

    pub async fn get_plantel_by_id_impl(&self, id: i64) -> Result<Option<Plantel>> {
        let result = Planteles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("campus lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_plantel()))
    }

    pub async fn list_planteles_impl(&self) -> Result<Vec<Plantel>> {
        let planteles = Planteles::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("campus listing failed: {e}")))?;

        Ok(planteles.into_iter().map(|m| m.into_plantel()).collect())
    }

    pub async fn update_total_aulas_impl(&self, plantel_id: i64, total_aulas: i32) -> Result<bool> {
        let result = Planteles::update_many()
            .col_expr(
                Column::TotalAulas,
                sea_orm::sea_query::Expr::value(total_aulas),
            )
            .filter(Column::Id.eq(plantel_id))
            .exec(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("classroom update failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
