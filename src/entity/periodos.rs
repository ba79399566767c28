//! Academic term entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "periodos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
    pub fecha_inicio: Option<i64>,
    pub fecha_fin: Option<i64>,
    pub activo: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::grupos::Entity")]
    Grupos,
}

impl Related<super::grupos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grupos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_periodo(self) -> crate::models::periodos::entities::Periodo {
        use crate::models::periodos::entities::Periodo;

        Periodo {
            id: self.id,
            nombre: self.nombre,
            fecha_inicio: self.fecha_inicio,
            fecha_fin: self.fecha_fin,
            activo: self.activo,
        }
    }
}
