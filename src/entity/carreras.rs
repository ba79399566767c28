//! Academic program entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "carreras")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub plantel_id: i64,
    pub nombre: String,
    pub nivel: String,
    pub clave_rvoe: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planteles::Entity",
        from = "Column::PlantelId",
        to = "super::planteles::Column::Id"
    )]
    Plantel,
    #[sea_orm(has_many = "super::grupos::Entity")]
    Grupos,
    #[sea_orm(has_many = "super::asignaturas::Entity")]
    Asignaturas,
}

impl Related<super::planteles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plantel.def()
    }
}

impl Related<super::grupos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grupos.def()
    }
}

impl Related<super::asignaturas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asignaturas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_carrera(self) -> crate::models::carreras::entities::Carrera {
        use crate::models::carreras::entities::{Carrera, NivelAcademico};

        Carrera {
            id: self.id,
            plantel_id: self.plantel_id,
            nombre: self.nombre,
            nivel: self
                .nivel
                .parse::<NivelAcademico>()
                .unwrap_or(NivelAcademico::Secundaria),
            clave_rvoe: self.clave_rvoe,
        }
    }
}
