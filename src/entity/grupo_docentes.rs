//! Group-teacher assignment entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grupo_docentes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub grupo_id: i64,
    pub docente_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::grupos::Entity",
        from = "Column::GrupoId",
        to = "super::grupos::Column::Id"
    )]
    Grupo,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::DocenteId",
        to = "super::users::Column::Id"
    )]
    Docente,
}

impl Related<super::grupos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grupo.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Docente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
