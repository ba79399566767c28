//! Subject-teacher assignment entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "asignatura_docentes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub asignatura_id: i64,
    pub docente_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asignaturas::Entity",
        from = "Column::AsignaturaId",
        to = "super::asignaturas::Column::Id"
    )]
    Asignatura,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::DocenteId",
        to = "super::users::Column::Id"
    )]
    Docente,
}

impl Related<super::asignaturas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asignatura.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Docente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
