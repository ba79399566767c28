//! Attendance entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "asistencias")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub alumno_id: i64,
    pub grupo_id: i64,
    pub fecha: i64,
    pub presente: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AlumnoId",
        to = "super::users::Column::Id"
    )]
    Alumno,
    #[sea_orm(
        belongs_to = "super::grupos::Entity",
        from = "Column::GrupoId",
        to = "super::grupos::Column::Id"
    )]
    Grupo,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alumno.def()
    }
}

impl Related<super::grupos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grupo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_asistencia(self) -> crate::models::asistencias::entities::Asistencia {
        use crate::models::asistencias::entities::Asistencia;

        Asistencia {
            id: self.id,
            alumno_id: self.alumno_id,
            grupo_id: self.grupo_id,
            fecha: self.fecha,
            presente: self.presente,
        }
    }
}
