//! Grade entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "calificaciones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub alumno_id: i64,
    pub asignatura_id: i64,
    pub nota: f64,
    pub fecha: i64,
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
        belongs_to = "super::asignaturas::Entity",
        from = "Column::AsignaturaId",
        to = "super::asignaturas::Column::Id"
    )]
    Asignatura,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alumno.def()
    }
}

impl Related<super::asignaturas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asignatura.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_calificacion(self) -> crate::models::calificaciones::entities::Calificacion {
        use crate::models::calificaciones::entities::Calificacion;

        Calificacion {
            id: self.id,
            alumno_id: self.alumno_id,
            asignatura_id: self.asignatura_id,
            nota: self.nota,
            fecha: self.fecha,
        }
    }
}
