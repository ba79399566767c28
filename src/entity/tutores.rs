//! Guardian entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tutores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub alumno_id: i64,
    pub nombre: String,
    pub parentesco: String,
    pub telefono: String,
    pub correo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AlumnoId",
        to = "super::users::Column::Id"
    )]
    Alumno,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alumno.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_tutor(self) -> crate::models::tutores::entities::Tutor {
        use crate::models::tutores::entities::Tutor;

        Tutor {
            id: self.id,
            alumno_id: self.alumno_id,
            nombre: self.nombre,
            parentesco: self.parentesco,
            telefono: self.telefono,
            correo: self.correo,
        }
    }
}
