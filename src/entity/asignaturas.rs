//! Subject entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "asignaturas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub grupo_id: i64,
    pub carrera_id: i64,
    pub nombre: String,
    pub clave: Option<String>,
    pub creditos: Option<i32>,
    pub seriacion_id: Option<i64>,
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
        belongs_to = "super::carreras::Entity",
        from = "Column::CarreraId",
        to = "super::carreras::Column::Id"
    )]
    Carrera,
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::SeriacionId",
        to = "Column::Id"
    )]
    Seriacion,
    #[sea_orm(has_many = "super::calificaciones::Entity")]
    Calificaciones,
    #[sea_orm(has_many = "super::asignatura_docentes::Entity")]
    AsignaturaDocentes,
}

impl Related<super::grupos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grupo.def()
    }
}

impl Related<super::carreras::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Carrera.def()
    }
}

impl Related<super::calificaciones::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Calificaciones.def()
    }
}

impl Related<super::asignatura_docentes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AsignaturaDocentes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_asignatura(self) -> crate::models::asignaturas::entities::Asignatura {
        use crate::models::asignaturas::entities::Asignatura;

        Asignatura {
            id: self.id,
            grupo_id: self.grupo_id,
            carrera_id: self.carrera_id,
            nombre: self.nombre,
            clave: self.clave,
            creditos: self.creditos,
            seriacion_id: self.seriacion_id,
        }
    }
}
