//! Group entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grupos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub plantel_id: i64,
    pub carrera_id: Option<i64>,
    pub periodo_id: Option<i64>,
    pub nombre: String,
    pub grado: i32,
    pub aula: Option<String>,
    pub capacidad_maxima: i32,
    pub fecha_inicio: Option<i64>,
    pub fecha_fin: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planteles::Entity",
        from = "Column::PlantelId",
        to = "super::planteles::Column::Id"
    )]
    Plantel,
    #[sea_orm(
        belongs_to = "super::carreras::Entity",
        from = "Column::CarreraId",
        to = "super::carreras::Column::Id"
    )]
    Carrera,
    #[sea_orm(
        belongs_to = "super::periodos::Entity",
        from = "Column::PeriodoId",
        to = "super::periodos::Column::Id"
    )]
    Periodo,
    #[sea_orm(has_many = "super::users::Entity")]
    Alumnos,
    #[sea_orm(has_many = "super::grupo_docentes::Entity")]
    GrupoDocentes,
    #[sea_orm(has_many = "super::asignaturas::Entity")]
    Asignaturas,
    #[sea_orm(has_many = "super::asistencias::Entity")]
    Asistencias,
}

impl Related<super::planteles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plantel.def()
    }
}

impl Related<super::carreras::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Carrera.def()
    }
}

impl Related<super::periodos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Periodo.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Alumnos.def()
    }
}

impl Related<super::grupo_docentes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GrupoDocentes.def()
    }
}

impl Related<super::asignaturas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asignaturas.def()
    }
}

impl Related<super::asistencias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asistencias.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_grupo(self) -> crate::models::grupos::entities::Grupo {
        use crate::models::grupos::entities::Grupo;

        Grupo {
            id: self.id,
            plantel_id: self.plantel_id,
            carrera_id: self.carrera_id,
            periodo_id: self.periodo_id,
            nombre: self.nombre,
            grado: self.grado,
            aula: self.aula,
            capacidad_maxima: self.capacidad_maxima,
            fecha_inicio: self.fecha_inicio,
            fecha_fin: self.fecha_fin,
            created_at: self.created_at,
        }
    }
}
