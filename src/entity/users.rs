//! User entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub rol: String,
    pub estatus: String,
    pub plantel_id: Option<i64>,
    pub grupo_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<i64>,
    pub foto_perfil: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
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
        belongs_to = "super::grupos::Entity",
        from = "Column::GrupoId",
        to = "super::grupos::Column::Id"
    )]
    Grupo,
    #[sea_orm(has_many = "super::tutores::Entity")]
    Tutores,
    #[sea_orm(has_many = "super::calificaciones::Entity")]
    Calificaciones,
    #[sea_orm(has_many = "super::asistencias::Entity")]
    Asistencias,
    #[sea_orm(has_many = "super::grupo_docentes::Entity")]
    GrupoDocentes,
    #[sea_orm(has_many = "super::asignatura_docentes::Entity")]
    AsignaturaDocentes,
}

impl Related<super::planteles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plantel.def()
    }
}

impl Related<super::grupos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grupo.def()
    }
}

impl Related<super::tutores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tutores.def()
    }
}

impl Related<super::calificaciones::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Calificaciones.def()
    }
}

impl Related<super::asistencias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asistencias.def()
    }
}

impl Related<super::grupo_docentes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GrupoDocentes.def()
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
    pub fn into_usuario(self) -> crate::models::users::entities::Usuario {
        use crate::models::users::entities::{Estatus, UserRole, Usuario};

        Usuario {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            rol: self.rol.parse::<UserRole>().unwrap_or(UserRole::Alumno),
            estatus: self.estatus.parse::<Estatus>().unwrap_or(Estatus::Baja),
            plantel_id: self.plantel_id,
            grupo_id: self.grupo_id,
            first_name: self.first_name,
            last_name: self.last_name,
            telefono: self.telefono,
            direccion: self.direccion,
            fecha_nacimiento: self.fecha_nacimiento,
            foto_perfil: self.foto_perfil,
            last_login: self.last_login,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
