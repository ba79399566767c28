//! Campus entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planteles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
    pub direccion: Option<String>,
    pub nivel_educativo: String,
    pub color_tema: String,
    pub logo_url: Option<String>,
    pub total_aulas: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
    #[sea_orm(has_many = "super::carreras::Entity")]
    Carreras,
    #[sea_orm(has_many = "super::grupos::Entity")]
    Grupos,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::carreras::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Carreras.def()
    }
}

impl Related<super::grupos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grupos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Database model to business model
impl Model {
    pub fn into_plantel(self) -> crate::models::planteles::entities::Plantel {
        use crate::models::planteles::entities::{NivelEducativo, Plantel};

        Plantel {
            id: self.id,
            nombre: self.nombre,
            direccion: self.direccion,
            nivel_educativo: self
                .nivel_educativo
                .parse::<NivelEducativo>()
                .unwrap_or(NivelEducativo::Basica),
            color_tema: self.color_tema,
            logo_url: self.logo_url,
            total_aulas: self.total_aulas,
            created_at: self.created_at,
        }
    }
}
