//! Entidade de simulado

use sea_orm::entity::prelude::*;

use crate::models::simulados::entities::Simulado;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "simulados")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub theme: String,
    pub date: String,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_simulado(self) -> Simulado {
        Simulado {
            id: self.id,
            theme: self.theme,
            date: self.date,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
