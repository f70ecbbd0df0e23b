//! Entidade de turma

use sea_orm::entity::prelude::*;

use crate::models::turmas::entities::Turma;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "turmas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_turma(self) -> Turma {
        Turma {
            id: self.id,
            code: self.code,
            name: self.name,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
