//! Entidade de repertório

use sea_orm::entity::prelude::*;

use crate::models::repertoire::entities::RepertoireEntry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "repertoire_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub author_name: String,
    pub author_email: String,
    pub category: String,
    pub theme: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub approved: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_repertoire_entry(self) -> RepertoireEntry {
        RepertoireEntry {
            id: self.id,
            author_name: self.author_name,
            author_email: self.author_email,
            category: self.category,
            theme: self.theme,
            content: self.content,
            approved: self.approved,
            created_at: self.created_at,
        }
    }
}
