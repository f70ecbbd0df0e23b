//! Entidade de corretor

use sea_orm::entity::prelude::*;
use tracing::warn;

use crate::models::correctors::entities::Corrector;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "correctors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub active: bool,
    pub visible: bool,
    /// JSON com a lista de códigos de turma autorizados
    #[sea_orm(column_type = "Text", nullable)]
    pub authorized_turmas: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::annotations::Entity")]
    Annotations,
}

impl Related<super::annotations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Annotations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_corrector(self) -> Corrector {
        let authorized_turmas = self.authorized_turmas.as_deref().map(|raw| {
            serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|e| {
                warn!("authorized_turmas malformado para corretor {}: {}", self.id, e);
                Vec::new()
            })
        });
        Corrector {
            id: self.id,
            name: self.name,
            email: self.email,
            active: self.active,
            visible: self.visible,
            authorized_turmas,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
