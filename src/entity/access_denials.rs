//! Entidade de acesso negado

use sea_orm::entity::prelude::*;

use crate::models::attendance::responses::AccessDenial;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "access_denials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub live_class_id: i64,
    pub email: String,
    pub reason: String,
    pub attempted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::live_classes::Entity",
        from = "Column::LiveClassId",
        to = "super::live_classes::Column::Id"
    )]
    LiveClass,
}

impl Related<super::live_classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LiveClass.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_access_denial(self) -> AccessDenial {
        AccessDenial {
            id: self.id,
            live_class_id: self.live_class_id,
            email: self.email,
            reason: self.reason,
            attempted_at: self.attempted_at,
        }
    }
}
