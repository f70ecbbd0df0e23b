//! Entidade de aula ao vivo

use sea_orm::entity::prelude::*;
use tracing::warn;

use crate::models::live_classes::entities::LiveClass;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "live_classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub meeting_url: String,
    /// JSON com a lista de códigos de turma autorizados
    #[sea_orm(column_type = "Text")]
    pub authorized_turmas: String,
    pub visitor_allowed: bool,
    pub active: bool,
    pub is_live_format: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance_records::Entity")]
    AttendanceRecords,
    #[sea_orm(has_many = "super::access_denials::Entity")]
    AccessDenials,
}

impl Related<super::attendance_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceRecords.def()
    }
}

impl Related<super::access_denials::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessDenials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_live_class(self) -> LiveClass {
        let authorized_turmas =
            serde_json::from_str::<Vec<String>>(&self.authorized_turmas).unwrap_or_else(|e| {
                warn!("authorized_turmas malformado na aula {}: {}", self.id, e);
                Vec::new()
            });
        LiveClass {
            id: self.id,
            title: self.title,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            meeting_url: self.meeting_url,
            authorized_turmas,
            visitor_allowed: self.visitor_allowed,
            active: self.active,
            is_live_format: self.is_live_format,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
