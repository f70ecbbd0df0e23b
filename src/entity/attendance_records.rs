//! Entidade de presença
//!
//! Uma linha por (aula, aluno), garantida pelo índice único
//! `idx_attendance_class_email`.

use sea_orm::entity::prelude::*;

use crate::models::attendance::entities::AttendanceRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub live_class_id: i64,
    pub student_email: String,
    pub student_name: String,
    pub entry_at: Option<i64>,
    pub exit_at: Option<i64>,
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
    pub fn into_attendance_record(self) -> AttendanceRecord {
        AttendanceRecord {
            id: self.id,
            live_class_id: self.live_class_id,
            student_email: self.student_email,
            student_name: self.student_name,
            entry_at: self.entry_at,
            exit_at: self.exit_at,
        }
    }
}
