//! Entidade de anotação de correção

use sea_orm::entity::prelude::*;

use crate::models::annotations::entities::Annotation;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "annotations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub submission_id: i64,
    pub corrector_id: i64,
    pub competency: Option<i32>,
    pub pos_x: f64,
    pub pos_y: f64,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submissions::Entity",
        from = "Column::SubmissionId",
        to = "super::submissions::Column::Id"
    )]
    Submission,
    #[sea_orm(
        belongs_to = "super::correctors::Entity",
        from = "Column::CorrectorId",
        to = "super::correctors::Column::Id"
    )]
    Corrector,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl Related<super::correctors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Corrector.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_annotation(self) -> Annotation {
        Annotation {
            id: self.id,
            submission_id: self.submission_id,
            corrector_id: self.corrector_id,
            competency: self.competency,
            pos_x: self.pos_x,
            pos_y: self.pos_y,
            comment: self.comment,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
