//! Entidade de redação

use sea_orm::entity::prelude::*;
use tracing::warn;

use crate::models::submissions::entities::{
    CorrectorReviewStatus, Submission, SubmissionCategory, SubmissionCorrector,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub tracking_code: String,
    pub student_name: String,
    pub student_email: String,
    pub turma_code: Option<String>,
    pub category: String,
    pub simulado_id: Option<i64>,
    pub theme: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub submitted_at: i64,
    pub corrected: bool,
    pub corrector_id_1: Option<i64>,
    pub status_corrector_1: Option<String>,
    pub competency_1_corrector_1: Option<i32>,
    pub competency_2_corrector_1: Option<i32>,
    pub competency_3_corrector_1: Option<i32>,
    pub competency_4_corrector_1: Option<i32>,
    pub competency_5_corrector_1: Option<i32>,
    pub total_corrector_1: Option<i32>,
    pub corrector_id_2: Option<i64>,
    pub status_corrector_2: Option<String>,
    pub competency_1_corrector_2: Option<i32>,
    pub competency_2_corrector_2: Option<i32>,
    pub competency_3_corrector_2: Option<i32>,
    pub competency_4_corrector_2: Option<i32>,
    pub competency_5_corrector_2: Option<i32>,
    pub total_corrector_2: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::simulados::Entity",
        from = "Column::SimuladoId",
        to = "super::simulados::Column::Id"
    )]
    Simulado,
    #[sea_orm(
        belongs_to = "super::correctors::Entity",
        from = "Column::CorrectorId1",
        to = "super::correctors::Column::Id"
    )]
    Corrector1,
    #[sea_orm(
        belongs_to = "super::correctors::Entity",
        from = "Column::CorrectorId2",
        to = "super::correctors::Column::Id"
    )]
    Corrector2,
    #[sea_orm(has_many = "super::annotations::Entity")]
    Annotations,
}

impl Related<super::simulados::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Simulado.def()
    }
}

impl Related<super::annotations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Annotations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn slot(
    corrector_id: Option<i64>,
    status: Option<&str>,
    competencies: [Option<i32>; 5],
    total: Option<i32>,
) -> Option<SubmissionCorrector> {
    let corrector_id = corrector_id?;
    let status = status
        .and_then(CorrectorReviewStatus::parse)
        .unwrap_or(CorrectorReviewStatus::Pendente);
    let competencies = match competencies {
        [Some(c1), Some(c2), Some(c3), Some(c4), Some(c5)] => Some([c1, c2, c3, c4, c5]),
        _ => None,
    };
    Some(SubmissionCorrector {
        corrector_id,
        status,
        competencies,
        total,
    })
}

impl Model {
    pub fn into_submission(self) -> Submission {
        let category = SubmissionCategory::parse(&self.category).unwrap_or_else(|| {
            warn!("categoria desconhecida '{}' na redação {}", self.category, self.id);
            SubmissionCategory::Avulsa
        });

        let corrector_1 = slot(
            self.corrector_id_1,
            self.status_corrector_1.as_deref(),
            [
                self.competency_1_corrector_1,
                self.competency_2_corrector_1,
                self.competency_3_corrector_1,
                self.competency_4_corrector_1,
                self.competency_5_corrector_1,
            ],
            self.total_corrector_1,
        );
        let corrector_2 = slot(
            self.corrector_id_2,
            self.status_corrector_2.as_deref(),
            [
                self.competency_1_corrector_2,
                self.competency_2_corrector_2,
                self.competency_3_corrector_2,
                self.competency_4_corrector_2,
                self.competency_5_corrector_2,
            ],
            self.total_corrector_2,
        );

        Submission {
            id: self.id,
            tracking_code: self.tracking_code,
            student_name: self.student_name,
            student_email: self.student_email,
            turma_code: self.turma_code,
            category,
            simulado_id: self.simulado_id,
            theme: self.theme,
            content: self.content,
            submitted_at: self.submitted_at,
            corrected: self.corrected,
            corrector_1,
            corrector_2,
        }
    }
}
