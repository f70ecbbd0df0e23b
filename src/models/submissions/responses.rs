use serde::Serialize;
use ts_rs::TS;

use super::entities::{Submission, SubmissionCategory};
use crate::models::PaginationInfo;
use crate::models::grading::consolidate::{ConsolidatedGrade, GradeDivergence};

/// Redação com a nota consolidada calculada na leitura
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionResponse {
    #[serde(flatten)]
    pub submission: Submission,
    pub consolidated: ConsolidatedGrade,
}

/// Item da listagem (sem o corpo do texto)
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListItem {
    pub id: i64,
    pub tracking_code: String,
    pub student_name: String,
    pub student_email: String,
    pub turma_code: Option<String>,
    pub category: SubmissionCategory,
    pub simulado_id: Option<i64>,
    pub theme: String,
    pub submitted_at: i64,
    pub corrected: bool,
    pub consolidated: ConsolidatedGrade,
}

impl SubmissionListItem {
    pub fn from_submission(submission: &Submission, divergence_threshold: i32) -> Self {
        Self {
            id: submission.id,
            tracking_code: submission.tracking_code.clone(),
            student_name: submission.student_name.clone(),
            student_email: submission.student_email.clone(),
            turma_code: submission.turma_code.clone(),
            category: submission.category,
            simulado_id: submission.simulado_id,
            theme: submission.theme.clone(),
            submitted_at: submission.submitted_at,
            corrected: submission.corrected,
            consolidated: submission.consolidated(divergence_threshold),
        }
    }
}

/// Listagem paginada de redações
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionListItem>,
    pub pagination: PaginationInfo,
}

/// Redação divergente na fila de resolução administrativa
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct DivergentSubmissionItem {
    pub id: i64,
    pub student_name: String,
    pub student_email: String,
    pub theme: String,
    pub total_corrector_1: i32,
    pub total_corrector_2: i32,
    pub divergence: GradeDivergence,
}

/// Fila de divergências
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct DivergentSubmissionListResponse {
    pub items: Vec<DivergentSubmissionItem>,
}
