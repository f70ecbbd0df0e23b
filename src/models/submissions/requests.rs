use serde::Deserialize;
use ts_rs::TS;

use super::entities::SubmissionCategory;
use crate::models::grading::consolidate::COMPETENCY_COUNT;

/// Envio de redação
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub student_name: String,
    pub student_email: String,
    pub turma_code: Option<String>,
    pub category: SubmissionCategory,
    pub simulado_id: Option<i64>,
    pub theme: String,
    pub content: String,
}

/// Listagem de redações
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub category: Option<SubmissionCategory>,
    pub simulado_id: Option<i64>,
    pub turma_code: Option<String>,
    pub student_email: Option<String>,
    pub corrected: Option<bool>,
}

/// Designação de corretor (ocupa o primeiro slot livre)
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct AssignCorrectorRequest {
    pub corrector_id: i64,
}

/// Fechamento das notas de um corretor
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub corrector_id: i64,
    /// Notas das cinco competências, 0-200 cada
    pub competencies: [i32; COMPETENCY_COUNT],
}

/// Filtros do pool de redações corrigidas (divergências e ranking)
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CorrectedSubmissionQuery {
    pub category: Option<SubmissionCategory>,
    pub simulado_id: Option<i64>,
}
