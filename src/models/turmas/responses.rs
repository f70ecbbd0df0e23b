use serde::Serialize;
use ts_rs::TS;

use super::entities::Turma;
use crate::models::PaginationInfo;

/// Listagem paginada de turmas
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/turma.ts")]
pub struct TurmaListResponse {
    pub items: Vec<Turma>,
    pub pagination: PaginationInfo,
}
