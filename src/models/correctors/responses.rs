use serde::Serialize;
use ts_rs::TS;

use super::entities::Corrector;
use crate::models::PaginationInfo;
use crate::models::submissions::responses::SubmissionListItem;

/// Listagem paginada de corretores
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/corrector.ts")]
pub struct CorrectorListResponse {
    pub items: Vec<Corrector>,
    pub pagination: PaginationInfo,
}

/// Fila de correção de um corretor
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/corrector.ts")]
pub struct CorrectorQueueResponse {
    pub corrector: Corrector,
    pub items: Vec<SubmissionListItem>,
}
