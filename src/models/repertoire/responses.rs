use serde::Serialize;
use ts_rs::TS;

use super::entities::RepertoireEntry;
use crate::models::PaginationInfo;

/// Listagem paginada de repertório
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/repertoire.ts")]
pub struct RepertoireListResponse {
    pub items: Vec<RepertoireEntry>,
    pub pagination: PaginationInfo,
}
