use serde::Serialize;
use ts_rs::TS;

use super::entities::Simulado;
use crate::models::PaginationInfo;

/// Listagem paginada de simulados
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/simulado.ts")]
pub struct SimuladoListResponse {
    pub items: Vec<Simulado>,
    pub pagination: PaginationInfo,
}
