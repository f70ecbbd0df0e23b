use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Simulado: edição de prova simulada
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/simulado.ts")]
pub struct Simulado {
    pub id: i64,
    pub theme: String,
    /// Data civil YYYY-MM-DD
    pub date: String,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
