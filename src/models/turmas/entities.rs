use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Turma (modelo de negócio)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/turma.ts")]
pub struct Turma {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}
