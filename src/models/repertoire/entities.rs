use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Parágrafo de repertório compartilhado entre os alunos
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/repertoire.ts")]
pub struct RepertoireEntry {
    pub id: i64,
    pub author_name: String,
    pub author_email: String,
    pub category: String,
    pub theme: String,
    pub content: String,
    /// Visível para os alunos após aprovação administrativa
    pub approved: bool,
    pub created_at: i64,
}
