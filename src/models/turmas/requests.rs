use serde::Deserialize;
use ts_rs::TS;

/// Criação de turma (código gerado quando omitido)
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/turma.ts")]
pub struct CreateTurmaRequest {
    pub name: String,
    pub code: Option<String>,
}

/// Atualização parcial de turma
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/turma.ts")]
pub struct UpdateTurmaRequest {
    pub name: Option<String>,
    pub active: Option<bool>,
}

/// Listagem de turmas
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/turma.ts")]
pub struct TurmaListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub active: Option<bool>,
}
