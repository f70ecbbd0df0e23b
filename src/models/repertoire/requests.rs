use serde::Deserialize;
use ts_rs::TS;

/// Envio de parágrafo de repertório
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/repertoire.ts")]
pub struct CreateRepertoireRequest {
    pub author_name: String,
    pub author_email: String,
    pub category: String,
    pub theme: String,
    pub content: String,
}

/// Listagem de repertório
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/repertoire.ts")]
pub struct RepertoireListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub category: Option<String>,
    /// None no painel administrativo lista tudo; alunos veem só aprovados
    pub approved: Option<bool>,
}
