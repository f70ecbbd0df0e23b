use serde::Deserialize;
use ts_rs::TS;

/// Cadastro de corretor
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/corrector.ts")]
pub struct CreateCorrectorRequest {
    pub name: String,
    pub email: String,
    pub authorized_turmas: Option<Vec<String>>,
}

/// Atualização parcial de corretor
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/corrector.ts")]
pub struct UpdateCorrectorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
    pub visible: Option<bool>,
    pub authorized_turmas: Option<Vec<String>>,
}

/// Listagem de corretores
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/corrector.ts")]
pub struct CorrectorListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub active: Option<bool>,
    pub visible: Option<bool>,
}
