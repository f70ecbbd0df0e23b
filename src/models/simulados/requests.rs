use serde::Deserialize;
use ts_rs::TS;

/// Criação de simulado
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/simulado.ts")]
pub struct CreateSimuladoRequest {
    pub theme: String,
    pub date: String,
}

/// Atualização parcial de simulado
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/simulado.ts")]
pub struct UpdateSimuladoRequest {
    pub theme: Option<String>,
    pub date: Option<String>,
    pub active: Option<bool>,
}

/// Listagem de simulados
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/simulado.ts")]
pub struct SimuladoListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub active: Option<bool>,
}
