use serde::Serialize;
use ts_rs::TS;

use super::entities::{LiveClass, LiveClassStatus};
use crate::models::PaginationInfo;

/// Aula ao vivo com o status calculado no momento da leitura
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/live_class.ts")]
pub struct LiveClassResponse {
    #[serde(flatten)]
    pub class: LiveClass,
    pub status: LiveClassStatus,
}

/// Listagem administrativa
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/live_class.ts")]
pub struct LiveClassListResponse {
    pub items: Vec<LiveClassResponse>,
    pub pagination: PaginationInfo,
}

/// Listagem do aluno: só aulas dentro da janela de exibição
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/live_class.ts")]
pub struct ActiveLiveClassListResponse {
    pub items: Vec<LiveClassResponse>,
}

/// Resultado da verificação de acesso por e-mail
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/live_class.ts")]
pub struct AccessCheckResponse {
    pub authorized: bool,
    /// Acesso concedido como visitante (aula com visitor_allowed)
    pub visitor: bool,
    pub reason: String,
}
