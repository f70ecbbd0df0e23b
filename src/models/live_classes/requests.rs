use serde::Deserialize;
use ts_rs::TS;

/// Criação de aula ao vivo
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/live_class.ts")]
pub struct CreateLiveClassRequest {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub meeting_url: String,
    #[serde(default)]
    pub authorized_turmas: Vec<String>,
    #[serde(default)]
    pub visitor_allowed: bool,
    #[serde(default = "default_true")]
    pub is_live_format: bool,
}

/// Atualização parcial de aula ao vivo
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/live_class.ts")]
pub struct UpdateLiveClassRequest {
    pub title: Option<String>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub meeting_url: Option<String>,
    pub authorized_turmas: Option<Vec<String>>,
    pub visitor_allowed: Option<bool>,
    pub active: Option<bool>,
    pub is_live_format: Option<bool>,
}

/// Listagem administrativa de aulas
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/live_class.ts")]
pub struct LiveClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub active: Option<bool>,
    /// Filtra aulas autorizadas para uma turma
    pub turma_code: Option<String>,
}

/// Identificação do aluno na listagem ativa e no controle de acesso
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/live_class.ts")]
pub struct StudentAccessQuery {
    pub email: Option<String>,
}

fn default_true() -> bool {
    true
}
