//! Modelos de negócio e contratos da API
//!
//! Separados das entidades SeaORM: o storage converte as linhas do banco
//! para estes tipos antes de devolvê-las às camadas de cima.

pub mod annotations;
pub mod attendance;
pub mod common;
pub mod correctors;
pub mod grading;
pub mod live_classes;
pub mod ranking;
pub mod repertoire;
pub mod simulados;
pub mod students;
pub mod submissions;
pub mod turmas;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// Momento de partida do processo (exposto no banner de inicialização)
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// Códigos de erro da API
///
/// Faixas: 0 sucesso, 40xxx erros genéricos de requisição, 41xxx recurso
/// não encontrado, 42xxx regra de negócio, 43xxx acesso, 50xxx interno.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 40000,
    NotFound = 40400,
    RateLimitExceeded = 42900,

    SubmissionNotFound = 41001,
    CorrectorNotFound = 41002,
    StudentNotFound = 41003,
    TurmaNotFound = 41004,
    SimuladoNotFound = 41005,
    LiveClassNotFound = 41006,
    AnnotationNotFound = 41007,
    RepertoireEntryNotFound = 41008,

    ScoreOutOfRange = 42001,
    CreditsInsufficient = 42002,
    CorrectorLimitReached = 42003,
    CorrectorAlreadyAssigned = 42004,
    CorrectorUnavailable = 42005,
    DistinctCorrectorsRequired = 42006,
    InvalidTimeRange = 42007,
    InvalidCategory = 42008,
    EmailTaken = 42009,
    TurmaCodeTaken = 42010,
    AttendanceRejected = 42011,

    AccessDenied = 43001,
    NotAuthenticated = 43002,

    InternalServerError = 50000,
}
