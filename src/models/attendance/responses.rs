use serde::Serialize;
use ts_rs::TS;

use super::entities::{AttendanceClassification, AttendanceOutcome, AttendanceRecord};

/// Resultado de um registro de entrada/saída
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceResultResponse {
    /// Código simbólico (entrada_ok, precisa_entrada, ...)
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<AttendanceRecord>,
}

impl AttendanceResultResponse {
    pub fn new(outcome: AttendanceOutcome, record: Option<AttendanceRecord>) -> Self {
        Self {
            result: outcome.code(),
            record,
        }
    }
}

/// Linha do relatório de presença
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceReportItem {
    pub student_name: String,
    pub student_email: String,
    /// Turma do aluno no roster; visitantes ficam sem turma
    pub turma_code: Option<String>,
    pub classification: AttendanceClassification,
    pub entry_at: Option<i64>,
    pub exit_at: Option<i64>,
    pub duration_minutes: Option<i64>,
}

/// Relatório de presença de uma aula
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceReportResponse {
    pub live_class_id: i64,
    pub items: Vec<AttendanceReportItem>,
    pub complete_count: i64,
    pub incomplete_count: i64,
    pub absent_count: i64,
}

/// Tentativa de acesso negada
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AccessDenial {
    pub id: i64,
    pub live_class_id: i64,
    pub email: String,
    pub reason: String,
    pub attempted_at: i64,
}

/// Listagem do log de acessos negados
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AccessDenialListResponse {
    pub items: Vec<AccessDenial>,
}
