use serde::Deserialize;
use ts_rs::TS;

/// Registro de entrada ou saída em uma aula ao vivo
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RecordAttendanceRequest {
    pub email: Option<String>,
    /// Nome exibido no relatório; obrigatório apenas para visitantes,
    /// alunos do roster usam o cadastro
    pub name: Option<String>,
}
