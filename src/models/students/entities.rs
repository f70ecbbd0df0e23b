use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aluno (modelo de negócio)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub turma_code: Option<String>,
    /// Saldo de créditos de correção para envios regulares
    pub credits: i32,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}
