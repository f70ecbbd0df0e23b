use serde::Deserialize;
use ts_rs::TS;

/// Cadastro de aluno
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub turma_code: Option<String>,
    #[serde(default)]
    pub credits: i32,
}

/// Atualização parcial de aluno
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub turma_code: Option<String>,
    pub active: Option<bool>,
}

/// Concessão de créditos de correção
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct GrantCreditsRequest {
    pub amount: i32,
}

/// Listagem de alunos
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub turma_code: Option<String>,
    pub active: Option<bool>,
}
