use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

/// Cadastra aluno
/// POST /students
pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    req: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() || req.surname.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Nome e sobrenome são obrigatórios",
        )));
    }
    if let Err(msg) = validate_email(&req.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }
    if req.credits < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Créditos iniciais não podem ser negativos",
        )));
    }

    // Turma, quando informada, precisa existir
    if let Some(turma_code) = &req.turma_code {
        match storage.get_turma_by_code(turma_code).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TurmaNotFound,
                    format!("Turma {turma_code} não encontrada"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Consulta de turma falhou: {e}"),
                    )),
                );
            }
        }
    }

    match storage.get_student_by_email(&req.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmailTaken,
                "Já existe aluno com este e-mail",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta de aluno falhou: {e}"),
                )),
            );
        }
    }

    match storage.create_student(req).await {
        Ok(student) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Aluno cadastrado")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Cadastro de aluno falhou: {e}"),
            )),
        ),
    }
}
