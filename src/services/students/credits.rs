use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::students::requests::GrantCreditsRequest;
use crate::models::{ApiResponse, ErrorCode};

/// Concede créditos de correção ao aluno
/// POST /students/{id}/credits
pub async fn grant_credits(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    req: GrantCreditsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.amount <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "A quantidade de créditos deve ser positiva",
        )));
    }

    match storage.grant_credits(student_id, req.amount).await {
        Ok(Some(student)) => {
            info!(
                "{} crédito(s) concedidos ao aluno {} (saldo {})",
                req.amount, student_id, student.credits
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Créditos concedidos")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Aluno não encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Concessão de créditos falhou: {e}"),
            )),
        ),
    }
}
