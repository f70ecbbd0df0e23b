use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TurmaService;
use crate::models::{ApiResponse, ErrorCode};

/// Remoção de turma
/// DELETE /turmas/{id}
pub async fn delete_turma(
    service: &TurmaService,
    request: &HttpRequest,
    turma_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_turma(turma_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Turma removida"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TurmaNotFound,
            "Turma não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Remoção de turma falhou: {e}"),
            )),
        ),
    }
}
