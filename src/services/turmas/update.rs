use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TurmaService;
use crate::models::turmas::requests::UpdateTurmaRequest;
use crate::models::{ApiResponse, ErrorCode};

/// Atualização parcial de turma
/// PATCH /turmas/{id}
pub async fn update_turma(
    service: &TurmaService,
    request: &HttpRequest,
    turma_id: i64,
    req: UpdateTurmaRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_turma(turma_id, req).await {
        Ok(Some(turma)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(turma, "Turma atualizada")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TurmaNotFound,
            "Turma não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Atualização de turma falhou: {e}"),
            )),
        ),
    }
}
