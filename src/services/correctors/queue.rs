use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CorrectorService;
use crate::config::AppConfig;
use crate::models::correctors::responses::CorrectorQueueResponse;
use crate::models::submissions::responses::SubmissionListItem;
use crate::models::{ApiResponse, ErrorCode};

/// Fila de redações designadas e ainda pendentes do corretor
/// GET /correctors/{id}/queue
pub async fn get_corrector_queue(
    service: &CorrectorService,
    request: &HttpRequest,
    corrector_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let corrector = match storage.get_corrector_by_id(corrector_id).await {
        Ok(Some(c)) => c,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CorrectorNotFound,
                "Corretor não encontrado",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta de corretor falhou: {e}"),
                )),
            );
        }
    };

    match storage
        .list_pending_submissions_for_corrector(corrector_id)
        .await
    {
        Ok(submissions) => {
            let threshold = AppConfig::get().grading.divergence_threshold;
            let items = submissions
                .iter()
                .map(|s| SubmissionListItem::from_submission(s, threshold))
                .collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CorrectorQueueResponse { corrector, items },
                "Consulta realizada",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Listagem da fila falhou: {e}"),
            )),
        ),
    }
}
