use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode};

/// Remoção administrativa de redação
/// DELETE /submissions/{id}
pub async fn delete_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_submission(submission_id).await {
        Ok(true) => {
            warn!("Redação {} removida pelo administrador", submission_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Redação removida")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Redação não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Remoção de redação falhou: {e}"),
            )),
        ),
    }
}
