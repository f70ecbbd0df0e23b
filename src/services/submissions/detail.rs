use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::config::AppConfig;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};

/// Detalhe de redação
/// GET /submissions/{id}
pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => {
            let threshold = AppConfig::get().grading.divergence_threshold;
            let consolidated = submission.consolidated(threshold);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmissionResponse {
                    submission,
                    consolidated,
                },
                "Consulta realizada",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Redação não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Consulta de redação falhou: {e}"),
            )),
        ),
    }
}

/// Consulta pública pelo código de acompanhamento
/// GET /submissions/tracking/{code}
pub async fn get_submission_by_tracking_code(
    service: &SubmissionService,
    request: &HttpRequest,
    tracking_code: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_submission_by_tracking_code(&tracking_code).await {
        Ok(Some(submission)) => {
            let threshold = AppConfig::get().grading.divergence_threshold;
            let consolidated = submission.consolidated(threshold);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmissionResponse {
                    submission,
                    consolidated,
                },
                "Consulta realizada",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Código de acompanhamento não encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Consulta de redação falhou: {e}"),
            )),
        ),
    }
}
