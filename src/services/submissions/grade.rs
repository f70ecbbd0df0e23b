use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::config::AppConfig;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_competency_scores;

/// Fecha as notas de um corretor sobre a redação
/// POST /submissions/{id}/grades
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // Notas fora de 0-200 nunca chegam ao banco
    if let Err(msg) = validate_competency_scores(&req.competencies) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ScoreOutOfRange, msg)));
    }

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Redação não encontrada",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta de redação falhou: {e}"),
                )),
            );
        }
    };

    // O corretor precisa ocupar um dos slots
    let slot = if submission.corrector_1.map(|c| c.corrector_id) == Some(req.corrector_id) {
        1
    } else if submission.corrector_2.map(|c| c.corrector_id) == Some(req.corrector_id) {
        2
    } else {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::CorrectorNotFound,
            "Corretor não designado para esta redação",
        )));
    };

    let total: i32 = req.competencies.iter().sum();

    match storage
        .record_corrector_grades(submission_id, slot, req.competencies, total)
        .await
    {
        Ok(Some(submission)) => {
            let threshold = AppConfig::get().grading.divergence_threshold;
            let consolidated = submission.consolidated(threshold);
            info!(
                "Correção registrada na redação {} (slot {}, total {}, status {:?})",
                submission_id, slot, total, consolidated.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmissionResponse {
                    submission,
                    consolidated,
                },
                "Correção registrada",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Redação não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Registro de correção falhou: {e}"),
            )),
        ),
    }
}
