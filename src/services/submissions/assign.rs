use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::config::AppConfig;
use crate::models::submissions::entities::SubmissionCategory;
use crate::models::submissions::requests::AssignCorrectorRequest;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};

/// Designa um corretor para o primeiro slot livre da redação
/// POST /submissions/{id}/correctors
pub async fn assign_corrector(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: AssignCorrectorRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    let corrector = match storage.get_corrector_by_id(req.corrector_id).await {
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

    if !corrector.assignable() {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::CorrectorUnavailable,
            "Corretor inativo ou indisponível para novas designações",
        )));
    }

    if !corrector.authorized_for(submission.turma_code.as_deref()) {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::CorrectorUnavailable,
            "Corretor não autorizado para a turma desta redação",
        )));
    }

    if submission.has_corrector(corrector.id) {
        // No simulado a dupla precisa ser de corretores distintos
        let (code, message) = if submission.category == SubmissionCategory::Simulado {
            (
                ErrorCode::DistinctCorrectorsRequired,
                "Simulado exige dois corretores distintos",
            )
        } else {
            (
                ErrorCode::CorrectorAlreadyAssigned,
                "Corretor já designado para esta redação",
            )
        };
        return Ok(HttpResponse::UnprocessableEntity()
            .json(ApiResponse::error_empty(code, message)));
    }

    let slot = match (submission.corrector_1.is_some(), submission.corrector_2.is_some()) {
        (false, _) => 1,
        (true, false) => 2,
        (true, true) => {
            return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
                ErrorCode::CorrectorLimitReached,
                "Redação já tem o máximo de 2 corretores",
            )));
        }
    };

    match storage.assign_corrector(submission_id, slot, corrector.id).await {
        Ok(Some(submission)) => {
            info!(
                "Corretor {} designado para a redação {} (slot {})",
                corrector.id, submission_id, slot
            );
            let threshold = AppConfig::get().grading.divergence_threshold;
            let consolidated = submission.consolidated(threshold);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmissionResponse {
                    submission,
                    consolidated,
                },
                "Corretor designado",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Redação não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Designação de corretor falhou: {e}"),
            )),
        ),
    }
}
