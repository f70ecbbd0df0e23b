use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::config::AppConfig;
use crate::models::submissions::requests::CorrectedSubmissionQuery;
use crate::models::submissions::responses::{
    DivergentSubmissionItem, DivergentSubmissionListResponse,
};
use crate::models::{ApiResponse, ErrorCode};

/// Fila de redações divergentes para resolução administrativa
/// GET /submissions/divergences
pub async fn list_divergent_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    query: CorrectedSubmissionQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let submissions = match storage.list_corrected_submissions(query).await {
        Ok(list) => list,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Listagem de corrigidas falhou: {e}"),
                )),
            );
        }
    };

    let threshold = AppConfig::get().grading.divergence_threshold;
    let items: Vec<DivergentSubmissionItem> = submissions
        .into_iter()
        .filter_map(|submission| {
            let consolidated = submission.consolidated(threshold);
            let divergence = consolidated.divergence?;
            if !divergence.divergent {
                return None;
            }
            // Com divergência presente os dois totais estão fechados
            let total_1 = submission.corrector_1.and_then(|c| c.total)?;
            let total_2 = submission.corrector_2.and_then(|c| c.total)?;
            Some(DivergentSubmissionItem {
                id: submission.id,
                student_name: submission.student_name,
                student_email: submission.student_email,
                theme: submission.theme,
                total_corrector_1: total_1,
                total_corrector_2: total_2,
                divergence,
            })
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DivergentSubmissionListResponse { items },
        "Consulta realizada",
    )))
}
