use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::RankingService;
use crate::config::AppConfig;
use crate::models::ranking::entities::{DEFAULT_TIER_COUNT, ScoreEntry, tier_ranking};
use crate::models::ranking::requests::RankingQuery;
use crate::models::ranking::responses::RankingResponse;
use crate::models::submissions::requests::CorrectedSubmissionQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::time::civil_year_month;

/// Ranking por faixas das redações corrigidas
///
/// O filtro de mês compara (ano, mês) inteiros no relógio civil de São
/// Paulo, nunca rótulos formatados.
/// GET /ranking
pub async fn get_leaderboard(
    service: &RankingService,
    request: &HttpRequest,
    query: RankingQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let month_filter = match (query.year, query.month) {
        (Some(year), Some(month)) => {
            if !(1..=12).contains(&month) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Mês deve estar entre 1 e 12",
                )));
            }
            Some((year, month))
        }
        (None, None) => None,
        _ => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Filtro de mês exige ano e mês juntos",
            )));
        }
    };

    let submissions = match storage
        .list_corrected_submissions(CorrectedSubmissionQuery {
            category: query.category,
            simulado_id: query.simulado_id,
        })
        .await
    {
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

    let entries: Vec<ScoreEntry> = submissions
        .into_iter()
        .filter(|submission| match month_filter {
            None => true,
            Some((year, month)) => match civil_year_month(submission.submitted_at) {
                Ok(pair) => pair == (year, month),
                Err(e) => {
                    warn!("Redação {} com timestamp ilegível: {}", submission.id, e);
                    false
                }
            },
        })
        .filter_map(|submission| {
            let total = submission.consolidated(threshold).total?;
            Some(ScoreEntry {
                student_name: submission.student_name,
                student_email: submission.student_email,
                total,
            })
        })
        .collect();

    let pool_size = entries.len();
    let items = tier_ranking(entries, DEFAULT_TIER_COUNT);
    let tier_count = items
        .iter()
        .map(|r| r.rank)
        .max()
        .unwrap_or(0) as usize;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        RankingResponse {
            items,
            tier_count,
            pool_size,
        },
        "Consulta realizada",
    )))
}
