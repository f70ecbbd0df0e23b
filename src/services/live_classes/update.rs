use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ACTIVE_LIST_CACHE_KEY, LiveClassService};
use crate::models::live_classes::requests::UpdateLiveClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::time::{parse_civil_date, parse_civil_time};

/// Atualização parcial de aula
/// PATCH /live-classes/{id}
pub async fn update_live_class(
    service: &LiveClassService,
    request: &HttpRequest,
    class_id: i64,
    req: UpdateLiveClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current = match storage.get_live_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LiveClassNotFound,
                "Aula não encontrada",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta de aula falhou: {e}"),
                )),
            );
        }
    };

    if let Some(date) = &req.date
        && let Err(e) = parse_civil_date(date)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            e.message().to_string(),
        )));
    }

    // O invariante início < fim vale também para atualizações parciais:
    // compõe o horário novo com o que fica da aula atual
    let start_raw = req.start_time.as_deref().unwrap_or(&current.start_time);
    let end_raw = req.end_time.as_deref().unwrap_or(&current.end_time);
    match (parse_civil_time(start_raw), parse_civil_time(end_raw)) {
        (Ok(start), Ok(end)) => {
            if start >= end {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidTimeRange,
                    "Horário de início deve ser anterior ao de fim",
                )));
            }
        }
        (Err(e), _) | (_, Err(e)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                e.message().to_string(),
            )));
        }
    }

    match storage.update_live_class(class_id, req).await {
        Ok(Some(class)) => {
            service.get_cache(request).remove(ACTIVE_LIST_CACHE_KEY).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Aula atualizada")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LiveClassNotFound,
            "Aula não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Atualização de aula falhou: {e}"),
            )),
        ),
    }
}
