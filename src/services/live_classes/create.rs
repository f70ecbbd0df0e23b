use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ACTIVE_LIST_CACHE_KEY, LiveClassService};
use crate::models::live_classes::requests::CreateLiveClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::time::{parse_civil_date, parse_civil_time};

/// Cria aula ao vivo
/// POST /live-classes
pub async fn create_live_class(
    service: &LiveClassService,
    request: &HttpRequest,
    req: CreateLiveClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() || req.meeting_url.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Título e link da reunião são obrigatórios",
        )));
    }

    if let Err(e) = parse_civil_date(&req.date) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            e.message().to_string(),
        )));
    }

    let (start, end) = match (parse_civil_time(&req.start_time), parse_civil_time(&req.end_time))
    {
        (Ok(start), Ok(end)) => (start, end),
        (Err(e), _) | (_, Err(e)) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                e.message().to_string(),
            )));
        }
    };

    // Invariante da aula: início antes do fim
    if start >= end {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidTimeRange,
            "Horário de início deve ser anterior ao de fim",
        )));
    }

    match storage.create_live_class(req).await {
        Ok(class) => {
            info!("Aula ao vivo {} criada ({} {})", class.id, class.date, class.start_time);
            service.get_cache(request).remove(ACTIVE_LIST_CACHE_KEY).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Aula criada")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Criação de aula falhou: {e}"),
            )),
        ),
    }
}
