use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use super::{ACTIVE_LIST_CACHE_KEY, LiveClassService};
use crate::models::{ApiResponse, ErrorCode};

/// Remoção de aula
/// DELETE /live-classes/{id}
pub async fn delete_live_class(
    service: &LiveClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_live_class(class_id).await {
        Ok(true) => {
            warn!("Aula ao vivo {} removida", class_id);
            service.get_cache(request).remove(ACTIVE_LIST_CACHE_KEY).await;
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Aula removida")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::LiveClassNotFound,
            "Aula não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Remoção de aula falhou: {e}"),
            )),
        ),
    }
}
