use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RepertoireService;
use crate::models::{ApiResponse, ErrorCode};

/// Remoção de parágrafo de repertório
/// DELETE /repertoire/{id}
pub async fn delete_entry(
    service: &RepertoireService,
    request: &HttpRequest,
    entry_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_repertoire_entry(entry_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Repertório removido"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RepertoireEntryNotFound,
            "Repertório não encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Remoção de repertório falhou: {e}"),
            )),
        ),
    }
}
