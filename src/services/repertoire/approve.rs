use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RepertoireService;
use crate::models::{ApiResponse, ErrorCode};

/// Aprova ou reprova um parágrafo de repertório
/// POST /repertoire/{id}/approve | POST /repertoire/{id}/reject
pub async fn set_approved(
    service: &RepertoireService,
    request: &HttpRequest,
    entry_id: i64,
    approved: bool,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.set_repertoire_approved(entry_id, approved).await {
        Ok(Some(entry)) => {
            info!(
                "Repertório {} {}",
                entry_id,
                if approved { "aprovado" } else { "reprovado" }
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                entry,
                if approved {
                    "Repertório aprovado"
                } else {
                    "Repertório reprovado"
                },
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RepertoireEntryNotFound,
            "Repertório não encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Aprovação de repertório falhou: {e}"),
            )),
        ),
    }
}
