use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CorrectorService;
use crate::models::{ApiResponse, ErrorCode};

/// Remoção de corretor
/// DELETE /correctors/{id}
pub async fn delete_corrector(
    service: &CorrectorService,
    request: &HttpRequest,
    corrector_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_corrector(corrector_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Corretor removido"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CorrectorNotFound,
            "Corretor não encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Remoção de corretor falhou: {e}"),
            )),
        ),
    }
}
