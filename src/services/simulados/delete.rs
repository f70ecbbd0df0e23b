use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SimuladoService;
use crate::models::{ApiResponse, ErrorCode};

/// Remoção de simulado
/// DELETE /simulados/{id}
pub async fn delete_simulado(
    service: &SimuladoService,
    request: &HttpRequest,
    simulado_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_simulado(simulado_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Simulado removido"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SimuladoNotFound,
            "Simulado não encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Remoção de simulado falhou: {e}"),
            )),
        ),
    }
}
