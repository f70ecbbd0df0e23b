use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SimuladoService;
use crate::models::simulados::requests::SimuladoListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// Listagem de simulados
/// GET /simulados
pub async fn list_simulados(
    service: &SimuladoService,
    request: &HttpRequest,
    query: SimuladoListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_simulados_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Consulta realizada")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Listagem de simulados falhou: {e}"),
            )),
        ),
    }
}
