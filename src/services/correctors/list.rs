use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CorrectorService;
use crate::models::correctors::requests::CorrectorListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// Listagem de corretores
/// GET /correctors
pub async fn list_correctors(
    service: &CorrectorService,
    request: &HttpRequest,
    query: CorrectorListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_correctors_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Consulta realizada")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Listagem de corretores falhou: {e}"),
            )),
        ),
    }
}
