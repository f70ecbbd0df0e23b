use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RepertoireService;
use crate::models::repertoire::requests::RepertoireListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// Listagem de repertório
/// GET /repertoire
pub async fn list_entries(
    service: &RepertoireService,
    request: &HttpRequest,
    query: RepertoireListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_repertoire_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Consulta realizada")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Listagem de repertório falhou: {e}"),
            )),
        ),
    }
}
