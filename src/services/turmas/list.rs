use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TurmaService;
use crate::models::turmas::requests::TurmaListQuery;
use crate::models::{ApiResponse, ErrorCode};

/// Listagem de turmas
/// GET /turmas
pub async fn list_turmas(
    service: &TurmaService,
    request: &HttpRequest,
    query: TurmaListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_turmas_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Consulta realizada")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Listagem de turmas falhou: {e}"),
            )),
        ),
    }
}
