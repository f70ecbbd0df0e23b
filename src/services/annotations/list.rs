use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnotationService;
use crate::models::annotations::requests::AnnotationListQuery;
use crate::models::annotations::responses::AnnotationListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// Lista anotações de uma redação
/// GET /submissions/{id}/annotations
pub async fn list_annotations(
    service: &AnnotationService,
    request: &HttpRequest,
    submission_id: i64,
    query: AnnotationListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_annotations(submission_id, query).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AnnotationListResponse { items },
            "Consulta realizada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Listagem de anotações falhou: {e}"),
            )),
        ),
    }
}
