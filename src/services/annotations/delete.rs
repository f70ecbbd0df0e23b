use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnotationService;
use crate::models::{ApiResponse, ErrorCode};

/// Remoção de anotação
/// DELETE /annotations/{id}
pub async fn delete_annotation(
    service: &AnnotationService,
    request: &HttpRequest,
    annotation_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_annotation(annotation_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Anotação removida"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnnotationNotFound,
            "Anotação não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Remoção de anotação falhou: {e}"),
            )),
        ),
    }
}
