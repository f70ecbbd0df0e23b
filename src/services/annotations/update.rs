use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnotationService;
use crate::models::annotations::requests::UpdateAnnotationRequest;
use crate::models::{ApiResponse, ErrorCode};

/// Atualização parcial de anotação
/// PATCH /annotations/{id}
pub async fn update_annotation(
    service: &AnnotationService,
    request: &HttpRequest,
    annotation_id: i64,
    req: UpdateAnnotationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(competency) = req.competency
        && !(1..=5).contains(&competency)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Competência da anotação deve estar entre 1 e 5",
        )));
    }

    match storage.update_annotation(annotation_id, req).await {
        Ok(Some(annotation)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(annotation, "Anotação atualizada")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AnnotationNotFound,
            "Anotação não encontrada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Atualização de anotação falhou: {e}"),
            )),
        ),
    }
}
