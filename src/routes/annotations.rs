use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::annotations::requests::{
    AnnotationListQuery, CreateAnnotationRequest, UpdateAnnotationRequest,
};
use crate::services::AnnotationService;

static ANNOTATION_SERVICE: Lazy<AnnotationService> = Lazy::new(AnnotationService::new_lazy);

// Cria anotação em uma redação
pub async fn create_annotation(
    req: HttpRequest,
    path: web::Path<i64>, // submission_id
    body: web::Json<CreateAnnotationRequest>,
) -> ActixResult<HttpResponse> {
    ANNOTATION_SERVICE
        .create_annotation(&req, path.into_inner(), body.into_inner())
        .await
}

// Lista anotações de uma redação
pub async fn list_annotations(
    req: HttpRequest,
    path: web::Path<i64>, // submission_id
    query: web::Query<AnnotationListQuery>,
) -> ActixResult<HttpResponse> {
    ANNOTATION_SERVICE
        .list_annotations(&req, path.into_inner(), query.into_inner())
        .await
}

// Atualiza anotação
pub async fn update_annotation(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateAnnotationRequest>,
) -> ActixResult<HttpResponse> {
    ANNOTATION_SERVICE
        .update_annotation(&req, path.into_inner(), body.into_inner())
        .await
}

// Remove anotação
pub async fn delete_annotation(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ANNOTATION_SERVICE
        .delete_annotation(&req, path.into_inner())
        .await
}

// Configura rotas
pub fn configure_annotations_routes(cfg: &mut web::ServiceConfig) {
    // Anotações aninhadas na redação
    cfg.service(
        web::scope("/api/v1/submissions/{submission_id}/annotations")
            .route("", web::post().to(create_annotation))
            .route("", web::get().to(list_annotations)),
    );

    // Operações diretas por id de anotação
    cfg.service(
        web::scope("/api/v1/annotations")
            .route("/{id}", web::patch().to(update_annotation))
            .route("/{id}", web::delete().to(delete_annotation)),
    );
}
