use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::repertoire::requests::{CreateRepertoireRequest, RepertoireListQuery};
use crate::services::RepertoireService;

static REPERTOIRE_SERVICE: Lazy<RepertoireService> = Lazy::new(RepertoireService::new_lazy);

// Envia parágrafo de repertório
pub async fn create_entry(
    req: HttpRequest,
    body: web::Json<CreateRepertoireRequest>,
) -> ActixResult<HttpResponse> {
    REPERTOIRE_SERVICE.create_entry(&req, body.into_inner()).await
}

// Lista repertórios
pub async fn list_entries(
    req: HttpRequest,
    query: web::Query<RepertoireListQuery>,
) -> ActixResult<HttpResponse> {
    REPERTOIRE_SERVICE.list_entries(&req, query.into_inner()).await
}

// Aprova
pub async fn approve_entry(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    REPERTOIRE_SERVICE
        .set_approved(&req, path.into_inner(), true)
        .await
}

// Reprova
pub async fn reject_entry(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    REPERTOIRE_SERVICE
        .set_approved(&req, path.into_inner(), false)
        .await
}

// Remove
pub async fn delete_entry(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    REPERTOIRE_SERVICE.delete_entry(&req, path.into_inner()).await
}

// Configura rotas
pub fn configure_repertoire_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/repertoire")
            .route("", web::post().to(create_entry))
            .route("", web::get().to(list_entries))
            .route("/{id}/approve", web::post().to(approve_entry))
            .route("/{id}/reject", web::post().to(reject_entry))
            .route("/{id}", web::delete().to(delete_entry)),
    );
}
