use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::correctors::requests::{
    CorrectorListQuery, CreateCorrectorRequest, UpdateCorrectorRequest,
};
use crate::services::CorrectorService;

static CORRECTOR_SERVICE: Lazy<CorrectorService> = Lazy::new(CorrectorService::new_lazy);

// Cadastra corretor
pub async fn create_corrector(
    req: HttpRequest,
    body: web::Json<CreateCorrectorRequest>,
) -> ActixResult<HttpResponse> {
    CORRECTOR_SERVICE
        .create_corrector(&req, body.into_inner())
        .await
}

// Lista corretores
pub async fn list_correctors(
    req: HttpRequest,
    query: web::Query<CorrectorListQuery>,
) -> ActixResult<HttpResponse> {
    CORRECTOR_SERVICE
        .list_correctors(&req, query.into_inner())
        .await
}

// Atualiza corretor
pub async fn update_corrector(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateCorrectorRequest>,
) -> ActixResult<HttpResponse> {
    CORRECTOR_SERVICE
        .update_corrector(&req, path.into_inner(), body.into_inner())
        .await
}

// Remove corretor
pub async fn delete_corrector(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CORRECTOR_SERVICE
        .delete_corrector(&req, path.into_inner())
        .await
}

// Fila de correção do corretor
pub async fn get_corrector_queue(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CORRECTOR_SERVICE
        .get_corrector_queue(&req, path.into_inner())
        .await
}

// Configura rotas
pub fn configure_correctors_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/correctors")
            .route("", web::post().to(create_corrector))
            .route("", web::get().to(list_correctors))
            .route("/{id}", web::patch().to(update_corrector))
            .route("/{id}", web::delete().to(delete_corrector))
            .route("/{id}/queue", web::get().to(get_corrector_queue)),
    );
}
