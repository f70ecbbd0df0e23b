use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::turmas::requests::{CreateTurmaRequest, TurmaListQuery, UpdateTurmaRequest};
use crate::services::TurmaService;

static TURMA_SERVICE: Lazy<TurmaService> = Lazy::new(TurmaService::new_lazy);

// Cria turma
pub async fn create_turma(
    req: HttpRequest,
    body: web::Json<CreateTurmaRequest>,
) -> ActixResult<HttpResponse> {
    TURMA_SERVICE.create_turma(&req, body.into_inner()).await
}

// Lista turmas
pub async fn list_turmas(
    req: HttpRequest,
    query: web::Query<TurmaListQuery>,
) -> ActixResult<HttpResponse> {
    TURMA_SERVICE.list_turmas(&req, query.into_inner()).await
}

// Atualiza turma
pub async fn update_turma(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateTurmaRequest>,
) -> ActixResult<HttpResponse> {
    TURMA_SERVICE
        .update_turma(&req, path.into_inner(), body.into_inner())
        .await
}

// Remove turma
pub async fn delete_turma(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    TURMA_SERVICE.delete_turma(&req, path.into_inner()).await
}

// Configura rotas
pub fn configure_turmas_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/turmas")
            .route("", web::post().to(create_turma))
            .route("", web::get().to(list_turmas))
            .route("/{id}", web::patch().to(update_turma))
            .route("/{id}", web::delete().to(delete_turma)),
    );
}
