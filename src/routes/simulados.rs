use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::simulados::requests::{
    CreateSimuladoRequest, SimuladoListQuery, UpdateSimuladoRequest,
};
use crate::services::SimuladoService;

static SIMULADO_SERVICE: Lazy<SimuladoService> = Lazy::new(SimuladoService::new_lazy);

// Cria simulado
pub async fn create_simulado(
    req: HttpRequest,
    body: web::Json<CreateSimuladoRequest>,
) -> ActixResult<HttpResponse> {
    SIMULADO_SERVICE
        .create_simulado(&req, body.into_inner())
        .await
}

// Lista simulados
pub async fn list_simulados(
    req: HttpRequest,
    query: web::Query<SimuladoListQuery>,
) -> ActixResult<HttpResponse> {
    SIMULADO_SERVICE
        .list_simulados(&req, query.into_inner())
        .await
}

// Atualiza simulado
pub async fn update_simulado(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateSimuladoRequest>,
) -> ActixResult<HttpResponse> {
    SIMULADO_SERVICE
        .update_simulado(&req, path.into_inner(), body.into_inner())
        .await
}

// Remove simulado
pub async fn delete_simulado(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SIMULADO_SERVICE
        .delete_simulado(&req, path.into_inner())
        .await
}

// Configura rotas
pub fn configure_simulados_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/simulados")
            .route("", web::post().to(create_simulado))
            .route("", web::get().to(list_simulados))
            .route("/{id}", web::patch().to(update_simulado))
            .route("/{id}", web::delete().to(delete_simulado)),
    );
}
