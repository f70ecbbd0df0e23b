use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::ranking::requests::RankingQuery;
use crate::services::RankingService;

static RANKING_SERVICE: Lazy<RankingService> = Lazy::new(RankingService::new_lazy);

// Ranking por faixas
pub async fn get_leaderboard(
    req: HttpRequest,
    query: web::Query<RankingQuery>,
) -> ActixResult<HttpResponse> {
    RANKING_SERVICE
        .get_leaderboard(&req, query.into_inner())
        .await
}

// Configura rotas
pub fn configure_ranking_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/ranking").route("", web::get().to(get_leaderboard)));
}
