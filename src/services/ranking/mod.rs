pub mod leaderboard;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ranking::requests::RankingQuery;
use crate::storage::Storage;

pub struct RankingService {
    storage: Option<Arc<dyn Storage>>,
}

impl RankingService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// Ranking por faixas das redações corrigidas
    pub async fn get_leaderboard(
        &self,
        request: &HttpRequest,
        query: RankingQuery,
    ) -> ActixResult<HttpResponse> {
        leaderboard::get_leaderboard(self, request, query).await
    }
}
