pub mod create;
pub mod delete;
pub mod list;
pub mod queue;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::correctors::requests::{
    CorrectorListQuery, CreateCorrectorRequest, UpdateCorrectorRequest,
};
use crate::storage::Storage;

pub struct CorrectorService {
    storage: Option<Arc<dyn Storage>>,
}

impl CorrectorService {
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

    /// Cadastra corretor
    pub async fn create_corrector(
        &self,
        request: &HttpRequest,
        req: CreateCorrectorRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_corrector(self, request, req).await
    }

    /// Listagem
    pub async fn list_correctors(
        &self,
        request: &HttpRequest,
        query: CorrectorListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_correctors(self, request, query).await
    }

    /// Atualização parcial
    pub async fn update_corrector(
        &self,
        request: &HttpRequest,
        corrector_id: i64,
        req: UpdateCorrectorRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_corrector(self, request, corrector_id, req).await
    }

    /// Remoção
    pub async fn delete_corrector(
        &self,
        request: &HttpRequest,
        corrector_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_corrector(self, request, corrector_id).await
    }

    /// Fila de redações pendentes do corretor
    pub async fn get_corrector_queue(
        &self,
        request: &HttpRequest,
        corrector_id: i64,
    ) -> ActixResult<HttpResponse> {
        queue::get_corrector_queue(self, request, corrector_id).await
    }
}
