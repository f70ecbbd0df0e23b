pub mod approve;
pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::repertoire::requests::{CreateRepertoireRequest, RepertoireListQuery};
use crate::storage::Storage;

pub struct RepertoireService {
    storage: Option<Arc<dyn Storage>>,
}

impl RepertoireService {
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

    /// Envia parágrafo de repertório
    pub async fn create_entry(
        &self,
        request: &HttpRequest,
        req: CreateRepertoireRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_entry(self, request, req).await
    }

    /// Listagem (alunos veem só aprovados)
    pub async fn list_entries(
        &self,
        request: &HttpRequest,
        query: RepertoireListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_entries(self, request, query).await
    }

    /// Aprova ou reprova um parágrafo
    pub async fn set_approved(
        &self,
        request: &HttpRequest,
        entry_id: i64,
        approved: bool,
    ) -> ActixResult<HttpResponse> {
        approve::set_approved(self, request, entry_id, approved).await
    }

    /// Remoção
    pub async fn delete_entry(
        &self,
        request: &HttpRequest,
        entry_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_entry(self, request, entry_id).await
    }
}
