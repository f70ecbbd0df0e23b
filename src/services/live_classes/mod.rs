pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::live_classes::requests::{
    CreateLiveClassRequest, LiveClassListQuery, UpdateLiveClassRequest,
};
use crate::storage::Storage;

/// Chave do cache da listagem ativa do aluno
pub(crate) const ACTIVE_LIST_CACHE_KEY: &str = "live_classes:active";

pub struct LiveClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl LiveClassService {
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

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Arc<dyn ObjectCache> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .expect("Cache not found in app data")
            .get_ref()
            .clone()
    }

    /// Cria aula ao vivo
    pub async fn create_live_class(
        &self,
        request: &HttpRequest,
        req: CreateLiveClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_live_class(self, request, req).await
    }

    /// Listagem administrativa
    pub async fn list_live_classes(
        &self,
        request: &HttpRequest,
        query: LiveClassListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_live_classes(self, request, query).await
    }

    /// Listagem do aluno: aulas ativas dentro da janela de exibição
    pub async fn list_active_live_classes(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_active_live_classes(self, request).await
    }

    /// Detalhe com status calculado
    pub async fn get_live_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::get_live_class(self, request, class_id).await
    }

    /// Atualização parcial
    pub async fn update_live_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        req: UpdateLiveClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_live_class(self, request, class_id, req).await
    }

    /// Remoção
    pub async fn delete_live_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_live_class(self, request, class_id).await
    }
}
