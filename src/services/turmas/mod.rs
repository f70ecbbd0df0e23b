pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::turmas::requests::{CreateTurmaRequest, TurmaListQuery, UpdateTurmaRequest};
use crate::storage::Storage;

pub struct TurmaService {
    storage: Option<Arc<dyn Storage>>,
}

impl TurmaService {
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

    /// Cria turma
    pub async fn create_turma(
        &self,
        request: &HttpRequest,
        req: CreateTurmaRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_turma(self, request, req).await
    }

    /// Listagem
    pub async fn list_turmas(
        &self,
        request: &HttpRequest,
        query: TurmaListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_turmas(self, request, query).await
    }

    /// Atualização parcial
    pub async fn update_turma(
        &self,
        request: &HttpRequest,
        turma_id: i64,
        req: UpdateTurmaRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_turma(self, request, turma_id, req).await
    }

    /// Remoção
    pub async fn delete_turma(
        &self,
        request: &HttpRequest,
        turma_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_turma(self, request, turma_id).await
    }
}
