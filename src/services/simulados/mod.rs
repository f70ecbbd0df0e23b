pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::simulados::requests::{
    CreateSimuladoRequest, SimuladoListQuery, UpdateSimuladoRequest,
};
use crate::storage::Storage;

pub struct SimuladoService {
    storage: Option<Arc<dyn Storage>>,
}

impl SimuladoService {
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

    /// Cria simulado
    pub async fn create_simulado(
        &self,
        request: &HttpRequest,
        req: CreateSimuladoRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_simulado(self, request, req).await
    }

    /// Listagem
    pub async fn list_simulados(
        &self,
        request: &HttpRequest,
        query: SimuladoListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_simulados(self, request, query).await
    }

    /// Atualização parcial
    pub async fn update_simulado(
        &self,
        request: &HttpRequest,
        simulado_id: i64,
        req: UpdateSimuladoRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_simulado(self, request, simulado_id, req).await
    }

    /// Remoção
    pub async fn delete_simulado(
        &self,
        request: &HttpRequest,
        simulado_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_simulado(self, request, simulado_id).await
    }
}
