pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::annotations::requests::{
    AnnotationListQuery, CreateAnnotationRequest, UpdateAnnotationRequest,
};
use crate::storage::Storage;

pub struct AnnotationService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnnotationService {
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

    /// Cria anotação sobre uma redação
    pub async fn create_annotation(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        req: CreateAnnotationRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_annotation(self, request, submission_id, req).await
    }

    /// Lista anotações de uma redação
    pub async fn list_annotations(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        query: AnnotationListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_annotations(self, request, submission_id, query).await
    }

    /// Atualização parcial
    pub async fn update_annotation(
        &self,
        request: &HttpRequest,
        annotation_id: i64,
        req: UpdateAnnotationRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_annotation(self, request, annotation_id, req).await
    }

    /// Remoção
    pub async fn delete_annotation(
        &self,
        request: &HttpRequest,
        annotation_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_annotation(self, request, annotation_id).await
    }
}
