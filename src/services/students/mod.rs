pub mod create;
pub mod credits;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{
    CreateStudentRequest, GrantCreditsRequest, StudentListQuery, UpdateStudentRequest,
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    /// Cadastra aluno
    pub async fn create_student(
        &self,
        request: &HttpRequest,
        req: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, request, req).await
    }

    /// Listagem
    pub async fn list_students(
        &self,
        request: &HttpRequest,
        query: StudentListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, request, query).await
    }

    /// Atualização parcial
    pub async fn update_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
        req: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, request, student_id, req).await
    }

    /// Remoção
    pub async fn delete_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, request, student_id).await
    }

    /// Concede créditos de correção
    pub async fn grant_credits(
        &self,
        request: &HttpRequest,
        student_id: i64,
        req: GrantCreditsRequest,
    ) -> ActixResult<HttpResponse> {
        credits::grant_credits(self, request, student_id, req).await
    }
}
