pub mod assign;
pub mod create;
pub mod delete;
pub mod detail;
pub mod divergences;
pub mod grade;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{
    AssignCorrectorRequest, CorrectedSubmissionQuery, CreateSubmissionRequest,
    GradeSubmissionRequest, SubmissionListQuery,
};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    /// Envia uma redação
    pub async fn create_submission(
        &self,
        request: &HttpRequest,
        req: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, request, req).await
    }

    /// Detalhe por ID
    pub async fn get_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_submission(self, request, submission_id).await
    }

    /// Consulta pública pelo código de acompanhamento
    pub async fn get_submission_by_tracking_code(
        &self,
        request: &HttpRequest,
        tracking_code: String,
    ) -> ActixResult<HttpResponse> {
        detail::get_submission_by_tracking_code(self, request, tracking_code).await
    }

    /// Listagem com filtros
    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        query: SubmissionListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request, query).await
    }

    /// Designa um corretor para o primeiro slot livre
    pub async fn assign_corrector(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        req: AssignCorrectorRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_corrector(self, request, submission_id, req).await
    }

    /// Fecha as notas de um corretor
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, req).await
    }

    /// Fila de redações divergentes para resolução administrativa
    pub async fn list_divergent_submissions(
        &self,
        request: &HttpRequest,
        query: CorrectedSubmissionQuery,
    ) -> ActixResult<HttpResponse> {
        divergences::list_divergent_submissions(self, request, query).await
    }

    /// Remoção administrativa
    pub async fn delete_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_submission(self, request, submission_id).await
    }
}
