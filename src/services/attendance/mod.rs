pub mod access;
pub mod entry;
pub mod exit;
pub mod report;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::RecordAttendanceRequest;
use crate::models::live_classes::requests::StudentAccessQuery;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    /// Verifica o acesso de um e-mail à aula
    pub async fn check_access(
        &self,
        request: &HttpRequest,
        class_id: i64,
        query: StudentAccessQuery,
    ) -> ActixResult<HttpResponse> {
        access::check_access_endpoint(self, request, class_id, query).await
    }

    /// Registra entrada
    pub async fn record_entry(
        &self,
        request: &HttpRequest,
        class_id: i64,
        req: RecordAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        entry::record_entry(self, request, class_id, req).await
    }

    /// Registra saída
    pub async fn record_exit(
        &self,
        request: &HttpRequest,
        class_id: i64,
        req: RecordAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        exit::record_exit(self, request, class_id, req).await
    }

    /// Relatório de presença da aula
    pub async fn get_attendance_report(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        report::get_attendance_report(self, request, class_id).await
    }

    /// Log de acessos negados da aula
    pub async fn list_access_denials(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        access::list_access_denials(self, request, class_id).await
    }
}
