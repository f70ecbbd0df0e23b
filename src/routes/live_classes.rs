use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::RecordAttendanceRequest;
use crate::models::live_classes::requests::{
    CreateLiveClassRequest, LiveClassListQuery, StudentAccessQuery, UpdateLiveClassRequest,
};
use crate::services::{AttendanceService, LiveClassService};

static LIVE_CLASS_SERVICE: Lazy<LiveClassService> = Lazy::new(LiveClassService::new_lazy);
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// Cria aula
pub async fn create_live_class(
    req: HttpRequest,
    body: web::Json<CreateLiveClassRequest>,
) -> ActixResult<HttpResponse> {
    LIVE_CLASS_SERVICE
        .create_live_class(&req, body.into_inner())
        .await
}

// Listagem administrativa
pub async fn list_live_classes(
    req: HttpRequest,
    query: web::Query<LiveClassListQuery>,
) -> ActixResult<HttpResponse> {
    LIVE_CLASS_SERVICE
        .list_live_classes(&req, query.into_inner())
        .await
}

// Listagem do aluno (janela de exibição)
pub async fn list_active_live_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    LIVE_CLASS_SERVICE.list_active_live_classes(&req).await
}

// Detalhe com status
pub async fn get_live_class(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    LIVE_CLASS_SERVICE.get_live_class(&req, path.into_inner()).await
}

// Atualiza aula
pub async fn update_live_class(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateLiveClassRequest>,
) -> ActixResult<HttpResponse> {
    LIVE_CLASS_SERVICE
        .update_live_class(&req, path.into_inner(), body.into_inner())
        .await
}

// Remove aula
pub async fn delete_live_class(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    LIVE_CLASS_SERVICE
        .delete_live_class(&req, path.into_inner())
        .await
}

// Verificação de acesso por e-mail
pub async fn check_access(
    req: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<StudentAccessQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .check_access(&req, path.into_inner(), query.into_inner())
        .await
}

// Registra entrada
pub async fn record_entry(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .record_entry(&req, path.into_inner(), body.into_inner())
        .await
}

// Registra saída
pub async fn record_exit(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .record_exit(&req, path.into_inner(), body.into_inner())
        .await
}

// Relatório de presença
pub async fn get_attendance_report(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .get_attendance_report(&req, path.into_inner())
        .await
}

// Log de acessos negados
pub async fn list_access_denials(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_access_denials(&req, path.into_inner())
        .await
}

// Configura rotas
pub fn configure_live_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/live-classes")
            .route("", web::post().to(create_live_class))
            .route("", web::get().to(list_live_classes))
            .route("/active", web::get().to(list_active_live_classes))
            .route("/{id}", web::get().to(get_live_class))
            .route("/{id}", web::patch().to(update_live_class))
            .route("/{id}", web::delete().to(delete_live_class))
            .route("/{id}/access", web::get().to(check_access))
            .route("/{id}/access-denials", web::get().to(list_access_denials))
            .route("/{id}/attendance/report", web::get().to(get_attendance_report))
            .service(
                // Entradas e saídas com limite por IP contra duplo clique
                // frenético e scripts
                web::scope("/{id}/attendance")
                    .wrap(middlewares::RateLimit::attendance())
                    .route("/entry", web::post().to(record_entry))
                    .route("/exit", web::post().to(record_exit)),
            ),
    );
}
