use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::submissions::requests::{
    AssignCorrectorRequest, CorrectedSubmissionQuery, CreateSubmissionRequest,
    GradeSubmissionRequest, SubmissionListQuery,
};
use crate::services::SubmissionService;

// Instância global preguiçosa do serviço
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// Envia redação
pub async fn create_submission(
    req: HttpRequest,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, body.into_inner())
        .await
}

// Lista redações
pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner())
        .await
}

// Fila de divergências
pub async fn list_divergent_submissions(
    req: HttpRequest,
    query: web::Query<CorrectedSubmissionQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_divergent_submissions(&req, query.into_inner())
        .await
}

// Detalhe de redação
pub async fn get_submission(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission(&req, path.into_inner())
        .await
}

// Consulta pública pelo código de acompanhamento
pub async fn get_submission_by_tracking_code(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission_by_tracking_code(&req, path.into_inner())
        .await
}

// Designa corretor
pub async fn assign_corrector(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<AssignCorrectorRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .assign_corrector(&req, path.into_inner(), body.into_inner())
        .await
}

// Registra as notas de um corretor
pub async fn grade_submission(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, path.into_inner(), body.into_inner())
        .await
}

// Remoção administrativa
pub async fn delete_submission(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .delete_submission(&req, path.into_inner())
        .await
}

// Configura rotas
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .route(
                "",
                web::post()
                    .to(create_submission)
                    .wrap(middlewares::RateLimit::submission()),
            )
            .route("", web::get().to(list_submissions))
            .route("/divergences", web::get().to(list_divergent_submissions))
            .route(
                "/tracking/{code}",
                web::get().to(get_submission_by_tracking_code),
            )
            .route("/{id}", web::get().to(get_submission))
            .route("/{id}", web::delete().to(delete_submission))
            .route("/{id}/correctors", web::post().to(assign_corrector))
            .route("/{id}/grades", web::post().to(grade_submission)),
    );
}
