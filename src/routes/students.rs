use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::students::requests::{
    CreateStudentRequest, GrantCreditsRequest, StudentListQuery, UpdateStudentRequest,
};
use crate::services::StudentService;

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// Cadastra aluno
pub async fn create_student(
    req: HttpRequest,
    body: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create_student(&req, body.into_inner()).await
}

// Lista alunos
pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListQuery>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req, query.into_inner()).await
}

// Atualiza aluno
pub async fn update_student(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, path.into_inner(), body.into_inner())
        .await
}

// Remove aluno
pub async fn delete_student(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, path.into_inner()).await
}

// Concede créditos
pub async fn grant_credits(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<GrantCreditsRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .grant_credits(&req, path.into_inner(), body.into_inner())
        .await
}

// Configura rotas
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .route("", web::post().to(create_student))
            .route("", web::get().to(list_students))
            .route("/{id}", web::patch().to(update_student))
            .route("/{id}", web::delete().to(delete_student))
            .route("/{id}/credits", web::post().to(grant_credits)),
    );
}
