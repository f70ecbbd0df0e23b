use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::config::AppConfig;
use crate::models::submissions::entities::SubmissionCategory;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::submissions::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

/// Envia uma redação
/// POST /submissions
pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    req: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // Validações antes de qualquer escrita
    if req.student_name.trim().is_empty()
        || req.theme.trim().is_empty()
        || req.content.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Nome, tema e texto da redação são obrigatórios",
        )));
    }

    if let Err(msg) = validate_email(&req.student_email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // Turma, quando informada, precisa existir
    if let Some(turma_code) = &req.turma_code {
        match storage.get_turma_by_code(turma_code).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TurmaNotFound,
                    format!("Turma {turma_code} não encontrada"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Consulta de turma falhou: {e}"),
                    )),
                );
            }
        }
    }

    match req.category {
        // Simulado referencia uma edição ativa
        SubmissionCategory::Simulado => {
            let Some(simulado_id) = req.simulado_id else {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Redação de simulado precisa do simulado_id",
                )));
            };
            match storage.get_simulado_by_id(simulado_id).await {
                Ok(Some(simulado)) if simulado.active => {}
                Ok(Some(_)) => {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::BadRequest,
                        "Simulado encerrado não aceita novos envios",
                    )));
                }
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::SimuladoNotFound,
                        "Simulado não encontrado",
                    )));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Consulta de simulado falhou: {e}"),
                        ),
                    ));
                }
            }
        }
        // Envio regular consome um crédito de correção do aluno
        SubmissionCategory::Regular => {
            let student = match storage.get_student_by_email(&req.student_email).await {
                Ok(Some(s)) => s,
                Ok(None) => {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::StudentNotFound,
                        "Aluno não cadastrado",
                    )));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Consulta de aluno falhou: {e}"),
                        ),
                    ));
                }
            };

            match storage.consume_credit(student.id).await {
                Ok(true) => {}
                Ok(false) => {
                    return Ok(HttpResponse::UnprocessableEntity().json(
                        ApiResponse::error_empty(
                            ErrorCode::CreditsInsufficient,
                            "Créditos de correção insuficientes",
                        ),
                    ));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Débito de crédito falhou: {e}"),
                        ),
                    ));
                }
            }
        }
        SubmissionCategory::Avulsa => {}
    }

    let tracking_code = uuid::Uuid::new_v4().to_string();

    match storage.create_submission(req, tracking_code).await {
        Ok(submission) => {
            info!(
                "Redação {} recebida de {}",
                submission.id, submission.student_email
            );
            let threshold = AppConfig::get().grading.divergence_threshold;
            let consolidated = submission.consolidated(threshold);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmissionResponse {
                    submission,
                    consolidated,
                },
                "Redação enviada",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Criação da redação falhou: {e}"),
            )),
        ),
    }
}
