use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TurmaService;
use crate::models::turmas::requests::CreateTurmaRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::random_code::generate_turma_code;
use crate::utils::validate::validate_turma_code;

/// Cria turma; sem código informado, gera um aleatório
/// POST /turmas
pub async fn create_turma(
    service: &TurmaService,
    request: &HttpRequest,
    req: CreateTurmaRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Nome da turma é obrigatório",
        )));
    }

    let code = match &req.code {
        Some(code) => {
            let code = code.trim().to_uppercase();
            if let Err(msg) = validate_turma_code(&code) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
            }
            match storage.get_turma_by_code(&code).await {
                Ok(Some(_)) => {
                    return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                        ErrorCode::TurmaCodeTaken,
                        format!("Código {code} já está em uso"),
                    )));
                }
                Ok(None) => code,
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Consulta de turma falhou: {e}"),
                        ),
                    ));
                }
            }
        }
        None => generate_turma_code(6),
    };

    match storage.create_turma(req, code).await {
        Ok(turma) => Ok(HttpResponse::Ok().json(ApiResponse::success(turma, "Turma criada"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Criação de turma falhou: {e}"),
            )),
        ),
    }
}
