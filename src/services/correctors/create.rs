use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CorrectorService;
use crate::models::correctors::requests::CreateCorrectorRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

/// Cadastra corretor
/// POST /correctors
pub async fn create_corrector(
    service: &CorrectorService,
    request: &HttpRequest,
    req: CreateCorrectorRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Nome do corretor é obrigatório",
        )));
    }
    if let Err(msg) = validate_email(&req.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match storage.get_corrector_by_email(&req.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::EmailTaken,
                "Já existe corretor com este e-mail",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta de corretor falhou: {e}"),
                )),
            );
        }
    }

    match storage.create_corrector(req).await {
        Ok(corrector) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(corrector, "Corretor cadastrado")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Cadastro de corretor falhou: {e}"),
            )),
        ),
    }
}
