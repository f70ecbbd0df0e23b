use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CorrectorService;
use crate::models::correctors::requests::UpdateCorrectorRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

/// Atualização parcial de corretor
/// PATCH /correctors/{id}
pub async fn update_corrector(
    service: &CorrectorService,
    request: &HttpRequest,
    corrector_id: i64,
    req: UpdateCorrectorRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(email) = &req.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match storage.update_corrector(corrector_id, req).await {
        Ok(Some(corrector)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(corrector, "Corretor atualizado")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CorrectorNotFound,
            "Corretor não encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Atualização de corretor falhou: {e}"),
            )),
        ),
    }
}
