use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RepertoireService;
use crate::models::repertoire::requests::CreateRepertoireRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_email;

/// Envia parágrafo de repertório (entra reprovado até revisão)
/// POST /repertoire
pub async fn create_entry(
    service: &RepertoireService,
    request: &HttpRequest,
    req: CreateRepertoireRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.author_name.trim().is_empty()
        || req.theme.trim().is_empty()
        || req.content.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Autor, tema e texto do repertório são obrigatórios",
        )));
    }
    if let Err(msg) = validate_email(&req.author_email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    match storage.create_repertoire_entry(req).await {
        Ok(entry) => {
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(entry, "Repertório enviado para revisão")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Envio de repertório falhou: {e}"),
            )),
        ),
    }
}
