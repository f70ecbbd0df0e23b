use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SimuladoService;
use crate::models::simulados::requests::CreateSimuladoRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::time::parse_civil_date;

/// Cria simulado
/// POST /simulados
pub async fn create_simulado(
    service: &SimuladoService,
    request: &HttpRequest,
    req: CreateSimuladoRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.theme.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Tema do simulado é obrigatório",
        )));
    }
    if let Err(e) = parse_civil_date(&req.date) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            e.message().to_string(),
        )));
    }

    match storage.create_simulado(req).await {
        Ok(simulado) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(simulado, "Simulado criado")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Criação de simulado falhou: {e}"),
            )),
        ),
    }
}
