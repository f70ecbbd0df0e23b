use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SimuladoService;
use crate::models::simulados::requests::UpdateSimuladoRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::time::parse_civil_date;

/// Atualização parcial de simulado
/// PATCH /simulados/{id}
pub async fn update_simulado(
    service: &SimuladoService,
    request: &HttpRequest,
    simulado_id: i64,
    req: UpdateSimuladoRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(date) = &req.date
        && let Err(e) = parse_civil_date(date)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            e.message().to_string(),
        )));
    }

    match storage.update_simulado(simulado_id, req).await {
        Ok(Some(simulado)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(simulado, "Simulado atualizado")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SimuladoNotFound,
            "Simulado não encontrado",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Atualização de simulado falhou: {e}"),
            )),
        ),
    }
}
