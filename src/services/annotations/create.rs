use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AnnotationService;
use crate::models::annotations::requests::CreateAnnotationRequest;
use crate::models::{ApiResponse, ErrorCode};

fn validate_annotation(
    competency: Option<i32>,
    pos_x: f64,
    pos_y: f64,
    comment: &str,
) -> Result<(), &'static str> {
    if comment.trim().is_empty() {
        return Err("Comentário da anotação é obrigatório");
    }
    if let Some(c) = competency
        && !(1..=5).contains(&c)
    {
        return Err("Competência da anotação deve estar entre 1 e 5");
    }
    if !(0.0..=100.0).contains(&pos_x) || !(0.0..=100.0).contains(&pos_y) {
        return Err("Posição da anotação deve estar entre 0 e 100");
    }
    Ok(())
}

/// Cria anotação sobre uma redação
/// POST /submissions/{id}/annotations
pub async fn create_annotation(
    service: &AnnotationService,
    request: &HttpRequest,
    submission_id: i64,
    req: CreateAnnotationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_annotation(req.competency, req.pos_x, req.pos_y, &req.comment) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // A redação e o corretor precisam existir; o corretor precisa estar
    // num dos slots da redação
    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Redação não encontrada",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta de redação falhou: {e}"),
                )),
            );
        }
    };

    if !submission.has_corrector(req.corrector_id) {
        return Ok(HttpResponse::UnprocessableEntity().json(ApiResponse::error_empty(
            ErrorCode::CorrectorNotFound,
            "Corretor não designado para esta redação",
        )));
    }

    match storage.create_annotation(submission_id, req).await {
        Ok(annotation) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(annotation, "Anotação criada")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Criação de anotação falhou: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::validate_annotation;

    #[test]
    fn test_annotation_bounds() {
        assert!(validate_annotation(Some(3), 10.0, 90.0, "vírgula").is_ok());
        assert!(validate_annotation(None, 0.0, 100.0, "ok").is_ok());
        assert!(validate_annotation(Some(6), 10.0, 10.0, "x").is_err());
        assert!(validate_annotation(None, -1.0, 10.0, "x").is_err());
        assert!(validate_annotation(None, 10.0, 10.0, "  ").is_err());
    }
}
