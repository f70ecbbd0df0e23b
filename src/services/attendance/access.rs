//! Controle de acesso às aulas ao vivo
//!
//! O acesso é concedido a alunos do roster das turmas autorizadas ou, em
//! aulas abertas, a visitantes. Negativas ficam registradas para auditoria.

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, warn};

use super::AttendanceService;
use crate::errors::Result;
use crate::models::attendance::entities::AttendanceOutcome;
use crate::models::attendance::responses::{AccessDenialListResponse, AttendanceResultResponse};
use crate::models::live_classes::entities::LiveClass;
use crate::models::live_classes::requests::StudentAccessQuery;
use crate::models::live_classes::responses::AccessCheckResponse;
use crate::models::students::entities::Student;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::validate_email;

/// Concessão de acesso a uma aula
pub(crate) enum AccessGrant {
    /// Aluno do roster de turma autorizada
    Roster(Box<Student>),
    /// Visitante em aula aberta
    Visitor,
}

/// Decisão de acesso
pub(crate) enum AccessDecision {
    Granted(AccessGrant),
    Denied { reason: String },
}

/// Decide o acesso de um e-mail a uma aula
pub(crate) async fn decide_access(
    storage: &Arc<dyn Storage>,
    class: &LiveClass,
    email: &str,
) -> Result<AccessDecision> {
    if let Some(student) = storage.get_student_by_email(email).await? {
        let in_authorized_turma = student
            .turma_code
            .as_deref()
            .is_some_and(|code| class.authorized_turmas.iter().any(|t| t == code));
        if student.active && in_authorized_turma {
            return Ok(AccessDecision::Granted(AccessGrant::Roster(Box::new(
                student,
            ))));
        }
        if class.visitor_allowed {
            return Ok(AccessDecision::Granted(AccessGrant::Visitor));
        }
        return Ok(AccessDecision::Denied {
            reason: "aluno fora das turmas autorizadas".to_string(),
        });
    }

    if class.visitor_allowed {
        return Ok(AccessDecision::Granted(AccessGrant::Visitor));
    }

    Ok(AccessDecision::Denied {
        reason: "e-mail não cadastrado".to_string(),
    })
}

/// Resultado do gate compartilhado de entrada/saída
pub(crate) enum AttendanceGate {
    Ready {
        class: Box<LiveClass>,
        email: String,
        student: Option<Box<Student>>,
    },
    Reply(HttpResponse),
}

/// Validações comuns de entrada e saída: aula válida, e-mail presente,
/// acesso concedido. Negativas de acesso vão para o log de auditoria.
pub(crate) async fn gate_attendance(
    storage: &Arc<dyn Storage>,
    class_id: i64,
    email: Option<String>,
) -> AttendanceGate {
    let class = match storage.get_live_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return AttendanceGate::Reply(HttpResponse::NotFound().json(
                ApiResponse::error_empty(ErrorCode::LiveClassNotFound, "Aula não encontrada"),
            ));
        }
        Err(e) => {
            return AttendanceGate::Reply(HttpResponse::InternalServerError().json(
                ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta de aula falhou: {e}"),
                ),
            ));
        }
    };

    if !class.active || !class.is_live_format {
        return AttendanceGate::Reply(HttpResponse::UnprocessableEntity().json(
            ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Aula sem registro de presença habilitado",
            ),
        ));
    }

    let email = match email {
        Some(e) if !e.trim().is_empty() => e.trim().to_lowercase(),
        _ => {
            return AttendanceGate::Reply(HttpResponse::Unauthorized().json(ApiResponse::error(
                ErrorCode::NotAuthenticated,
                AttendanceResultResponse::new(AttendanceOutcome::UsuarioNaoAutenticado, None),
                "Identificação por e-mail é obrigatória",
            )));
        }
    };

    if validate_email(&email).is_err() {
        return AttendanceGate::Reply(HttpResponse::Unauthorized().json(ApiResponse::error(
            ErrorCode::NotAuthenticated,
            AttendanceResultResponse::new(AttendanceOutcome::UsuarioNaoAutenticado, None),
            "E-mail em formato inválido",
        )));
    }

    match decide_access(storage, &class, &email).await {
        Ok(AccessDecision::Granted(AccessGrant::Roster(student))) => AttendanceGate::Ready {
            class: Box::new(class),
            email,
            student: Some(student),
        },
        Ok(AccessDecision::Granted(AccessGrant::Visitor)) => AttendanceGate::Ready {
            class: Box::new(class),
            email,
            student: None,
        },
        Ok(AccessDecision::Denied { reason }) => {
            warn!("Acesso negado à aula {} para {}: {}", class_id, email, reason);
            let now = chrono::Utc::now().timestamp();
            if let Err(e) = storage
                .log_access_denial(class_id, &email, &reason, now)
                .await
            {
                error!("Falha ao registrar acesso negado: {}", e);
            }
            AttendanceGate::Reply(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::AccessDenied,
                format!("Acesso negado: {reason}"),
            )))
        }
        Err(e) => AttendanceGate::Reply(HttpResponse::InternalServerError().json(
            ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Verificação de acesso falhou: {e}"),
            ),
        )),
    }
}

/// Verificação de acesso por e-mail
/// GET /live-classes/{id}/access
pub async fn check_access_endpoint(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    query: StudentAccessQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let class = match storage.get_live_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LiveClassNotFound,
                "Aula não encontrada",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta de aula falhou: {e}"),
                )),
            );
        }
    };

    let email = match query.email {
        Some(e) if !e.trim().is_empty() => e.trim().to_lowercase(),
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error(
                ErrorCode::NotAuthenticated,
                AccessCheckResponse {
                    authorized: false,
                    visitor: false,
                    reason: "e-mail ausente".to_string(),
                },
                "Identificação por e-mail é obrigatória",
            )));
        }
    };

    match decide_access(&storage, &class, &email).await {
        Ok(AccessDecision::Granted(grant)) => {
            let visitor = matches!(grant, AccessGrant::Visitor);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AccessCheckResponse {
                    authorized: true,
                    visitor,
                    reason: String::new(),
                },
                "Acesso autorizado",
            )))
        }
        Ok(AccessDecision::Denied { reason }) => {
            let now = chrono::Utc::now().timestamp();
            if let Err(e) = storage
                .log_access_denial(class_id, &email, &reason, now)
                .await
            {
                error!("Falha ao registrar acesso negado: {}", e);
            }
            Ok(HttpResponse::Ok().json(ApiResponse::error(
                ErrorCode::AccessDenied,
                AccessCheckResponse {
                    authorized: false,
                    visitor: false,
                    reason: reason.clone(),
                },
                format!("Acesso negado: {reason}"),
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Verificação de acesso falhou: {e}"),
            )),
        ),
    }
}

/// Log de acessos negados de uma aula
/// GET /live-classes/{id}/access-denials
pub async fn list_access_denials(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_access_denials(class_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AccessDenialListResponse { items },
            "Consulta realizada",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Listagem de acessos negados falhou: {e}"),
            )),
        ),
    }
}
