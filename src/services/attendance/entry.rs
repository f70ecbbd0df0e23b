use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use super::access::{AttendanceGate, gate_attendance};
use crate::models::attendance::entities::{
    AttendanceOutcome, AttendanceState, entry_outcome,
};
use crate::models::attendance::requests::RecordAttendanceRequest;
use crate::models::attendance::responses::AttendanceResultResponse;
use crate::models::{ApiResponse, ErrorCode};

/// Registra entrada na aula
///
/// Idempotente: repetir a chamada com entrada já registrada devolve
/// `entrada_ja_registrada` sem alterar nada. A corrida de dois cliques
/// quase simultâneos é resolvida pelo índice único no banco.
/// POST /live-classes/{id}/attendance/entry
pub async fn record_entry(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    req: RecordAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (class, email, student) = match gate_attendance(&storage, class_id, req.email).await {
        AttendanceGate::Ready {
            class,
            email,
            student,
        } => (class, email, student),
        AttendanceGate::Reply(response) => return Ok(response),
    };

    // Nome para o relatório: cadastro > informado > prefixo do e-mail
    let student_name = student
        .as_ref()
        .map(|s| s.full_name())
        .or(req.name)
        .unwrap_or_else(|| email.split('@').next().unwrap_or("visitante").to_string());

    let current = match storage.get_attendance_record(class.id, &email).await {
        Ok(record) => record,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta de presença falhou: {e}"),
                )),
            );
        }
    };

    let state = AttendanceState::from_record(current.as_ref());
    match entry_outcome(state) {
        AttendanceOutcome::EntradaOk => {
            let now = chrono::Utc::now().timestamp();
            match storage
                .insert_attendance_entry(class.id, &email, &student_name, now)
                .await
            {
                Ok((record, created)) => {
                    // created = false: outra requisição venceu a corrida;
                    // o resultado degrada para o no-op da máquina de estados
                    let outcome = if created {
                        info!("Entrada registrada: aula {}, {}", class.id, email);
                        AttendanceOutcome::EntradaOk
                    } else {
                        AttendanceOutcome::EntradaJaRegistrada
                    };
                    Ok(HttpResponse::Ok().json(ApiResponse::success(
                        AttendanceResultResponse::new(outcome, Some(record)),
                        if created {
                            "Entrada registrada"
                        } else {
                            "Entrada já registrada"
                        },
                    )))
                }
                Err(e) => Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Registro de entrada falhou: {e}"),
                    ),
                )),
            }
        }
        outcome => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceResultResponse::new(outcome, current),
            "Entrada já registrada",
        ))),
    }
}
