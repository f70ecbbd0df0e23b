use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AttendanceService;
use super::access::{AttendanceGate, gate_attendance};
use crate::models::attendance::entities::{AttendanceOutcome, AttendanceState, exit_outcome};
use crate::models::attendance::requests::RecordAttendanceRequest;
use crate::models::attendance::responses::AttendanceResultResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::time::{civil_datetime, timestamp_from_civil};

/// Registra saída da aula
///
/// A checagem de estado precede a guarda de horário: sem entrada prévia a
/// resposta é `precisa_entrada` mesmo antes do início da aula. Com entrada
/// registrada, a saída só é aceita a partir do início da aula.
/// POST /live-classes/{id}/attendance/exit
pub async fn record_exit(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    req: RecordAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let (class, email, _student) = match gate_attendance(&storage, class_id, req.email).await {
        AttendanceGate::Ready {
            class,
            email,
            student,
        } => (class, email, student),
        AttendanceGate::Reply(response) => return Ok(response),
    };

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

    let class_start = match civil_datetime(&class.date, &class.start_time) {
        Ok(start) => timestamp_from_civil(start),
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Horário da aula ilegível: {e}"),
                )),
            );
        }
    };

    let now = chrono::Utc::now().timestamp();
    let state = AttendanceState::from_record(current.as_ref());

    match exit_outcome(state, now, class_start) {
        AttendanceOutcome::SaidaOk => {
            // Do estado Entered sempre há registro com id
            let record_id = current.as_ref().map(|r| r.id).unwrap_or_default();
            match storage.set_attendance_exit(record_id, now).await {
                Ok(Some(record)) => {
                    info!("Saída registrada: aula {}, {}", class.id, email);
                    Ok(HttpResponse::Ok().json(ApiResponse::success(
                        AttendanceResultResponse::new(AttendanceOutcome::SaidaOk, Some(record)),
                        "Saída registrada",
                    )))
                }
                Ok(None) => Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Presença sumiu durante o registro de saída",
                    ),
                )),
                Err(e) => Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Registro de saída falhou: {e}"),
                    ),
                )),
            }
        }
        AttendanceOutcome::PrecisaEntrada => Ok(HttpResponse::UnprocessableEntity().json(
            ApiResponse::error(
                ErrorCode::AttendanceRejected,
                AttendanceResultResponse::new(AttendanceOutcome::PrecisaEntrada, None),
                "É necessário registrar entrada antes da saída",
            ),
        )),
        AttendanceOutcome::SaidaAntesDoInicio => Ok(HttpResponse::UnprocessableEntity().json(
            ApiResponse::error(
                ErrorCode::AttendanceRejected,
                AttendanceResultResponse::new(AttendanceOutcome::SaidaAntesDoInicio, current),
                "A aula ainda não começou",
            ),
        )),
        outcome => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceResultResponse::new(outcome, current),
            "Saída já registrada",
        ))),
    }
}
