use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;

use super::AttendanceService;
use crate::models::attendance::entities::{
    AttendanceClassification, classify, duration_minutes,
};
use crate::models::attendance::responses::{AttendanceReportItem, AttendanceReportResponse};
use crate::models::{ApiResponse, ErrorCode};

/// Relatório de presença de uma aula
///
/// Visão derivada do registro autoritativo por (aula, aluno): o roster das
/// turmas autorizadas classifica presenças completas, incompletas e
/// ausências; visitantes com registro entram sem turma.
/// GET /live-classes/{id}/attendance/report
pub async fn get_attendance_report(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
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

    let roster = match storage
        .list_students_by_turmas(&class.authorized_turmas)
        .await
    {
        Ok(students) => students,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta do roster falhou: {e}"),
                )),
            );
        }
    };

    let records = match storage.list_attendance_records(class_id).await {
        Ok(records) => records,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Consulta de presenças falhou: {e}"),
                )),
            );
        }
    };

    let mut by_email: HashMap<String, _> = records
        .into_iter()
        .map(|r| (r.student_email.clone(), r))
        .collect();

    let mut items: Vec<AttendanceReportItem> = Vec::with_capacity(roster.len());

    // Alunos do roster: com ou sem registro (ausência entra aqui)
    for student in &roster {
        let record = by_email.remove(&student.email);
        let (entry_at, exit_at) = record
            .as_ref()
            .map(|r| (r.entry_at, r.exit_at))
            .unwrap_or((None, None));
        items.push(AttendanceReportItem {
            student_name: student.full_name(),
            student_email: student.email.clone(),
            turma_code: student.turma_code.clone(),
            classification: classify(entry_at, exit_at),
            entry_at,
            exit_at,
            duration_minutes: duration_minutes(entry_at, exit_at),
        });
    }

    // Visitantes: registros sem aluno correspondente no roster
    for (_, record) in by_email {
        items.push(AttendanceReportItem {
            student_name: record.student_name,
            student_email: record.student_email,
            turma_code: None,
            classification: classify(record.entry_at, record.exit_at),
            entry_at: record.entry_at,
            exit_at: record.exit_at,
            duration_minutes: duration_minutes(record.entry_at, record.exit_at),
        });
    }

    items.sort_by(|a, b| a.student_name.cmp(&b.student_name));

    let complete_count = items
        .iter()
        .filter(|i| i.classification == AttendanceClassification::Completa)
        .count() as i64;
    let incomplete_count = items
        .iter()
        .filter(|i| i.classification == AttendanceClassification::Incompleta)
        .count() as i64;
    let absent_count = items
        .iter()
        .filter(|i| i.classification == AttendanceClassification::Ausente)
        .count() as i64;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AttendanceReportResponse {
            live_class_id: class_id,
            items,
            complete_count,
            incomplete_count,
            absent_count,
        },
        "Consulta realizada",
    )))
}
