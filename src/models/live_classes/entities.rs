//! Aulas ao vivo e o cálculo de status
//!
//! O status é função pura do relógio: nada é persistido. A elegibilidade de
//! exibição (janela de tolerância pós-aula para saída tardia) é uma regra
//! separada do rótulo de status; as duas nunca se misturam.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::Result;
use crate::utils::time::civil_datetime;

/// Aula ao vivo (modelo de negócio)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/live_class.ts")]
pub struct LiveClass {
    pub id: i64,
    pub title: String,
    /// Data civil YYYY-MM-DD (relógio de São Paulo)
    pub date: String,
    /// Início HH:MM
    pub start_time: String,
    /// Fim HH:MM
    pub end_time: String,
    pub meeting_url: String,
    pub authorized_turmas: Vec<String>,
    pub visitor_allowed: bool,
    pub active: bool,
    /// Formato ao vivo habilita o registro automático de presença
    pub is_live_format: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Rótulo de status de uma aula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/live_class.ts")]
pub enum LiveClassStatus {
    Agendada,
    AoVivo,
    Encerrada,
}

/// Status da aula no instante `now` (relógio civil de São Paulo)
///
/// Função total com fronteiras inclusivas: em `start` e em `end` a aula
/// está ao vivo; um instante depois de `end`, encerrada.
pub fn class_status(
    date: &str,
    start_time: &str,
    end_time: &str,
    now: NaiveDateTime,
) -> Result<LiveClassStatus> {
    let start = civil_datetime(date, start_time)?;
    let end = civil_datetime(date, end_time)?;

    if now < start {
        Ok(LiveClassStatus::Agendada)
    } else if now <= end {
        Ok(LiveClassStatus::AoVivo)
    } else {
        Ok(LiveClassStatus::Encerrada)
    }
}

/// Elegibilidade de exibição na listagem do aluno
///
/// A aula continua sendo buscada até `end + grace_minutes` (rotulada como
/// encerrada dentro da janela) para permitir registro de saída tardio.
pub fn display_eligible(
    date: &str,
    start_time: &str,
    end_time: &str,
    now: NaiveDateTime,
    grace_minutes: i64,
) -> Result<bool> {
    let end = civil_datetime(date, end_time)?;
    // O início não corta a exibição: aulas agendadas aparecem
    let _ = civil_datetime(date, start_time)?;
    Ok(now <= end + Duration::minutes(grace_minutes))
}

impl LiveClass {
    pub fn status_at(&self, now: NaiveDateTime) -> Result<LiveClassStatus> {
        class_status(&self.date, &self.start_time, &self.end_time, now)
    }

    pub fn display_eligible_at(&self, now: NaiveDateTime, grace_minutes: i64) -> Result<bool> {
        display_eligible(
            &self.date,
            &self.start_time,
            &self.end_time,
            now,
            grace_minutes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const DATE: &str = "2026-03-10";

    fn at(time: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(DATE, "%Y-%m-%d")
            .unwrap()
            .and_time(chrono::NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap())
    }

    #[test]
    fn test_before_start_is_scheduled() {
        let status = class_status(DATE, "09:00", "10:00", at("08:59:59")).unwrap();
        assert_eq!(status, LiveClassStatus::Agendada);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(
            class_status(DATE, "09:00", "10:00", at("09:00:00")).unwrap(),
            LiveClassStatus::AoVivo
        );
        assert_eq!(
            class_status(DATE, "09:00", "10:00", at("10:00:00")).unwrap(),
            LiveClassStatus::AoVivo
        );
        assert_eq!(
            class_status(DATE, "09:00", "10:00", at("10:00:01")).unwrap(),
            LiveClassStatus::Encerrada
        );
    }

    #[test]
    fn test_mid_class_is_live() {
        assert_eq!(
            class_status(DATE, "09:00", "10:00", at("09:30:00")).unwrap(),
            LiveClassStatus::AoVivo
        );
    }

    #[test]
    fn test_grace_window_keeps_class_displayed() {
        // 10:30: encerrada, mas ainda exibida dentro da janela de 1h
        assert_eq!(
            class_status(DATE, "09:00", "10:00", at("10:30:00")).unwrap(),
            LiveClassStatus::Encerrada
        );
        assert!(display_eligible(DATE, "09:00", "10:00", at("10:30:00"), 60).unwrap());
        // 11:00 em ponto ainda exibe; 11:01 não
        assert!(display_eligible(DATE, "09:00", "10:00", at("11:00:00"), 60).unwrap());
        assert!(!display_eligible(DATE, "09:00", "10:00", at("11:01:00"), 60).unwrap());
    }

    #[test]
    fn test_scheduled_class_is_displayed() {
        assert!(display_eligible(DATE, "09:00", "10:00", at("07:00:00"), 60).unwrap());
    }

    #[test]
    fn test_invalid_time_is_an_error() {
        assert!(class_status(DATE, "9h", "10:00", at("09:00:00")).is_err());
    }
}
