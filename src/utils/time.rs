//! Relógio civil da plataforma
//!
//! As aulas ao vivo guardam data e horários como valores civis "de parede"
//! (sem fuso), interpretados sempre em America/Sao_Paulo. Desde a abolição
//! do horário de verão em 2019 o fuso é UTC-3 o ano inteiro, então um
//! offset fixo é suficiente e independe do fuso do servidor.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::errors::{RedacaoError, Result};

const SAO_PAULO_OFFSET_SECS: i32 = -3 * 3600;

fn sao_paulo_offset() -> FixedOffset {
    FixedOffset::east_opt(SAO_PAULO_OFFSET_SECS).expect("offset fixo válido")
}

/// Agora, no relógio civil de São Paulo
pub fn now_sao_paulo() -> NaiveDateTime {
    Utc::now().with_timezone(&sao_paulo_offset()).naive_local()
}

/// Converte um instante Unix para o relógio civil de São Paulo
pub fn civil_from_timestamp(ts: i64) -> Result<NaiveDateTime> {
    let dt = DateTime::<Utc>::from_timestamp(ts, 0)
        .ok_or_else(|| RedacaoError::date_parse(format!("timestamp inválido: {ts}")))?;
    Ok(dt.with_timezone(&sao_paulo_offset()).naive_local())
}

/// Instante Unix de um horário civil de São Paulo
pub fn timestamp_from_civil(dt: NaiveDateTime) -> i64 {
    dt.and_local_timezone(sao_paulo_offset())
        .single()
        .expect("offset fixo nunca é ambíguo")
        .timestamp()
}

/// (ano, mês) civis de um instante Unix, usado no filtro de mês do ranking
pub fn civil_year_month(ts: i64) -> Result<(i32, u32)> {
    use chrono::Datelike;
    let dt = civil_from_timestamp(ts)?;
    Ok((dt.year(), dt.month()))
}

/// Data civil no formato YYYY-MM-DD
pub fn parse_civil_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RedacaoError::date_parse(format!("data inválida '{s}': {e}")))
}

/// Horário civil HH:MM ou HH:MM:SS
pub fn parse_civil_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| RedacaoError::date_parse(format!("horário inválido '{s}': {e}")))
}

/// Combina data e horário civis em um NaiveDateTime
pub fn civil_datetime(date: &str, time: &str) -> Result<NaiveDateTime> {
    Ok(parse_civil_date(date)?.and_time(parse_civil_time(time)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_civil_date() {
        assert!(parse_civil_date("2026-03-15").is_ok());
        assert!(parse_civil_date("15/03/2026").is_err());
    }

    #[test]
    fn test_parse_civil_time_both_formats() {
        assert_eq!(
            parse_civil_time("09:00").unwrap(),
            parse_civil_time("09:00:00").unwrap()
        );
        assert!(parse_civil_time("25:00").is_err());
    }

    #[test]
    fn test_civil_from_timestamp_applies_offset() {
        // Meia-noite UTC de 2026-01-01 são 21:00 do dia anterior em SP
        let dt = civil_from_timestamp(1_767_225_600).unwrap();
        assert_eq!(dt.to_string(), "2025-12-31 21:00:00");
    }

    #[test]
    fn test_civil_year_month() {
        assert_eq!(civil_year_month(1_767_225_600).unwrap(), (2025, 12));
    }

    #[test]
    fn test_timestamp_roundtrip() {
        let civil = civil_datetime("2026-03-15", "09:00").unwrap();
        let ts = timestamp_from_civil(civil);
        assert_eq!(civil_from_timestamp(ts).unwrap(), civil);
    }
}
