//! Registro de presença nas aulas ao vivo
//!
//! Máquina de estados por (aula, aluno): sem registro → entrou → saiu.
//! As decisões são funções puras; o storage só aplica o efeito quando a
//! decisão é Ok. Repetições nunca são erro: devolvem "já registrada" sem
//! efeito algum.
//!
//! Assimetria intencional: a saída só é aceita depois do início da aula,
//! a entrada não tem guarda de horário.

use serde::Serialize;
use ts_rs::TS;

/// Registro autoritativo de presença por (aula, aluno)
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
    pub id: i64,
    pub live_class_id: i64,
    pub student_email: String,
    pub student_name: String,
    pub entry_at: Option<i64>,
    pub exit_at: Option<i64>,
}

/// Estado da máquina por (aula, aluno)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceState {
    NoRecord,
    Entered,
    Exited,
}

impl AttendanceState {
    /// Deriva o estado do registro persistido (ausência de linha = NoRecord)
    pub fn from_record(record: Option<&AttendanceRecord>) -> Self {
        match record {
            None => AttendanceState::NoRecord,
            Some(r) if r.exit_at.is_some() => AttendanceState::Exited,
            Some(r) if r.entry_at.is_some() => AttendanceState::Entered,
            // Linha sem entry_at não deveria existir; tratar como ausente
            Some(_) => AttendanceState::NoRecord,
        }
    }
}

/// Códigos simbólicos devolvidos ao cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceOutcome {
    EntradaOk,
    EntradaJaRegistrada,
    PrecisaEntrada,
    SaidaOk,
    SaidaJaRegistrada,
    SaidaAntesDoInicio,
    UsuarioNaoAutenticado,
}

impl AttendanceOutcome {
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceOutcome::EntradaOk => "entrada_ok",
            AttendanceOutcome::EntradaJaRegistrada => "entrada_ja_registrada",
            AttendanceOutcome::PrecisaEntrada => "precisa_entrada",
            AttendanceOutcome::SaidaOk => "saida_ok",
            AttendanceOutcome::SaidaJaRegistrada => "saida_ja_registrada",
            AttendanceOutcome::SaidaAntesDoInicio => "saida_antes_do_inicio",
            AttendanceOutcome::UsuarioNaoAutenticado => "usuario_nao_autenticado",
        }
    }

    /// Resultado que pede persistência (os demais são no-op ou rejeição)
    pub fn requires_write(&self) -> bool {
        matches!(
            self,
            AttendanceOutcome::EntradaOk | AttendanceOutcome::SaidaOk
        )
    }
}

/// Decide o registro de entrada
pub fn entry_outcome(state: AttendanceState) -> AttendanceOutcome {
    match state {
        AttendanceState::NoRecord => AttendanceOutcome::EntradaOk,
        AttendanceState::Entered | AttendanceState::Exited => {
            AttendanceOutcome::EntradaJaRegistrada
        }
    }
}

/// Decide o registro de saída
///
/// A checagem de estado vem antes da guarda de horário: sem entrada prévia
/// a resposta é sempre `precisa_entrada`, mesmo antes do início da aula.
pub fn exit_outcome(
    state: AttendanceState,
    now_ts: i64,
    class_start_ts: i64,
) -> AttendanceOutcome {
    match state {
        AttendanceState::NoRecord => AttendanceOutcome::PrecisaEntrada,
        AttendanceState::Exited => AttendanceOutcome::SaidaJaRegistrada,
        AttendanceState::Entered => {
            if now_ts < class_start_ts {
                AttendanceOutcome::SaidaAntesDoInicio
            } else {
                AttendanceOutcome::SaidaOk
            }
        }
    }
}

/// Classificação de uma presença no relatório
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceClassification {
    /// Entrada e saída registradas
    Completa,
    /// Só entrada ou só saída
    Incompleta,
    /// Aluno do roster sem registro algum
    Ausente,
}

/// Classifica um par entrada/saída do relatório
pub fn classify(entry_at: Option<i64>, exit_at: Option<i64>) -> AttendanceClassification {
    match (entry_at, exit_at) {
        (Some(_), Some(_)) => AttendanceClassification::Completa,
        (None, None) => AttendanceClassification::Ausente,
        _ => AttendanceClassification::Incompleta,
    }
}

/// Duração em minutos, apenas quando a presença é completa
pub fn duration_minutes(entry_at: Option<i64>, exit_at: Option<i64>) -> Option<i64> {
    match (entry_at, exit_at) {
        (Some(entry), Some(exit)) => Some((exit - entry) / 60),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(entry_at: Option<i64>, exit_at: Option<i64>) -> AttendanceRecord {
        AttendanceRecord {
            id: 1,
            live_class_id: 10,
            student_email: "aluno@escola.com.br".into(),
            student_name: "Aluno".into(),
            entry_at,
            exit_at,
        }
    }

    #[test]
    fn test_state_from_record() {
        assert_eq!(AttendanceState::from_record(None), AttendanceState::NoRecord);
        assert_eq!(
            AttendanceState::from_record(Some(&record(Some(100), None))),
            AttendanceState::Entered
        );
        assert_eq!(
            AttendanceState::from_record(Some(&record(Some(100), Some(200)))),
            AttendanceState::Exited
        );
    }

    #[test]
    fn test_entry_is_idempotent() {
        // Duas entradas terminam no mesmo estado que uma
        assert_eq!(
            entry_outcome(AttendanceState::NoRecord),
            AttendanceOutcome::EntradaOk
        );
        let after_first = AttendanceState::Entered;
        assert_eq!(
            entry_outcome(after_first),
            AttendanceOutcome::EntradaJaRegistrada
        );
        assert!(!entry_outcome(after_first).requires_write());
    }

    #[test]
    fn test_entry_after_exit_is_noop() {
        assert_eq!(
            entry_outcome(AttendanceState::Exited),
            AttendanceOutcome::EntradaJaRegistrada
        );
    }

    #[test]
    fn test_exit_without_entry_never_mutates() {
        let outcome = exit_outcome(AttendanceState::NoRecord, 1000, 500);
        assert_eq!(outcome, AttendanceOutcome::PrecisaEntrada);
        assert!(!outcome.requires_write());
    }

    #[test]
    fn test_exit_before_class_start_without_entry_still_needs_entry() {
        // Cenário: saída às 08:55 de aula que começa às 09:00, sem entrada
        // prévia, a resposta é precisa_entrada, não a guarda de horário
        let class_start = 9 * 3600;
        let now = class_start - 300;
        assert_eq!(
            exit_outcome(AttendanceState::NoRecord, now, class_start),
            AttendanceOutcome::PrecisaEntrada
        );
    }

    #[test]
    fn test_exit_time_guard_from_entered() {
        let class_start = 9 * 3600;
        assert_eq!(
            exit_outcome(AttendanceState::Entered, class_start - 1, class_start),
            AttendanceOutcome::SaidaAntesDoInicio
        );
        assert_eq!(
            exit_outcome(AttendanceState::Entered, class_start, class_start),
            AttendanceOutcome::SaidaOk
        );
    }

    #[test]
    fn test_double_exit_is_noop() {
        assert_eq!(
            exit_outcome(AttendanceState::Exited, 10_000, 0),
            AttendanceOutcome::SaidaJaRegistrada
        );
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            classify(Some(1), Some(2)),
            AttendanceClassification::Completa
        );
        assert_eq!(classify(Some(1), None), AttendanceClassification::Incompleta);
        assert_eq!(classify(None, Some(2)), AttendanceClassification::Incompleta);
        assert_eq!(classify(None, None), AttendanceClassification::Ausente);
    }

    #[test]
    fn test_duration_only_when_complete() {
        assert_eq!(duration_minutes(Some(0), Some(3600)), Some(60));
        assert_eq!(duration_minutes(Some(0), None), None);
    }

    #[test]
    fn test_outcome_codes() {
        assert_eq!(AttendanceOutcome::EntradaOk.code(), "entrada_ok");
        assert_eq!(AttendanceOutcome::PrecisaEntrada.code(), "precisa_entrada");
        assert_eq!(
            AttendanceOutcome::UsuarioNaoAutenticado.code(),
            "usuario_nao_autenticado"
        );
    }
}
