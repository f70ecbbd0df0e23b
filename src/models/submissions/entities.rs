//! Redações enviadas pelos alunos

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::grading::consolidate::{
    COMPETENCY_COUNT, ConsolidatedGrade, CorrectorScores, CorrectorSlot, consolidate,
};

/// Categoria do envio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionCategory {
    /// Prova simulada: exige dois corretores distintos
    Simulado,
    /// Envio regular de turma: consome um crédito de correção
    Regular,
    /// Envio avulso de visitante
    Avulsa,
}

impl SubmissionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionCategory::Simulado => "simulado",
            SubmissionCategory::Regular => "regular",
            SubmissionCategory::Avulsa => "avulsa",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "simulado" => Some(SubmissionCategory::Simulado),
            "regular" => Some(SubmissionCategory::Regular),
            "avulsa" => Some(SubmissionCategory::Avulsa),
            _ => None,
        }
    }
}

/// Situação de um corretor sobre uma redação
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum CorrectorReviewStatus {
    Pendente,
    Corrigida,
}

impl CorrectorReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrectorReviewStatus::Pendente => "pendente",
            CorrectorReviewStatus::Corrigida => "corrigida",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pendente" => Some(CorrectorReviewStatus::Pendente),
            "corrigida" => Some(CorrectorReviewStatus::Corrigida),
            _ => None,
        }
    }
}

/// Um dos dois slots de correção de uma redação
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionCorrector {
    pub corrector_id: i64,
    pub status: CorrectorReviewStatus,
    pub competencies: Option<[i32; COMPETENCY_COUNT]>,
    pub total: Option<i32>,
}

/// Redação (modelo de negócio)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    /// Código público de acompanhamento
    pub tracking_code: String,
    pub student_name: String,
    pub student_email: String,
    pub turma_code: Option<String>,
    pub category: SubmissionCategory,
    pub simulado_id: Option<i64>,
    pub theme: String,
    pub content: String,
    pub submitted_at: i64,
    /// Todos os corretores designados terminaram
    pub corrected: bool,
    pub corrector_1: Option<SubmissionCorrector>,
    pub corrector_2: Option<SubmissionCorrector>,
}

impl Submission {
    fn slot_view(corrector: &Option<SubmissionCorrector>) -> CorrectorSlot {
        match corrector {
            None => CorrectorSlot::empty(),
            Some(c) => match (c.status, c.competencies) {
                (CorrectorReviewStatus::Corrigida, Some(competencies)) => {
                    CorrectorSlot::done(CorrectorScores {
                        competencies,
                        total: c.total.unwrap_or_else(|| competencies.iter().sum()),
                    })
                }
                _ => CorrectorSlot::pending(),
            },
        }
    }

    /// Nota consolidada e status derivado, recalculados a cada leitura
    pub fn consolidated(&self, divergence_threshold: i32) -> ConsolidatedGrade {
        consolidate(
            &Self::slot_view(&self.corrector_1),
            &Self::slot_view(&self.corrector_2),
            divergence_threshold,
        )
    }

    /// Quantidade de corretores designados
    pub fn corrector_count(&self) -> usize {
        self.corrector_1.is_some() as usize + self.corrector_2.is_some() as usize
    }

    /// O corretor já ocupa um dos slots?
    pub fn has_corrector(&self, corrector_id: i64) -> bool {
        self.corrector_1.map(|c| c.corrector_id) == Some(corrector_id)
            || self.corrector_2.map(|c| c.corrector_id) == Some(corrector_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grading::consolidate::GradingStatus;

    fn submission() -> Submission {
        Submission {
            id: 1,
            tracking_code: "abc".into(),
            student_name: "Aluna".into(),
            student_email: "aluna@escola.com.br".into(),
            turma_code: Some("TURMA-A".into()),
            category: SubmissionCategory::Simulado,
            simulado_id: Some(3),
            theme: "Tema".into(),
            content: "Texto".into(),
            submitted_at: 0,
            corrected: false,
            corrector_1: None,
            corrector_2: None,
        }
    }

    #[test]
    fn test_consolidated_without_correctors() {
        let grade = submission().consolidated(100);
        assert_eq!(grade.status, GradingStatus::SemCorretor);
    }

    #[test]
    fn test_consolidated_with_one_done() {
        let mut s = submission();
        s.corrector_1 = Some(SubmissionCorrector {
            corrector_id: 7,
            status: CorrectorReviewStatus::Corrigida,
            competencies: Some([100, 100, 100, 100, 100]),
            total: Some(500),
        });
        s.corrector_2 = Some(SubmissionCorrector {
            corrector_id: 8,
            status: CorrectorReviewStatus::Pendente,
            competencies: None,
            total: None,
        });
        let grade = s.consolidated(100);
        assert_eq!(grade.status, GradingStatus::Parcial);
        assert_eq!(grade.total, Some(500));
    }

    #[test]
    fn test_corrector_helpers() {
        let mut s = submission();
        assert_eq!(s.corrector_count(), 0);
        s.corrector_1 = Some(SubmissionCorrector {
            corrector_id: 7,
            status: CorrectorReviewStatus::Pendente,
            competencies: None,
            total: None,
        });
        assert_eq!(s.corrector_count(), 1);
        assert!(s.has_corrector(7));
        assert!(!s.has_corrector(8));
    }

    #[test]
    fn test_category_parse_roundtrip() {
        for category in [
            SubmissionCategory::Simulado,
            SubmissionCategory::Regular,
            SubmissionCategory::Avulsa,
        ] {
            assert_eq!(SubmissionCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(SubmissionCategory::parse("outra"), None);
    }
}
