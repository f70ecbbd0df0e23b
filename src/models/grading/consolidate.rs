//! Consolidação das notas de dois corretores
//!
//! Cada redação pode receber até duas correções independentes, cada uma com
//! cinco competências de 0 a 200 (total 0-1000). A nota exibida é a média
//! das duas correções; quando a diferença entre os totais passa do limiar
//! configurado, a redação fica marcada como divergente e espera resolução
//! administrativa.
//!
//! Regra de arredondamento: totais arredondam para o inteiro mais próximo,
//! médias por competência para uma casa decimal. Uma regra só, aplicada em
//! todo o sistema.

use serde::Serialize;
use ts_rs::TS;

pub const COMPETENCY_COUNT: usize = 5;
pub const COMPETENCY_MAX: i32 = 200;
pub const TOTAL_MAX: i32 = 1000;

/// Notas fechadas de um corretor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectorScores {
    pub competencies: [i32; COMPETENCY_COUNT],
    pub total: i32,
}

impl CorrectorScores {
    /// Constrói a partir das competências, com o total derivado da soma
    pub fn from_competencies(competencies: [i32; COMPETENCY_COUNT]) -> Self {
        Self {
            competencies,
            total: competencies.iter().sum(),
        }
    }
}

/// Situação de um dos dois slots de correção
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CorrectorSlot {
    /// Há corretor designado para o slot
    pub assigned: bool,
    /// Notas fechadas, quando o corretor terminou
    pub scores: Option<CorrectorScores>,
}

impl CorrectorSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pending() -> Self {
        Self {
            assigned: true,
            scores: None,
        }
    }

    pub fn done(scores: CorrectorScores) -> Self {
        Self {
            assigned: true,
            scores: Some(scores),
        }
    }

    fn finished(&self) -> bool {
        self.assigned && self.scores.is_some()
    }
}

/// Estado da correção, derivado a cada leitura (nunca persistido)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum GradingStatus {
    /// Nenhum corretor designado, distinto de "pendente"
    SemCorretor,
    /// Corretor(es) designado(s), nenhum terminou
    Pendente,
    /// Exatamente uma correção fechada
    Parcial,
    /// Duas correções fechadas sem divergência
    AguardandoRevisao,
    /// Duas correções fechadas com divergência acima do limiar
    Divergente,
}

/// Diferenças entre as duas correções
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct GradeDivergence {
    /// |c1 - c2| por competência, para apontar qual delas puxou a divergência
    pub competency_differences: [i32; COMPETENCY_COUNT],
    /// |total1 - total2|
    pub total_difference: i32,
    pub divergent: bool,
}

/// Resultado consolidado exibível de uma redação
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct ConsolidatedGrade {
    /// Média por competência (uma casa decimal); None = sem nota, nunca zero
    pub competencies: Option<[f64; COMPETENCY_COUNT]>,
    /// Média dos totais (inteiro mais próximo)
    pub total: Option<i64>,
    /// Presente apenas quando as duas correções estão fechadas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divergence: Option<GradeDivergence>,
    pub status: GradingStatus,
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Consolida os dois slots de correção
///
/// Total: ambas fechadas → média arredondada ao inteiro; uma fechada →
/// passa direto; nenhuma → None. O mesmo vale por competência, com uma
/// casa decimal. A função é total: nenhum arranjo de slots a derruba.
pub fn consolidate(
    slot_1: &CorrectorSlot,
    slot_2: &CorrectorSlot,
    divergence_threshold: i32,
) -> ConsolidatedGrade {
    let divergence = match (&slot_1.scores, &slot_2.scores) {
        (Some(s1), Some(s2)) => {
            let mut competency_differences = [0i32; COMPETENCY_COUNT];
            for i in 0..COMPETENCY_COUNT {
                competency_differences[i] = (s1.competencies[i] - s2.competencies[i]).abs();
            }
            let total_difference = (s1.total - s2.total).abs();
            Some(GradeDivergence {
                competency_differences,
                total_difference,
                divergent: total_difference > divergence_threshold,
            })
        }
        _ => None,
    };

    let (competencies, total) = match (&slot_1.scores, &slot_2.scores) {
        (Some(s1), Some(s2)) => {
            let mut means = [0f64; COMPETENCY_COUNT];
            for i in 0..COMPETENCY_COUNT {
                means[i] =
                    round_one_decimal((s1.competencies[i] + s2.competencies[i]) as f64 / 2.0);
            }
            let total = ((s1.total + s2.total) as f64 / 2.0).round() as i64;
            (Some(means), Some(total))
        }
        (Some(s), None) | (None, Some(s)) => {
            let mut values = [0f64; COMPETENCY_COUNT];
            for i in 0..COMPETENCY_COUNT {
                values[i] = s.competencies[i] as f64;
            }
            (Some(values), Some(s.total as i64))
        }
        (None, None) => (None, None),
    };

    let status = derive_status(slot_1, slot_2, &divergence);

    ConsolidatedGrade {
        competencies,
        total,
        divergence,
        status,
    }
}

fn derive_status(
    slot_1: &CorrectorSlot,
    slot_2: &CorrectorSlot,
    divergence: &Option<GradeDivergence>,
) -> GradingStatus {
    if !slot_1.assigned && !slot_2.assigned {
        return GradingStatus::SemCorretor;
    }
    match (slot_1.finished(), slot_2.finished()) {
        (false, false) => GradingStatus::Pendente,
        (true, false) | (false, true) => GradingStatus::Parcial,
        (true, true) => match divergence {
            Some(d) if d.divergent => GradingStatus::Divergente,
            _ => GradingStatus::AguardandoRevisao,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: i32 = 100;

    fn scores(competencies: [i32; 5]) -> CorrectorScores {
        CorrectorScores::from_competencies(competencies)
    }

    #[test]
    fn test_no_corrector_does_not_crash() {
        let grade = consolidate(&CorrectorSlot::empty(), &CorrectorSlot::empty(), THRESHOLD);
        assert_eq!(grade.status, GradingStatus::SemCorretor);
        assert_eq!(grade.competencies, None);
        assert_eq!(grade.total, None);
    }

    #[test]
    fn test_pending_distinct_from_no_corrector() {
        let grade = consolidate(&CorrectorSlot::pending(), &CorrectorSlot::empty(), THRESHOLD);
        assert_eq!(grade.status, GradingStatus::Pendente);
        assert_eq!(grade.total, None);
    }

    #[test]
    fn test_single_corrector_passes_through() {
        let grade = consolidate(
            &CorrectorSlot::done(scores([120, 160, 140, 180, 200])),
            &CorrectorSlot::pending(),
            THRESHOLD,
        );
        assert_eq!(grade.status, GradingStatus::Parcial);
        assert_eq!(grade.total, Some(800));
        assert_eq!(
            grade.competencies,
            Some([120.0, 160.0, 140.0, 180.0, 200.0])
        );
        assert!(grade.divergence.is_none());
    }

    #[test]
    fn test_both_finished_mean_and_rounding() {
        // C1: 120 e 125 → 122.5; totais 750 e 745 → 747.5 → 748
        let grade = consolidate(
            &CorrectorSlot::done(scores([120, 150, 160, 160, 160])),
            &CorrectorSlot::done(scores([125, 140, 160, 160, 160])),
            THRESHOLD,
        );
        assert_eq!(grade.competencies.unwrap()[0], 122.5);
        assert_eq!(grade.total, Some(748));
        assert_eq!(grade.status, GradingStatus::AguardandoRevisao);
    }

    #[test]
    fn test_means_stay_in_range() {
        let grade = consolidate(
            &CorrectorSlot::done(scores([0, 0, 0, 0, 0])),
            &CorrectorSlot::done(scores([200, 200, 200, 200, 200])),
            2000,
        );
        for mean in grade.competencies.unwrap() {
            assert!((0.0..=COMPETENCY_MAX as f64).contains(&mean));
        }
        let total = grade.total.unwrap();
        assert!((0..=TOTAL_MAX as i64).contains(&total));
    }

    #[test]
    fn test_divergence_strictly_above_threshold() {
        // diff = 100 exatos não diverge; 104 diverge
        let below = consolidate(
            &CorrectorSlot::done(scores([100, 100, 100, 100, 100])),
            &CorrectorSlot::done(scores([120, 120, 120, 120, 120])),
            THRESHOLD,
        );
        assert_eq!(below.divergence.unwrap().total_difference, 100);
        assert!(!below.divergence.unwrap().divergent);
        assert_eq!(below.status, GradingStatus::AguardandoRevisao);

        let above = consolidate(
            &CorrectorSlot::done(scores([100, 100, 100, 100, 100])),
            &CorrectorSlot::done(scores([121, 121, 121, 121, 120])),
            THRESHOLD,
        );
        assert!(above.divergence.unwrap().divergent);
        assert_eq!(above.status, GradingStatus::Divergente);
    }

    #[test]
    fn test_divergence_flips_once_as_gap_grows() {
        // Aumentando a diferença total de 0 a 500, a flag vira exatamente uma vez
        let mut flips = 0;
        let mut previous = false;
        for gap in 0..=500 {
            let mut competencies = [100; 5];
            let mut remaining = gap;
            for c in competencies.iter_mut() {
                let add = remaining.min(100);
                *c += add;
                remaining -= add;
            }
            let grade = consolidate(
                &CorrectorSlot::done(scores([100, 100, 100, 100, 100])),
                &CorrectorSlot::done(scores(competencies)),
                THRESHOLD,
            );
            let divergent = grade.divergence.unwrap().divergent;
            if divergent != previous {
                flips += 1;
                previous = divergent;
            }
        }
        assert_eq!(flips, 1);
    }

    #[test]
    fn test_scenario_totals_750_820_awaits_review() {
        let grade = consolidate(
            &CorrectorSlot::done(scores([150, 150, 150, 150, 150])),
            &CorrectorSlot::done(scores([164, 164, 164, 164, 164])),
            THRESHOLD,
        );
        assert_eq!(grade.divergence.unwrap().total_difference, 70);
        assert_eq!(grade.status, GradingStatus::AguardandoRevisao);
        assert_eq!(grade.total, Some(785));
    }

    #[test]
    fn test_scenario_totals_750_900_divergent() {
        let grade = consolidate(
            &CorrectorSlot::done(scores([150, 150, 150, 150, 150])),
            &CorrectorSlot::done(scores([180, 180, 180, 180, 180])),
            THRESHOLD,
        );
        assert_eq!(grade.divergence.unwrap().total_difference, 150);
        assert_eq!(grade.status, GradingStatus::Divergente);
    }

    #[test]
    fn test_competency_differences_surface_the_culprit() {
        let grade = consolidate(
            &CorrectorSlot::done(scores([100, 100, 100, 100, 100])),
            &CorrectorSlot::done(scores([100, 100, 100, 100, 200])),
            50,
        );
        let divergence = grade.divergence.unwrap();
        assert_eq!(divergence.competency_differences, [0, 0, 0, 0, 100]);
        assert!(divergence.divergent);
    }
}
