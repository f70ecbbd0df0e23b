//! Ranking por faixas de nota
//!
//! O pódio é de faixas (valores distintos de total), não de linhas: todos
//! os alunos que empatam numa das cinco melhores notas entram, com o mesmo
//! ordinal da faixa. Com empates o resultado pode passar de cinco linhas.

use serde::Serialize;
use ts_rs::TS;

/// Quantidade padrão de faixas do pódio
pub const DEFAULT_TIER_COUNT: usize = 5;

/// Candidato ao ranking (nota já consolidada)
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    pub student_name: String,
    pub student_email: String,
    pub total: i64,
}

/// Linha do ranking com o ordinal da faixa (1 = melhor nota)
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ranking.ts")]
pub struct RankedStudent {
    pub rank: u32,
    pub student_name: String,
    pub student_email: String,
    pub total: i64,
}

/// Monta o ranking com as `tier_count` melhores notas distintas
pub fn tier_ranking(mut entries: Vec<ScoreEntry>, tier_count: usize) -> Vec<RankedStudent> {
    let mut tiers: Vec<i64> = entries.iter().map(|e| e.total).collect();
    tiers.sort_unstable_by(|a, b| b.cmp(a));
    tiers.dedup();
    tiers.truncate(tier_count);

    // Ordem estável dentro da faixa: nota desc, depois nome
    entries.sort_by(|a, b| b.total.cmp(&a.total).then(a.student_name.cmp(&b.student_name)));

    entries
        .into_iter()
        .filter_map(|entry| {
            tiers
                .iter()
                .position(|&tier| tier == entry.total)
                .map(|idx| RankedStudent {
                    rank: (idx + 1) as u32,
                    student_name: entry.student_name,
                    student_email: entry.student_email,
                    total: entry.total,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, total: i64) -> ScoreEntry {
        ScoreEntry {
            student_name: name.into(),
            student_email: format!("{}@escola.com.br", name.to_lowercase()),
            total,
        }
    }

    #[test]
    fn test_tie_inclusion_keeps_all_eight() {
        // [90,90,80,70,70,70,60,50] → cinco faixas, oito linhas
        let entries = vec![
            entry("Ana", 90),
            entry("Bia", 90),
            entry("Caio", 80),
            entry("Duda", 70),
            entry("Enzo", 70),
            entry("Febe", 70),
            entry("Gael", 60),
            entry("Hugo", 50),
        ];
        let ranking = tier_ranking(entries, DEFAULT_TIER_COUNT);
        assert_eq!(ranking.len(), 8);

        let ranks: Vec<u32> = ranking.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 1, 2, 3, 3, 3, 4, 5]);
    }

    #[test]
    fn test_sixth_tier_is_cut() {
        let entries = vec![
            entry("A", 900),
            entry("B", 850),
            entry("C", 800),
            entry("D", 750),
            entry("E", 700),
            entry("F", 650),
        ];
        let ranking = tier_ranking(entries, DEFAULT_TIER_COUNT);
        assert_eq!(ranking.len(), 5);
        assert!(ranking.iter().all(|r| r.total >= 700));
    }

    #[test]
    fn test_fewer_tiers_than_limit() {
        let entries = vec![entry("A", 800), entry("B", 800)];
        let ranking = tier_ranking(entries, DEFAULT_TIER_COUNT);
        assert_eq!(ranking.len(), 2);
        assert!(ranking.iter().all(|r| r.rank == 1));
    }

    #[test]
    fn test_empty_pool() {
        assert!(tier_ranking(vec![], DEFAULT_TIER_COUNT).is_empty());
    }
}
