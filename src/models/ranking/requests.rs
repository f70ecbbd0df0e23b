use serde::Deserialize;
use ts_rs::TS;

use crate::models::submissions::entities::SubmissionCategory;

/// Filtros do ranking, aplicados antes do corte em faixas
///
/// O mês é comparado como (ano, mês) inteiros no relógio civil de São
/// Paulo, nunca por rótulo de mês formatado.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ranking.ts")]
pub struct RankingQuery {
    pub category: Option<SubmissionCategory>,
    pub simulado_id: Option<i64>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}
