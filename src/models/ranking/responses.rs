use serde::Serialize;
use ts_rs::TS;

use super::entities::RankedStudent;

/// Ranking por faixas
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/ranking.ts")]
pub struct RankingResponse {
    pub items: Vec<RankedStudent>,
    /// Quantidade de faixas presentes no resultado
    pub tier_count: usize,
    /// Tamanho do pool avaliado após os filtros
    pub pool_size: usize,
}
