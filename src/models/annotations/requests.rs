use serde::Deserialize;
use ts_rs::TS;

/// Criação de anotação
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/annotation.ts")]
pub struct CreateAnnotationRequest {
    pub corrector_id: i64,
    pub competency: Option<i32>,
    pub pos_x: f64,
    pub pos_y: f64,
    pub comment: String,
}

/// Atualização parcial de anotação
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/annotation.ts")]
pub struct UpdateAnnotationRequest {
    pub competency: Option<i32>,
    pub pos_x: Option<f64>,
    pub pos_y: Option<f64>,
    pub comment: Option<String>,
}

/// Filtro da listagem de anotações de uma redação
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/annotation.ts")]
pub struct AnnotationListQuery {
    pub corrector_id: Option<i64>,
}
