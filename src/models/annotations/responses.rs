use serde::Serialize;
use ts_rs::TS;

use super::entities::Annotation;

/// Anotações de uma redação
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/annotation.ts")]
pub struct AnnotationListResponse {
    pub items: Vec<Annotation>,
}
