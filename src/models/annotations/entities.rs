use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Anotação de correção sobre a redação
///
/// Artefato de correção com dono: persiste junto com o resto dos dados,
/// nada fica guardado só no navegador do corretor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/annotation.ts")]
pub struct Annotation {
    pub id: i64,
    pub submission_id: i64,
    pub corrector_id: i64,
    /// Competência associada (1-5), quando a anotação aponta uma delas
    pub competency: Option<i32>,
    /// Posição na página, em percentual (0-100)
    pub pos_x: f64,
    pub pos_y: f64,
    pub comment: String,
    pub created_at: i64,
    pub updated_at: i64,
}
