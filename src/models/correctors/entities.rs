use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Corretor (modelo de negócio)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/corrector.ts")]
pub struct Corrector {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub active: bool,
    /// Disponível para novas designações
    pub visible: bool,
    /// Turmas autorizadas; None = todas
    pub authorized_turmas: Option<Vec<String>>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Corrector {
    /// Corretor apto a receber novas designações
    pub fn assignable(&self) -> bool {
        self.active && self.visible
    }

    /// Pode atuar na turma? (lista vazia ou ausente libera todas)
    pub fn authorized_for(&self, turma_code: Option<&str>) -> bool {
        match (&self.authorized_turmas, turma_code) {
            (None, _) => true,
            (Some(turmas), _) if turmas.is_empty() => true,
            (Some(_), None) => false,
            (Some(turmas), Some(code)) => turmas.iter().any(|t| t == code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector(authorized: Option<Vec<&str>>) -> Corrector {
        Corrector {
            id: 1,
            name: "Corretora".into(),
            email: "c@escola.com.br".into(),
            active: true,
            visible: true,
            authorized_turmas: authorized
                .map(|v| v.into_iter().map(String::from).collect()),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_no_list_authorizes_all() {
        assert!(corrector(None).authorized_for(Some("TURMA-A")));
        assert!(corrector(None).authorized_for(None));
        assert!(corrector(Some(vec![])).authorized_for(Some("TURMA-A")));
    }

    #[test]
    fn test_restricted_list() {
        let c = corrector(Some(vec!["TURMA-A"]));
        assert!(c.authorized_for(Some("TURMA-A")));
        assert!(!c.authorized_for(Some("TURMA-B")));
        assert!(!c.authorized_for(None));
    }

    #[test]
    fn test_assignable_requires_both_flags() {
        let mut c = corrector(None);
        assert!(c.assignable());
        c.visible = false;
        assert!(!c.assignable());
    }
}
