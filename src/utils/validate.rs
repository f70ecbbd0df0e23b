use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::grading::consolidate::{COMPETENCY_COUNT, COMPETENCY_MAX};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static TURMA_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9-]+$").expect("Invalid turma code regex"));

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("E-mail em formato inválido");
    }
    Ok(())
}

pub fn validate_turma_code(code: &str) -> Result<(), &'static str> {
    // Código de turma: 3 a 16 caracteres, maiúsculas, dígitos e hífen
    if code.len() < 3 || code.len() > 16 {
        return Err("Código de turma deve ter entre 3 e 16 caracteres");
    }
    if !TURMA_CODE_RE.is_match(code) {
        return Err("Código de turma deve conter apenas maiúsculas, dígitos e hífen");
    }
    Ok(())
}

/// Valida as cinco notas de competência antes de qualquer escrita
pub fn validate_competency_scores(scores: &[i32; COMPETENCY_COUNT]) -> Result<(), String> {
    for (i, &score) in scores.iter().enumerate() {
        if !(0..=COMPETENCY_MAX).contains(&score) {
            return Err(format!(
                "Nota da competência {} fora do intervalo 0-{}: {}",
                i + 1,
                COMPETENCY_MAX,
                score
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("aluno@escola.com.br").is_ok());
        assert!(validate_email("sem-arroba").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_turma_code() {
        assert!(validate_turma_code("TURMA-2026A").is_ok());
        assert!(validate_turma_code("ab").is_err());
        assert!(validate_turma_code("minuscula").is_err());
    }

    #[test]
    fn test_competency_scores_in_range() {
        assert!(validate_competency_scores(&[0, 40, 120, 160, 200]).is_ok());
    }

    #[test]
    fn test_competency_scores_out_of_range() {
        let err = validate_competency_scores(&[0, 40, 201, 160, 200]).unwrap_err();
        assert!(err.contains("competência 3"));
        assert!(validate_competency_scores(&[-1, 0, 0, 0, 0]).is_err());
    }
}
