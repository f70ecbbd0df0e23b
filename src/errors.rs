//! Tratamento unificado de erros
//!
//! Usa uma macro para gerar o tipo de erro com código e nome de categoria.

use std::fmt;

/// Macro de definição dos tipos de erro
///
/// Gera automaticamente:
/// - a enum de erros
/// - code() - código do erro
/// - error_type() - nome da categoria
/// - message() - detalhe do erro
/// - construtores de conveniência
macro_rules! define_redacao_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum RedacaoError {
            $($variant(String),)*
        }

        impl RedacaoError {
            /// Código do erro
            pub fn code(&self) -> &'static str {
                match self {
                    $(RedacaoError::$variant(_) => $code,)*
                }
            }

            /// Nome da categoria do erro
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RedacaoError::$variant(_) => $type_name,)*
                }
            }

            /// Detalhe do erro
            pub fn message(&self) -> &str {
                match self {
                    $(RedacaoError::$variant(msg) => msg,)*
                }
            }
        }

        // Construtores de conveniência
        paste::paste! {
            impl RedacaoError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RedacaoError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_redacao_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    StoragePluginNotFound("E009", "Storage Plugin Not Found"),
    DateParse("E010", "Date Parse Error"),
    BusinessRule("E011", "Business Rule Violation"),
}

impl RedacaoError {
    /// Saída colorida (ambiente de desenvolvimento)
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERRO]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// Saída compacta
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RedacaoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RedacaoError {}

// From para os erros externos mais comuns
impl From<sea_orm::DbErr> for RedacaoError {
    fn from(err: sea_orm::DbErr) -> Self {
        RedacaoError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for RedacaoError {
    fn from(err: std::io::Error) -> Self {
        RedacaoError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for RedacaoError {
    fn from(err: serde_json::Error) -> Self {
        RedacaoError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for RedacaoError {
    fn from(err: chrono::ParseError) -> Self {
        RedacaoError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RedacaoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RedacaoError::cache_connection("x").code(), "E001");
        assert_eq!(RedacaoError::database_config("x").code(), "E003");
        assert_eq!(RedacaoError::validation("x").code(), "E006");
        assert_eq!(RedacaoError::date_parse("x").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            RedacaoError::validation("x").error_type(),
            "Validation Error"
        );
        assert_eq!(
            RedacaoError::business_rule("x").error_type(),
            "Business Rule Violation"
        );
    }

    #[test]
    fn test_error_message() {
        let err = RedacaoError::validation("Nota fora do intervalo");
        assert_eq!(err.message(), "Nota fora do intervalo");
    }

    #[test]
    fn test_format_simple() {
        let err = RedacaoError::validation("Nota inválida");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Nota inválida"));
    }
}
