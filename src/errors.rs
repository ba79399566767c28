//! Unified error handling.
//!
//! Error types are generated by a macro so every variant carries an error
//! code and a human-readable type name.

use std::fmt;

/// Generates the error enum plus:
/// - `code()` - the stable error code
/// - `error_type()` - the type name
/// - `message()` - the error detail
/// - snake_case convenience constructors
macro_rules! define_sga_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SgaError {
            $($variant(String),)*
        }

        impl SgaError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(SgaError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SgaError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(SgaError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl SgaError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SgaError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_sga_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    BusinessRule("E013", "Business Rule Rejection"),
}

impl SgaError {
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SgaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SgaError {}

impl From<sea_orm::DbErr> for SgaError {
    fn from(err: sea_orm::DbErr) -> Self {
        SgaError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SgaError {
    fn from(err: std::io::Error) -> Self {
        SgaError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SgaError {
    fn from(err: serde_json::Error) -> Self {
        SgaError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SgaError {
    fn from(err: chrono::ParseError) -> Self {
        SgaError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SgaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SgaError::cache_connection("test").code(), "E001");
        assert_eq!(SgaError::database_config("test").code(), "E003");
        assert_eq!(SgaError::validation("test").code(), "E007");
        assert_eq!(SgaError::business_rule("test").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SgaError::validation("test").error_type(),
            "Validation Error"
        );
        assert_eq!(
            SgaError::business_rule("test").error_type(),
            "Business Rule Rejection"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SgaError::validation("nota fuera de rango");
        assert_eq!(err.message(), "nota fuera de rango");
    }

    #[test]
    fn test_format_simple() {
        let err = SgaError::not_found("grupo 42");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("grupo 42"));
    }
}
