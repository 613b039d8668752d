use std::borrow::Cow;
use thiserror::Error;

/// Error kinds raised while rendering, mapping or converting.
///
/// They travel inside [`crate::Error`] (an `anyhow::Error`), recover the kind with
/// `error.downcast_ref::<DialectError>()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DialectError {
    /// The dialect reports the capability as missing.
    #[error("{feature} is not supported by the {dialect} dialect")]
    UnsupportedFeature {
        feature: Cow<'static, str>,
        dialect: &'static str,
    },

    /// The abstract column type has no native counterpart in the dialect.
    #[error("Column type {column_type} is not supported by the {dialect} dialect")]
    UnsupportedType {
        column_type: String,
        dialect: &'static str,
    },

    /// A value cannot be mapped to or from the declared type.
    #[error("Cannot convert {value} to {target}{}", reason.as_ref().map(|r| format!(": {r}")).unwrap_or_default())]
    TypeConversion {
        value: String,
        target: String,
        reason: Option<String>,
    },

    /// The expression tree was assembled in a way that cannot produce valid SQL.
    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    /// Backend configuration could not be understood.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl DialectError {
    pub fn unsupported_feature(feature: impl Into<Cow<'static, str>>, dialect: &'static str) -> Self {
        Self::UnsupportedFeature {
            feature: feature.into(),
            dialect,
        }
    }

    pub fn type_conversion(
        value: impl std::fmt::Debug,
        target: impl Into<String>,
        reason: Option<String>,
    ) -> Self {
        Self::TypeConversion {
            value: format!("{:?}", value),
            target: target.into(),
            reason,
        }
    }

    pub fn invalid_expression(message: impl Into<String>) -> Self {
        Self::InvalidExpression(message.into())
    }

    /// Extract the kind from a generic error, if it carries one.
    pub fn of(error: &crate::Error) -> Option<&DialectError> {
        error.downcast_ref::<DialectError>()
    }
}
