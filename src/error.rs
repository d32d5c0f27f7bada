use thiserror::Error;

use crate::Key;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// A prop was negative, non-finite, non-integral or out of range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Two siblings were given the same key.
    #[error("duplicate key {key} among siblings")]
    DuplicateKey { key: Key },

    /// Rendering the same input twice produced different trees.
    #[error("component `{component}` rendered different output for identical input")]
    Impure { component: &'static str },
}

impl RenderError {
    #[inline(always)]
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        RenderError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RenderError::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
