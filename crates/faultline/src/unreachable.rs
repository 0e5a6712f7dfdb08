use thiserror::Error;

use crate::category::{Category, Defect};
use crate::cause::Cause;

/// Error signalling that a supposedly unreachable code path executed.
///
/// Intended for branches that are logically impossible within the structure
/// of the program, such as the fallback arm of a dispatch over a closed set
/// of variants where every variant already has an arm. Reaching one is a
/// programming defect: log it with its full cause chain and crash or
/// propagate, never swallow it.
///
/// Specializes [`Category::InvalidOperation`], so catch sites can separate
/// "truly impossible" failures from ordinary invalid-operation failures by
/// concrete type while a category-wide handler still matches both.
#[derive(Debug, Default, Error)]
#[error("{}", self.message())]
pub struct UnreachableError {
    message: Option<String>,
    #[source]
    source: Option<Cause>,
}

impl UnreachableError {
    /// Message used when none is supplied at construction.
    pub const DEFAULT_MESSAGE: &'static str =
        "this cannot happen: an unreachable code path was executed";

    /// Default-message instance with no cause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instance with an explicit message. The message is preserved verbatim,
    /// including the empty string.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            source: None,
        }
    }

    /// Instance with an explicit message and the error that indirectly
    /// explains why the impossible path was reached.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            message: Some(message.into()),
            source: Some(cause.into()),
        }
    }

    /// Effective message: the custom message if one was supplied,
    /// [`Self::DEFAULT_MESSAGE`] otherwise.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or(Self::DEFAULT_MESSAGE)
    }

    /// The message exactly as supplied at construction, if any.
    pub fn custom_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Defect for UnreachableError {
    fn category(&self) -> Category {
        Category::InvalidOperation
    }

    fn message(&self) -> &str {
        UnreachableError::message(self)
    }
}
