use thiserror::Error;

use crate::category::{Category, Defect};
use crate::cause::Cause;

/// Error signalling that an operation left to implementing types was invoked
/// without an implementation.
///
/// Distinct from "feature not yet implemented generally": this kind means a
/// base contract declared that some concrete type must supply the operation
/// and no such implementation exists at the call site. Prefer a required
/// trait method (no default body) where possible, so the compiler enforces
/// the contract; reach for this kind only when that is impractical, such as
/// an optional override point whose default body cannot do anything
/// sensible.
///
/// Specializes [`Category::NotImplemented`]. Typically surfaces at startup
/// or wiring time; propagate immediately, do not retry.
#[derive(Debug, Default, Error)]
#[error("{}", self.message())]
pub struct ResponsibilityError {
    message: Option<String>,
    #[source]
    source: Option<Cause>,
}

impl ResponsibilityError {
    /// Message used when none is supplied at construction.
    pub const DEFAULT_MESSAGE: &'static str =
        "this operation is the responsibility of the implementing type";

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

    /// Instance with an explicit message and an underlying cause.
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

impl Defect for ResponsibilityError {
    fn category(&self) -> Category {
        Category::NotImplemented
    }

    fn message(&self) -> &str {
        ResponsibilityError::message(self)
    }
}
