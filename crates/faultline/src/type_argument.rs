use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::category::{Category, Defect};
use crate::cause::{Cause, RemoteCause, render_chain};

/// Error signalling that a generic construct received an inappropriate type
/// argument.
///
/// Intended for constraints the type system cannot express, such as "must be
/// a unit-only enum" or "must carry a specific attribute", checked at
/// runtime. Alongside the message it carries the name of the offending
/// type-parameter slot as structured data, so tooling can report which slot
/// failed without parsing the message text.
///
/// Specializes [`Category::InvalidArgument`]. Unlike the other kinds this
/// one serializes: the wire form names `message`, `type_param`, and `cause`
/// as distinct fields, and deserialization restores the first two verbatim
/// (an absent `type_param` stays absent, an empty one stays empty). The
/// cause crosses the boundary as its rendered chain and comes back as a
/// [`RemoteCause`].
#[derive(Debug, Default, Error)]
#[error("{}", self.message())]
pub struct TypeArgumentError {
    message: Option<String>,
    type_param: Option<String>,
    #[source]
    source: Option<Cause>,
}

impl TypeArgumentError {
    /// Message used when none is supplied at construction.
    pub const DEFAULT_MESSAGE: &'static str = "an invalid type argument was specified";

    /// Default-message instance with no type-parameter name and no cause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instance with an explicit message. The message is preserved verbatim,
    /// including the empty string.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Instance with an explicit message and an underlying cause.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            message: Some(message.into()),
            type_param: None,
            source: Some(cause.into()),
        }
    }

    /// Instance naming the type-parameter slot that received the invalid
    /// argument. The name is stored exactly as given, with no normalization
    /// or trimming.
    pub fn for_param(message: impl Into<String>, type_param: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            type_param: Some(type_param.into()),
            source: None,
        }
    }

    /// Full combination: message, type-parameter name, and cause.
    pub fn for_param_with_cause(
        message: impl Into<String>,
        type_param: impl Into<String>,
        cause: impl Into<Cause>,
    ) -> Self {
        Self {
            message: Some(message.into()),
            type_param: Some(type_param.into()),
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

    /// The name of the type-parameter slot that caused this error, exactly
    /// as supplied at construction.
    pub fn type_param(&self) -> Option<&str> {
        self.type_param.as_deref()
    }
}

impl Defect for TypeArgumentError {
    fn category(&self) -> Category {
        Category::InvalidArgument
    }

    fn message(&self) -> &str {
        TypeArgumentError::message(self)
    }
}

/// Wire form. The boxed cause cannot derive serde, so serialization goes
/// through this struct: the cause is flattened to its rendered chain and
/// restored as a [`RemoteCause`].
#[derive(Deserialize)]
struct Wire {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    type_param: Option<String>,
    #[serde(default)]
    cause: Option<String>,
}

impl Serialize for TypeArgumentError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let cause = self
            .source
            .as_ref()
            .map(|cause| render_chain(cause.as_ref()));
        let mut state = serializer.serialize_struct("TypeArgumentError", 3)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("type_param", &self.type_param)?;
        state.serialize_field("cause", &cause)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for TypeArgumentError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::deserialize(deserializer)?;
        Ok(Self {
            message: wire.message,
            type_param: wire.type_param,
            source: wire
                .cause
                .map(|chain| Box::new(RemoteCause::new(chain)) as Cause),
        })
    }
}
