//! Cause chaining support shared by every error kind.

use std::error::Error as StdError;
use std::fmt;

/// Boxed error attached as the underlying reason for a defect.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Renders an error and its transitive sources as a single `": "`-joined
/// string, outermost first.
pub fn render_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut cursor = err.source();
    while let Some(cause) = cursor {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        cursor = cause.source();
    }
    out
}

/// Cause restored from a serialized error.
///
/// Cause objects do not cross serialization boundaries; only their rendered
/// chain does. Deserialization rebuilds the chain as one opaque error whose
/// `Display` output is the chain verbatim and whose `source()` is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteCause {
    chain: String,
}

impl RemoteCause {
    pub fn new(chain: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
        }
    }

    /// The rendered cause chain, exactly as serialized.
    pub fn chain(&self) -> &str {
        &self.chain
    }
}

impl fmt::Display for RemoteCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chain)
    }
}

impl StdError for RemoteCause {}
