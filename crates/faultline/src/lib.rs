//! Structured error taxonomy for program-logic defects.
//!
//! Three sibling error kinds, each independently catchable and immutable
//! after construction:
//!
//! - [`UnreachableError`]: a supposedly impossible code path executed
//!   (invalid-operation category).
//! - [`ResponsibilityError`]: an override point that implementing types must
//!   supply was invoked without an implementation (not-implemented category).
//! - [`TypeArgumentError`]: a generic construct received a type argument
//!   violating a constraint the type system cannot express (invalid-argument
//!   category). Carries the offending type-parameter name as structured
//!   diagnostic data that survives serialization.
//!
//! Every kind falls back to a fixed default message only when no message was
//! supplied, exposes its cause chain through [`std::error::Error::source`],
//! and reports its broader [`Category`] for catch sites that discriminate by
//! kind rather than concrete type.

pub mod category;
pub mod cause;
pub mod responsibility;
pub mod type_argument;
pub mod unreachable;

pub use crate::category::{Category, Defect, categorize};
pub use crate::cause::{Cause, RemoteCause, render_chain};
pub use crate::responsibility::ResponsibilityError;
pub use crate::type_argument::TypeArgumentError;
pub use crate::unreachable::UnreachableError;
