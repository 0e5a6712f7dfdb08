//! Broad failure categories and catch-site discrimination.
//!
//! Each concrete error kind specializes one broader category. The category
//! is an explicit tag rather than an inheritance relationship: a handler for
//! "any invalid-operation defect" matches on [`Category`] via [`categorize`],
//! while a handler for one specific kind downcasts to the concrete type.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::responsibility::ResponsibilityError;
use crate::type_argument::TypeArgumentError;
use crate::unreachable::UnreachableError;

/// Broad category an error kind specializes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Category {
    /// An operation was invoked in a state where it is never valid.
    InvalidOperation,
    /// A declared operation has no implementation at this call site.
    NotImplemented,
    /// A caller supplied an argument that is never acceptable.
    InvalidArgument,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::InvalidOperation => f.write_str("invalid operation"),
            Category::NotImplemented => f.write_str("not implemented"),
            Category::InvalidArgument => f.write_str("invalid argument"),
        }
    }
}

/// Capability set shared by every error kind in the taxonomy.
pub trait Defect: StdError + Send + Sync + 'static {
    /// The broader category this kind specializes.
    fn category(&self) -> Category;

    /// Effective message: the custom message when one was supplied, the
    /// kind's default constant otherwise.
    fn message(&self) -> &str;
}

/// Returns the [`Category`] of `err` when it is one of the taxonomy's kinds,
/// `None` for foreign errors.
///
/// This is the "catch clause for the generic kind": it matches every
/// specialization of a category without naming concrete types, whereas
/// `err.downcast_ref::<E>()` scopes a handler to exactly one kind.
pub fn categorize(err: &(dyn StdError + 'static)) -> Option<Category> {
    if let Some(defect) = err.downcast_ref::<UnreachableError>() {
        Some(defect.category())
    } else if let Some(defect) = err.downcast_ref::<ResponsibilityError>() {
        Some(defect.category())
    } else if let Some(defect) = err.downcast_ref::<TypeArgumentError>() {
        Some(defect.category())
    } else {
        None
    }
}
