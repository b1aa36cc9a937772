//! Construction errors for placement primitives.
//!
//! Queries never fail: empty inputs yield `None`, zero divisors and parallel
//! lines have defined results. Only building a value from loosely typed input
//! (slices, names) can be rejected.

use std::fmt;

/// Errors surfaced while constructing placement values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The arguments do not describe a vector, anchor, or square.
    InvalidArgument { reason: String },
}

impl PlacementError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for PlacementError {}
