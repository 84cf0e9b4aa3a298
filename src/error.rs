//! Error type shared by every fallible tree operation.

use alloc::string::String;
use thiserror::Error;

use crate::person::PersonId;

/// Errors raised while building, querying or rendering a [`Tree`](crate::Tree).
///
/// Errors are raised at the point of violation and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    /// A relation label that is not one of `parents`, `siblings`, `partners`, `children`.
    #[error("invalid relation '{0}', relation must be one of parents, siblings, partners, children")]
    InvalidRelation(String),

    /// A bounded group (parents or partners) would grow past its maximum.
    #[error("could not add '{person}' to group: maximum of {capacity} people exceeded")]
    CapacityExceeded { person: String, capacity: usize },

    /// Both people already share a component, so a new direct relation would contradict it.
    #[error("{first} and {second} are already related via a different relation")]
    ConflictingRelation { first: String, second: String },

    /// The handle does not name a person registered in the tree.
    #[error("{0} was not found in tree")]
    PersonNotFound(PersonId),

    /// A partners group with a size other than 1 or 2 was met while rendering.
    #[error("{person}'s partner group has incorrect size {size}")]
    MalformedPartnerGroup { person: String, size: usize },
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, FamilyError>;
