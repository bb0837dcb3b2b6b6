//! Error taxonomy for the ECS runtime.
//!
//! Every variant here is a programming-contract violation, not a user-facing
//! runtime condition: a tag used before registration, a query with the wrong
//! cardinality, a required component that was never attached. Systems
//! propagate these with `?` and the frame driver aborts the step — they are
//! never silently swallowed.

use super::component::ComponentKind;
use super::entity::{EntityId, Tag};

/// Contract violations raised by the entity manager and component accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EcsError {
    /// A tag was used before `register` declared it.
    #[error("tag `{0}` has not been registered")]
    UnknownTag(Tag),

    /// `tagged` was called on a unique tag.
    #[error("tag `{0}` is unique; use `unique` instead of `tagged`")]
    NotMulti(Tag),

    /// `unique` was called on a multi tag.
    #[error("tag `{0}` is multi; use `tagged` instead of `unique`")]
    NotUnique(Tag),

    /// A system required a live entity of this tag and found none.
    #[error("no live `{0}` entity exists")]
    MissingEntity(Tag),

    /// A required-component lookup failed. Component sets are established at
    /// spawn time; hitting this means a spawn site is wrong.
    #[error("entity {id} has no {kind} component")]
    MissingComponent { id: EntityId, kind: ComponentKind },
}
