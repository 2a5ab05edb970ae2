//! Entity identity and the capability set every entity provides.
//!
//! Identity is a composed helper ([`EntityBase`]) rather than a superclass:
//! each concrete entity embeds one and implements [`Model`] itself.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an entity instance.
///
/// Backed by a random (v4) UUID, so generation needs no shared state and
/// is safe under parallel construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Validation and projection obligations shared by all entities.
pub trait Model {
    /// Plain, serialization-ready structure produced by [`Model::to_plain_object`]
    type Projection: Serialize;

    /// The entity's identity, assigned once at construction
    fn id(&self) -> EntityId;

    /// Check the entity's field rules, failing with [`Error::Validation`]
    fn validate(&self) -> Result<()>;

    /// Project the entity into an owned structure sharing nothing with it
    fn to_plain_object(&self) -> Result<Self::Projection>;

    /// Project the entity straight into a JSON value
    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.to_plain_object()?)?)
    }
}

/// Identity holder embedded in every entity.
///
/// On its own it is the bare base: it owns an id but has no fields to
/// validate or project, so both obligations fail with
/// [`Error::NotImplemented`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityBase {
    id: EntityId,
}

impl EntityBase {
    /// Assigns a fresh identity
    pub fn new() -> Self {
        Self { id: EntityId::new() }
    }
}

impl Default for EntityBase {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for EntityBase {
    type Projection = serde_json::Value;

    fn id(&self) -> EntityId {
        self.id
    }

    fn validate(&self) -> Result<()> {
        Err(Error::NotImplemented("validate"))
    }

    fn to_plain_object(&self) -> Result<Self::Projection> {
        Err(Error::NotImplemented("to_plain_object"))
    }
}

/// Fails unless `value` is non-empty; whitespace counts as content
pub(crate) fn require_text(value: &str, message: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation(message));
    }
    Ok(())
}
