//! Minimal named entity, the smallest complete implementation of [`Model`].

use crate::model::{require_text, EntityBase, EntityId, Model};
use crate::types::{GenericFields, GenericProjection};
use crate::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct Generic {
    base: EntityBase,
    name: String,
}

impl Generic {
    pub fn new(fields: GenericFields) -> Result<Self> {
        let generic = Self {
            base: EntityBase::new(),
            name: fields.name.unwrap_or_default(),
        };
        generic.validate()?;
        Ok(generic)
    }

    /// Shorthand for `new` with only a name
    pub fn named(name: impl Into<String>) -> Result<Self> {
        Self::new(GenericFields {
            name: Some(name.into()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Model for Generic {
    type Projection = GenericProjection;

    fn id(&self) -> EntityId {
        self.base.id()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.name, "Name is required")
    }

    fn to_plain_object(&self) -> Result<Self::Projection> {
        Ok(GenericProjection {
            id: self.id(),
            name: self.name.clone(),
        })
    }
}
