//! Single food items and their nutritional data.

use crate::model::{require_text, EntityBase, EntityId, Model};
use crate::types::{FoodItemFields, FoodItemProjection};
use crate::{Error, Result};

const FOOD_ITEM_RULE: &str = "FoodItem must have name, servingSize, and sodiumMg.";

/// A food with its serving size and sodium content per serving
#[derive(Clone, Debug, PartialEq)]
pub struct FoodItem {
    base: EntityBase,
    name: String,
    serving_size: String,
    sodium_mg: f64,
    tags: Vec<String>,
}

impl FoodItem {
    /// Build and validate a food item
    ///
    /// `sodiumMg` must be supplied as a finite number; numeric text is rejected.
    pub fn new(fields: FoodItemFields) -> Result<Self> {
        let sodium_mg = fields
            .sodium_mg
            .as_ref()
            .and_then(|n| n.as_number())
            .ok_or_else(|| Error::validation(FOOD_ITEM_RULE))?;

        let item = Self {
            base: EntityBase::new(),
            name: fields.name.unwrap_or_default(),
            serving_size: fields.serving_size.unwrap_or_default(),
            sodium_mg,
            tags: fields.tags,
        };
        item.validate()?;

        tracing::debug!("Created food item {} ({})", item.id(), item.name);
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn serving_size(&self) -> &str {
        &self.serving_size
    }

    /// Sodium per serving, in milligrams
    pub fn sodium_mg(&self) -> f64 {
        self.sodium_mg
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Model for FoodItem {
    type Projection = FoodItemProjection;

    fn id(&self) -> EntityId {
        self.base.id()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.name, FOOD_ITEM_RULE)?;
        require_text(&self.serving_size, FOOD_ITEM_RULE)?;
        if !self.sodium_mg.is_finite() {
            return Err(Error::validation(FOOD_ITEM_RULE));
        }
        Ok(())
    }

    fn to_plain_object(&self) -> Result<Self::Projection> {
        Ok(FoodItemProjection {
            id: self.id(),
            name: self.name.clone(),
            serving_size: self.serving_size.clone(),
            sodium_mg: self.sodium_mg,
            tags: self.tags.clone(),
        })
    }
}

#[cfg(test)]
pub(crate) fn food_fields(name: &str, serving_size: &str, sodium_mg: f64) -> FoodItemFields {
    FoodItemFields {
        name: Some(name.into()),
        serving_size: Some(serving_size.into()),
        sodium_mg: Some(sodium_mg.into()),
        tags: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::NumberInput;

    #[test]
    fn test_create_food_item() {
        let mut fields = food_fields("Chicken Breast", "100g", 120.0);
        fields.tags = vec!["high-protein".into()];

        let item = FoodItem::new(fields).unwrap();
        assert_eq!(item.name(), "Chicken Breast");
        assert_eq!(item.serving_size(), "100g");
        assert_eq!(item.sodium_mg(), 120.0);
        assert_eq!(item.tags(), ["high-protein".to_string()]);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut fields = food_fields("", "100g", 120.0);
        let err = FoodItem::new(fields.clone()).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("FoodItem must have"));

        fields.name = None;
        assert!(FoodItem::new(fields).is_err());
    }

    #[test]
    fn test_missing_serving_size_rejected() {
        let mut fields = food_fields("Rice", "100g", 1.0);
        fields.serving_size = None;
        assert!(FoodItem::new(fields).unwrap_err().is_validation());
    }

    #[test]
    fn test_non_numeric_sodium_rejected() {
        let mut fields = food_fields("Rice", "100g", 1.0);
        fields.sodium_mg = Some(NumberInput::from("lots"));
        assert!(FoodItem::new(fields.clone()).unwrap_err().is_validation());

        // Numeric text is still text
        fields.sodium_mg = Some(NumberInput::from("120"));
        assert!(FoodItem::new(fields.clone()).is_err());

        fields.sodium_mg = None;
        assert!(FoodItem::new(fields).is_err());
    }

    #[test]
    fn test_whitespace_name_counts_as_present() {
        let item = FoodItem::new(food_fields(" ", "100g", 1.0)).unwrap();
        assert_eq!(item.name(), " ");
    }

    #[test]
    fn test_zero_sodium_is_valid() {
        let item = FoodItem::new(food_fields("Water", "250ml", 0.0)).unwrap();
        assert_eq!(item.sodium_mg(), 0.0);
    }

    #[test]
    fn test_projection_copies_fields() {
        let item = FoodItem::new(food_fields("Lettuce", "50g", 5.0)).unwrap();
        let mut projection = item.to_plain_object().unwrap();
        assert_eq!(projection.id, item.id());
        assert_eq!(projection.sodium_mg, 5.0);

        projection.tags.push("mutated".into());
        projection.name.push_str("!!");
        assert!(item.tags().is_empty());
        assert_eq!(item.name(), "Lettuce");
    }

    #[test]
    fn test_projection_is_idempotent() {
        let item = FoodItem::new(food_fields("Lettuce", "50g", 5.0)).unwrap();
        assert_eq!(item.to_plain_object().unwrap(), item.to_plain_object().unwrap());
    }
}
