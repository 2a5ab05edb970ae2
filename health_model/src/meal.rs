//! Meals: an aggregate over food items with derived nutritional totals.

use crate::config::ValidationPolicy;
use crate::food::FoodItem;
use crate::model::{require_text, EntityBase, EntityId, Model};
use crate::types::{FoodItemInput, MealFields, MealProjection};
use crate::vocab::{self, DietaryLabel, MealType};
use crate::{Error, Result};

const MEAL_RULE: &str = "Meal must have a name, mealType, and at least one food item.";

/// A named meal owning its food items
///
/// Totals are never cached: they are recomputed from the owned items on
/// every read.
#[derive(Clone, Debug, PartialEq)]
pub struct Meal {
    base: EntityBase,
    name: String,
    meal_type: String,
    food_items: Vec<FoodItem>,
    dietary_labels: Vec<DietaryLabel>,
    policy: ValidationPolicy,
}

impl Meal {
    pub fn new(fields: MealFields) -> Result<Self> {
        Self::with_policy(fields, &ValidationPolicy::default())
    }

    /// Build a meal, constructing any food items given as raw fields
    ///
    /// A food item that fails its own validation aborts the whole meal.
    /// Dietary labels outside the known vocabulary are dropped.
    pub fn with_policy(fields: MealFields, policy: &ValidationPolicy) -> Result<Self> {
        let food_items = fields
            .food_items
            .into_iter()
            .map(|input| match input {
                FoodItemInput::Item(item) => Ok(item),
                FoodItemInput::Fields(f) => FoodItem::new(f),
            })
            .collect::<Result<Vec<_>>>()?;

        let supplied = fields.dietary_labels.len();
        let dietary_labels: Vec<DietaryLabel> = fields
            .dietary_labels
            .iter()
            .filter_map(|label| label.parse().ok())
            .collect();
        if dietary_labels.len() < supplied {
            tracing::debug!(
                "Dropped {} unknown dietary label(s)",
                supplied - dietary_labels.len()
            );
        }

        let meal = Self {
            base: EntityBase::new(),
            name: fields.name.unwrap_or_default(),
            meal_type: fields.meal_type.unwrap_or_default(),
            food_items,
            dietary_labels,
            policy: *policy,
        };
        meal.validate()?;

        tracing::debug!(
            "Created meal {} ({}, {} items)",
            meal.id(),
            meal.name,
            meal.food_items.len()
        );
        Ok(meal)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Meal type exactly as supplied
    pub fn meal_type(&self) -> &str {
        &self.meal_type
    }

    /// Meal type parsed against the known vocabulary
    pub fn known_meal_type(&self) -> Option<MealType> {
        self.meal_type.parse().ok()
    }

    pub fn food_items(&self) -> &[FoodItem] {
        &self.food_items
    }

    pub fn dietary_labels(&self) -> &[DietaryLabel] {
        &self.dietary_labels
    }

    /// Sum of sodium across all food items, in milligrams
    pub fn total_sodium(&self) -> f64 {
        self.food_items.iter().map(FoodItem::sodium_mg).sum()
    }
}

impl Model for Meal {
    type Projection = MealProjection;

    fn id(&self) -> EntityId {
        self.base.id()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.name, MEAL_RULE)?;
        require_text(&self.meal_type, MEAL_RULE)?;
        if self.food_items.is_empty() {
            return Err(Error::validation(MEAL_RULE));
        }

        if self.policy.strict_meal_types && !vocab::is_known_meal_type(&self.meal_type) {
            return Err(Error::validation(format!(
                "Meal type {:?} is not a known meal type.",
                self.meal_type
            )));
        }
        Ok(())
    }

    fn to_plain_object(&self) -> Result<Self::Projection> {
        let food_items = self
            .food_items
            .iter()
            .map(FoodItem::to_plain_object)
            .collect::<Result<Vec<_>>>()?;

        Ok(MealProjection {
            id: self.id(),
            name: self.name.clone(),
            meal_type: self.meal_type.clone(),
            food_items,
            dietary_labels: self
                .dietary_labels
                .iter()
                .map(|l| l.as_str().to_string())
                .collect(),
            total_sodium: self.total_sodium(),
        })
    }
}
