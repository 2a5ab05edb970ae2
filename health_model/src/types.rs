//! Construction inputs and projection outputs for every entity.
//!
//! Field bags are what callers hand to constructors. Required fields are
//! `Option`s so that a missing value surfaces as a validation failure from
//! the entity rather than as a parse error. Projections are the owned,
//! serialization-ready structures returned by `Model::to_plain_object`.
//!
//! Both use camelCase keys on the wire.

use crate::fields::{serialize_quantity, DateInput, NumberInput};
use crate::food::FoodItem;
use crate::model::EntityId;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Field bags
// ============================================================================

/// Input for [`FoodItem`]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemFields {
    pub name: Option<String>,
    pub serving_size: Option<String>,
    pub sodium_mg: Option<NumberInput>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A meal's food item: either raw fields or an already-built entity
#[derive(Clone, Debug)]
pub enum FoodItemInput {
    Item(FoodItem),
    Fields(FoodItemFields),
}

impl From<FoodItem> for FoodItemInput {
    fn from(item: FoodItem) -> Self {
        FoodItemInput::Item(item)
    }
}

impl From<FoodItemFields> for FoodItemInput {
    fn from(fields: FoodItemFields) -> Self {
        FoodItemInput::Fields(fields)
    }
}

// Entities never deserialize directly, so documents only ever carry raw fields.
impl<'de> Deserialize<'de> for FoodItemInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FoodItemFields::deserialize(deserializer).map(FoodItemInput::Fields)
    }
}

/// Input for [`crate::Meal`]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealFields {
    pub name: Option<String>,
    pub meal_type: Option<String>,
    #[serde(default)]
    pub food_items: Vec<FoodItemInput>,
    #[serde(default)]
    pub dietary_labels: Vec<String>,
}

/// Input for [`crate::Vitals`]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsFields {
    pub systolic: Option<NumberInput>,
    pub diastolic: Option<NumberInput>,
    pub heart_rate: Option<NumberInput>,
}

/// Input for [`crate::Generic`]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenericFields {
    pub name: Option<String>,
}

/// Fields shared by every medication
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationFields {
    pub name: Option<String>,
    pub dose: Option<String>,
    pub schedule: Option<String>,
    /// Route of administration token (see [`crate::RouteOfAdministration`])
    pub administer: Option<String>,
    #[serde(default)]
    pub side_effects: Vec<String>,
    #[serde(default)]
    pub active_ingredients: Vec<String>,
    pub notes: Option<String>,
}

/// Input for [`crate::OverTheCounter`]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverTheCounterFields {
    #[serde(flatten)]
    pub medication: MedicationFields,
    #[serde(default)]
    pub usage_labels: Vec<String>,
    #[serde(default)]
    pub recommended_for: Vec<String>,
}

/// Input for [`crate::Prescription`]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionFields {
    #[serde(flatten)]
    pub medication: MedicationFields,
    pub prescribed_by: Option<String>,
    pub refill_count: Option<NumberInput>,
    pub start_date: Option<DateInput>,
    pub end_date: Option<DateInput>,
    pub instructions_for_taking: Option<String>,
}

/// Input for [`crate::Medication`], discriminated by a `kind` key
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MedicationKindFields {
    OverTheCounter(OverTheCounterFields),
    Prescription(PrescriptionFields),
}

// ============================================================================
// Projections
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemProjection {
    pub id: EntityId,
    pub name: String,
    pub serving_size: String,
    #[serde(serialize_with = "serialize_quantity")]
    pub sodium_mg: f64,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealProjection {
    pub id: EntityId,
    pub name: String,
    pub meal_type: String,
    pub food_items: Vec<FoodItemProjection>,
    pub dietary_labels: Vec<String>,
    #[serde(serialize_with = "serialize_quantity")]
    pub total_sodium: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsProjection {
    pub id: EntityId,
    /// ISO-8601, millisecond precision, UTC
    pub date: String,
    pub systolic: i64,
    pub diastolic: i64,
    pub heart_rate: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenericProjection {
    pub id: EntityId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationProjection {
    pub id: EntityId,
    pub name: String,
    pub dose: String,
    pub schedule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administer: Option<String>,
    pub side_effects: Vec<String>,
    pub active_ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverTheCounterProjection {
    #[serde(flatten)]
    pub medication: MedicationProjection,
    pub usage_labels: Vec<String>,
    pub recommended_for: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionProjection {
    #[serde(flatten)]
    pub medication: MedicationProjection,
    pub prescribed_by: String,
    pub refill_count: u32,
    /// ISO-8601, millisecond precision, UTC
    pub start_date: String,
    /// ISO-8601, millisecond precision, UTC
    pub end_date: String,
    pub instructions_for_taking: String,
}

/// Projection of a [`crate::Medication`], tagged with its `kind`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MedicationKindProjection {
    OverTheCounter(OverTheCounterProjection),
    Prescription(PrescriptionProjection),
}
