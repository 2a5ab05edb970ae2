#![forbid(unsafe_code)]

//! Domain model for the health tracker.
//!
//! This crate provides:
//! - Identity-bearing entities (food items, meals, medications, vitals)
//! - Field validation at construction time
//! - Plain, serialization-ready projections of every entity
//! - The fixed vocabularies (routes, dietary labels, meal types, usage labels)

pub mod error;
pub mod logging;
pub mod config;
pub mod model;
pub mod types;
pub mod fields;
pub mod vocab;
pub mod food;
pub mod vitals;
pub mod generic;
pub mod medication;
pub mod meal;

// Re-export commonly used types
pub use error::{Error, Result};
pub use config::{Config, ValidationPolicy};
pub use model::{EntityBase, EntityId, Model};
pub use types::*;
pub use fields::{DateInput, NumberInput};
pub use vocab::{DietaryLabel, MealType, RouteOfAdministration, UsageCategory, UsageLabel};
pub use food::FoodItem;
pub use vitals::Vitals;
pub use generic::Generic;
pub use medication::{Medication, MedicationBase, OverTheCounter, Prescription};
pub use meal::Meal;
