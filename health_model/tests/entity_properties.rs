//! Integration tests for the health_model public API.
//!
//! These tests exercise entities the way an embedding application would:
//! - Building entities from JSON documents
//! - Projecting them back to JSON
//! - Identity uniqueness across many constructions
//! - Rejection of invalid input

use health_model::*;
use serde_json::json;
use std::collections::HashSet;

fn chicken() -> FoodItemFields {
    serde_json::from_value(json!({
        "name": "Chicken Breast",
        "servingSize": "100g",
        "sodiumMg": 120,
        "tags": ["high-protein"]
    }))
    .expect("valid food item document")
}

fn lettuce() -> FoodItemFields {
    serde_json::from_value(json!({
        "name": "Lettuce",
        "servingSize": "50g",
        "sodiumMg": 5,
        "tags": ["low-sodium"]
    }))
    .expect("valid food item document")
}

#[test]
fn test_food_item_projection_shape() {
    let item = FoodItem::new(chicken()).unwrap();
    let json = item.to_json().unwrap();

    let id = json["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(id, item.id().to_string());

    assert_eq!(json["name"], "Chicken Breast");
    assert_eq!(json["servingSize"], "100g");
    assert_eq!(json["sodiumMg"], json!(120));
    assert_eq!(json["tags"], json!(["high-protein"]));
    assert_eq!(json.as_object().unwrap().len(), 5);
}

#[test]
fn test_ids_unique_across_constructions() {
    let ids: HashSet<EntityId> = (0..10_000)
        .map(|_| FoodItem::new(lettuce()).unwrap().id())
        .collect();
    assert_eq!(ids.len(), 10_000);
}

#[test]
fn test_id_is_stable_per_entity() {
    let meal = Meal::new(MealFields {
        name: Some("Salad".into()),
        meal_type: Some("Lunch".into()),
        food_items: vec![lettuce().into()],
        dietary_labels: vec![],
    })
    .unwrap();

    assert_eq!(meal.id(), meal.id());
    assert_eq!(
        meal.to_plain_object().unwrap().id,
        meal.to_plain_object().unwrap().id
    );
}

#[test]
fn test_projections_are_idempotent() {
    let item = FoodItem::new(chicken()).unwrap();
    assert_eq!(item.to_json().unwrap(), item.to_json().unwrap());

    let vitals = Vitals::new(VitalsFields {
        systolic: Some(133.into()),
        diastolic: Some(87.into()),
        heart_rate: Some(80.into()),
    })
    .unwrap();
    assert_eq!(vitals.to_json().unwrap(), vitals.to_json().unwrap());

    let otc = OverTheCounter::new(OverTheCounterFields {
        medication: MedicationFields {
            name: Some("Ibuprofen".into()),
            dose: Some("200mg".into()),
            schedule: Some("Every 4-6 hours as needed".into()),
            ..MedicationFields::default()
        },
        ..OverTheCounterFields::default()
    })
    .unwrap();
    assert_eq!(otc.to_plain_object().unwrap(), otc.to_plain_object().unwrap());
}

#[test]
fn test_meal_from_json_document() {
    let fields: MealFields = serde_json::from_value(json!({
        "name": "Chicken Salad",
        "mealType": "Lunch",
        "foodItems": [
            { "name": "Chicken Breast", "servingSize": "100g", "sodiumMg": 120, "tags": ["high-protein"] },
            { "name": "Lettuce", "servingSize": "50g", "sodiumMg": 5, "tags": ["low-sodium"] }
        ],
        "dietaryLabels": ["Low Sodium", "Not-A-Real-Label"]
    }))
    .unwrap();

    let meal = Meal::new(fields).unwrap();
    assert_eq!(meal.total_sodium(), 125.0);

    let json = meal.to_json().unwrap();
    assert_eq!(json["dietaryLabels"], json!(["Low Sodium"]));
    assert_eq!(json["totalSodium"], json!(125));
    assert_eq!(json["mealType"], "Lunch");
    assert_eq!(json["foodItems"].as_array().unwrap().len(), 2);
    assert_eq!(json["foodItems"][1]["name"], "Lettuce");
    assert!(json["foodItems"][0]["id"].is_string());
}

#[test]
fn test_projection_is_detached_from_entity() {
    let meal = Meal::new(MealFields {
        name: Some("Salad".into()),
        meal_type: Some("Lunch".into()),
        food_items: vec![chicken().into(), lettuce().into()],
        dietary_labels: vec!["Low Sodium".into()],
    })
    .unwrap();

    let mut projection = meal.to_plain_object().unwrap();
    projection.food_items.clear();
    projection.dietary_labels.push("Vegan".into());
    projection.total_sodium = 0.0;

    let fresh = meal.to_plain_object().unwrap();
    assert_eq!(fresh.food_items.len(), 2);
    assert_eq!(fresh.dietary_labels, vec!["Low Sodium".to_string()]);
    assert_eq!(fresh.total_sodium, 125.0);
}

#[test]
fn test_invalid_inputs_rejected() {
    let mut salty = chicken();
    salty.sodium_mg = Some(NumberInput::from("a lot"));
    assert!(matches!(FoodItem::new(salty), Err(Error::Validation(_))));

    let empty_meal = Meal::new(MealFields {
        name: Some("Air".into()),
        meal_type: Some("Snack".into()),
        ..MealFields::default()
    });
    assert!(matches!(empty_meal, Err(Error::Validation(_))));

    let no_refills: PrescriptionFields = serde_json::from_value(json!({
        "name": "Amoxicillin",
        "dose": "500mg",
        "schedule": "Every 8 hours",
        "prescribedBy": "Dr. Smith",
        "refillCount": 0,
        "startDate": "2024-01-01",
        "endDate": "2024-02-01",
        "instructionsForTaking": "Take with food"
    }))
    .unwrap();
    assert!(matches!(Prescription::new(no_refills), Err(Error::Validation(_))));
}

#[test]
fn test_food_item_round_trips_exactly() {
    let doc = json!({
        "name": "Chicken Breast",
        "servingSize": "100g",
        "sodiumMg": 120,
        "tags": ["high-protein"]
    });
    let item = FoodItem::new(serde_json::from_value(doc.clone()).unwrap()).unwrap();

    let mut json = item.to_json().unwrap();
    let id = json.as_object_mut().unwrap().remove("id").unwrap();
    assert!(!id.as_str().unwrap().is_empty());
    assert_eq!(json, doc);
    assert_eq!(
        serde_json::to_string(&item.to_plain_object().unwrap().sodium_mg).unwrap(),
        "120.0"
    );
}

#[test]
fn test_fractional_sodium_stays_fractional() {
    let mut fields = lettuce();
    fields.sodium_mg = Some(NumberInput::from(2.5));
    let json = FoodItem::new(fields).unwrap().to_json().unwrap();
    assert_eq!(json["sodiumMg"], json!(2.5));
}

#[test]
fn test_unusable_date_is_a_validation_error() {
    let fields: PrescriptionFields = serde_json::from_value(json!({
        "name": "Amoxicillin",
        "dose": "500mg",
        "schedule": "Every 8 hours",
        "prescribedBy": "Dr. Smith",
        "refillCount": 1,
        "startDate": 1704067200000.5,
        "endDate": true,
        "instructionsForTaking": "Take with food"
    }))
    .unwrap();
    assert!(matches!(Prescription::new(fields), Err(Error::Validation(_))));
}

#[test]
fn test_prescription_date_rendering() {
    let fields: PrescriptionFields = serde_json::from_value(json!({
        "name": "Amoxicillin",
        "dose": "500mg",
        "schedule": "Every 8 hours",
        "prescribedBy": "Dr. Smith",
        "refillCount": 1,
        "startDate": "2024-01-01",
        "endDate": "2024-02-01",
        "instructionsForTaking": "Take with food"
    }))
    .unwrap();

    let json = Prescription::new(fields).unwrap().to_json().unwrap();
    assert!(json["startDate"].as_str().unwrap().starts_with("2024-01-01T"));
    assert!(json["endDate"].as_str().unwrap().starts_with("2024-02-01T"));
    assert_eq!(json["refillCount"], 1);
    assert_eq!(json["prescribedBy"], "Dr. Smith");
}

#[test]
fn test_bare_base_is_not_implemented() {
    let base = EntityBase::new();
    assert!(matches!(base.validate(), Err(Error::NotImplemented(_))));
    assert!(matches!(base.to_plain_object(), Err(Error::NotImplemented(_))));
}

#[test]
fn test_strict_policy_from_config_file() {
    logging::init_test();

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[validation]\nstrict_meal_types = true\nallow_zero_refills = true\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let brunch = Meal::with_policy(
        MealFields {
            name: Some("Brunch".into()),
            meal_type: Some("Brunch".into()),
            food_items: vec![lettuce().into()],
            dietary_labels: vec![],
        },
        &config.validation,
    );
    assert!(matches!(brunch, Err(Error::Validation(_))));

    let fields: PrescriptionFields = serde_json::from_value(json!({
        "name": "Metformin",
        "dose": "500mg",
        "schedule": "Twice daily",
        "prescribedBy": "Dr. Lee",
        "refillCount": 0,
        "startDate": "2024-01-01",
        "endDate": "2024-12-31",
        "instructionsForTaking": "With meals"
    }))
    .unwrap();
    let rx = Prescription::with_policy(fields, &config.validation).unwrap();
    assert_eq!(rx.refill_count(), 0);
}

#[test]
fn test_mixed_medication_list() {
    let docs = json!([
        {
            "kind": "overTheCounter",
            "name": "Ibuprofen",
            "dose": "200mg",
            "schedule": "Every 4-6 hours as needed",
            "usageLabels": ["pain-relief", "anti-inflammatory"],
            "recommendedFor": ["headache"]
        },
        {
            "kind": "prescription",
            "name": "Lisinopril",
            "dose": "10mg",
            "schedule": "Once daily",
            "administer": "oral",
            "prescribedBy": "Dr. Jones",
            "refillCount": 5,
            "startDate": "2024-01-01",
            "endDate": "2024-06-30",
            "instructionsForTaking": "Morning"
        }
    ]);
    let fields: Vec<MedicationKindFields> = serde_json::from_value(docs).unwrap();
    let meds = fields
        .into_iter()
        .map(Medication::new)
        .collect::<Result<Vec<_>>>()
        .unwrap();

    assert_eq!(meds.len(), 2);
    assert!(!meds[0].is_prescription());
    assert!(meds[1].is_prescription());
    assert_eq!(meds[1].medication().route(), Some(RouteOfAdministration::Oral));

    let projected: Vec<serde_json::Value> = meds.iter().map(|m| m.to_json().unwrap()).collect();
    assert_eq!(projected[0]["usageLabels"], json!(["pain-relief", "anti-inflammatory"]));
    assert_eq!(projected[1]["kind"], "prescription");
    assert_eq!(projected[1]["administer"], "oral");
}
