//! Medications: shared fields plus over-the-counter and prescription kinds.
//!
//! The specializations embed a [`MedicationBase`] instead of inheriting from
//! it. Each one validates the base first, then its own fields, and builds its
//! projection by extending the base projection.

use crate::config::ValidationPolicy;
use crate::fields::{format_iso, DateInput};
use crate::model::{require_text, EntityBase, EntityId, Model};
use crate::types::{
    MedicationFields, MedicationKindFields, MedicationKindProjection, MedicationProjection,
    OverTheCounterFields, OverTheCounterProjection, PrescriptionFields, PrescriptionProjection,
};
use crate::vocab::{self, RouteOfAdministration, UsageLabel};
use crate::{Error, Result};
use chrono::{DateTime, Utc};

const MEDICATION_RULE: &str = "Medication must have a name, dose, and schedule.";
const PRESCRIPTION_RULE: &str = "Prescription medication must have prescribedBy, refillCount, \
     startDate, endDate, and instructions for taking.";

// ============================================================================
// Medication base
// ============================================================================

/// Fields common to every medication
#[derive(Clone, Debug, PartialEq)]
pub struct MedicationBase {
    base: EntityBase,
    name: String,
    dose: String,
    schedule: String,
    administer: Option<String>,
    side_effects: Vec<String>,
    active_ingredients: Vec<String>,
    notes: Option<String>,
    policy: ValidationPolicy,
}

impl MedicationBase {
    pub fn new(fields: MedicationFields) -> Result<Self> {
        Self::with_policy(fields, &ValidationPolicy::default())
    }

    pub fn with_policy(fields: MedicationFields, policy: &ValidationPolicy) -> Result<Self> {
        let medication = Self::build(fields, policy);
        medication.validate()?;

        tracing::debug!("Created medication {} ({})", medication.id(), medication.name);
        Ok(medication)
    }

    /// Populate fields without validating; callers must validate before
    /// handing the value out
    fn build(fields: MedicationFields, policy: &ValidationPolicy) -> Self {
        Self {
            base: EntityBase::new(),
            name: fields.name.unwrap_or_default(),
            dose: fields.dose.unwrap_or_default(),
            schedule: fields.schedule.unwrap_or_default(),
            administer: fields.administer,
            side_effects: fields.side_effects,
            active_ingredients: fields.active_ingredients,
            notes: fields.notes,
            policy: *policy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dose(&self) -> &str {
        &self.dose
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    /// Route token exactly as supplied
    pub fn administer(&self) -> Option<&str> {
        self.administer.as_deref()
    }

    /// Route parsed against the known vocabulary
    pub fn route(&self) -> Option<RouteOfAdministration> {
        self.administer.as_deref().and_then(|r| r.parse().ok())
    }

    pub fn side_effects(&self) -> &[String] {
        &self.side_effects
    }

    pub fn active_ingredients(&self) -> &[String] {
        &self.active_ingredients
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    fn projection(&self) -> MedicationProjection {
        MedicationProjection {
            id: self.id(),
            name: self.name.clone(),
            dose: self.dose.clone(),
            schedule: self.schedule.clone(),
            administer: self.administer.clone(),
            side_effects: self.side_effects.clone(),
            active_ingredients: self.active_ingredients.clone(),
            notes: self.notes.clone(),
        }
    }
}

impl Model for MedicationBase {
    type Projection = MedicationProjection;

    fn id(&self) -> EntityId {
        self.base.id()
    }

    fn validate(&self) -> Result<()> {
        require_text(&self.name, MEDICATION_RULE)?;
        require_text(&self.dose, MEDICATION_RULE)?;
        require_text(&self.schedule, MEDICATION_RULE)?;

        if self.policy.strict_routes {
            if let Some(route) = self.administer.as_deref() {
                if !vocab::is_known_route(route) {
                    return Err(Error::validation(format!(
                        "Medication route {:?} is not a known route of administration.",
                        route
                    )));
                }
            }
        }
        Ok(())
    }

    fn to_plain_object(&self) -> Result<Self::Projection> {
        Ok(self.projection())
    }
}

// ============================================================================
// Over-the-counter
// ============================================================================

/// A medication available without a prescription
#[derive(Clone, Debug, PartialEq)]
pub struct OverTheCounter {
    medication: MedicationBase,
    usage_labels: Vec<String>,
    recommended_for: Vec<String>,
}

impl OverTheCounter {
    pub fn new(fields: OverTheCounterFields) -> Result<Self> {
        Self::with_policy(fields, &ValidationPolicy::default())
    }

    pub fn with_policy(fields: OverTheCounterFields, policy: &ValidationPolicy) -> Result<Self> {
        let otc = Self {
            medication: MedicationBase::build(fields.medication, policy),
            usage_labels: fields.usage_labels,
            recommended_for: fields.recommended_for,
        };
        otc.validate()?;

        tracing::debug!(
            "Created over-the-counter medication {} ({})",
            otc.id(),
            otc.medication.name
        );
        Ok(otc)
    }

    pub fn medication(&self) -> &MedicationBase {
        &self.medication
    }

    pub fn usage_labels(&self) -> &[String] {
        &self.usage_labels
    }

    /// Usage labels that belong to the known vocabulary
    pub fn known_usage_labels(&self) -> Vec<UsageLabel> {
        self.usage_labels
            .iter()
            .filter_map(|l| l.parse().ok())
            .collect()
    }

    pub fn recommended_for(&self) -> &[String] {
        &self.recommended_for
    }
}

impl Model for OverTheCounter {
    type Projection = OverTheCounterProjection;

    fn id(&self) -> EntityId {
        self.medication.id()
    }

    fn validate(&self) -> Result<()> {
        self.medication.validate()?;

        if self.medication.policy.strict_usage_labels {
            if let Some(unknown) = self
                .usage_labels
                .iter()
                .find(|l| !vocab::is_known_usage_label(l))
            {
                return Err(Error::validation(format!(
                    "Usage label {:?} is not a known usage label.",
                    unknown
                )));
            }
        }
        Ok(())
    }

    fn to_plain_object(&self) -> Result<Self::Projection> {
        Ok(OverTheCounterProjection {
            medication: self.medication.projection(),
            usage_labels: self.usage_labels.clone(),
            recommended_for: self.recommended_for.clone(),
        })
    }
}

// ============================================================================
// Prescription
// ============================================================================

/// A prescribed medication with a dated validity window
#[derive(Clone, Debug, PartialEq)]
pub struct Prescription {
    medication: MedicationBase,
    prescribed_by: String,
    refill_count: u32,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    instructions_for_taking: String,
}

impl Prescription {
    pub fn new(fields: PrescriptionFields) -> Result<Self> {
        Self::with_policy(fields, &ValidationPolicy::default())
    }

    pub fn with_policy(fields: PrescriptionFields, policy: &ValidationPolicy) -> Result<Self> {
        let medication = MedicationBase::build(fields.medication, policy);
        medication.validate()?;

        let refill_count = fields
            .refill_count
            .as_ref()
            .and_then(|n| n.as_count())
            .ok_or_else(|| Error::validation(PRESCRIPTION_RULE))?;

        let prescription = Self {
            medication,
            prescribed_by: fields.prescribed_by.unwrap_or_default(),
            refill_count,
            start_date: coerce_date(fields.start_date.as_ref(), "startDate")?,
            end_date: coerce_date(fields.end_date.as_ref(), "endDate")?,
            instructions_for_taking: fields.instructions_for_taking.unwrap_or_default(),
        };
        prescription.validate()?;

        tracing::debug!(
            "Created prescription {} ({}, {} refills)",
            prescription.id(),
            prescription.medication.name,
            prescription.refill_count
        );
        Ok(prescription)
    }

    pub fn medication(&self) -> &MedicationBase {
        &self.medication
    }

    pub fn prescribed_by(&self) -> &str {
        &self.prescribed_by
    }

    pub fn refill_count(&self) -> u32 {
        self.refill_count
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn instructions_for_taking(&self) -> &str {
        &self.instructions_for_taking
    }
}

fn coerce_date(input: Option<&DateInput>, field: &str) -> Result<DateTime<Utc>> {
    let input = input.ok_or_else(|| Error::validation(PRESCRIPTION_RULE))?;
    input.to_datetime().ok_or_else(|| {
        Error::validation(format!(
            "Prescription {} must be a valid date, got {:?}.",
            field, input
        ))
    })
}

impl Model for Prescription {
    type Projection = PrescriptionProjection;

    fn id(&self) -> EntityId {
        self.medication.id()
    }

    fn validate(&self) -> Result<()> {
        self.medication.validate()?;

        require_text(&self.prescribed_by, PRESCRIPTION_RULE)?;
        require_text(&self.instructions_for_taking, PRESCRIPTION_RULE)?;
        if self.refill_count == 0 && !self.medication.policy.allow_zero_refills {
            return Err(Error::validation(PRESCRIPTION_RULE));
        }
        if self.medication.policy.strict_date_window && self.end_date < self.start_date {
            return Err(Error::validation(
                "Prescription endDate must not precede startDate.",
            ));
        }
        Ok(())
    }

    fn to_plain_object(&self) -> Result<Self::Projection> {
        Ok(PrescriptionProjection {
            medication: self.medication.projection(),
            prescribed_by: self.prescribed_by.clone(),
            refill_count: self.refill_count,
            start_date: format_iso(&self.start_date),
            end_date: format_iso(&self.end_date),
            instructions_for_taking: self.instructions_for_taking.clone(),
        })
    }
}

// ============================================================================
// Either kind
// ============================================================================

/// A medication of either kind, for callers holding mixed lists
#[derive(Clone, Debug, PartialEq)]
pub enum Medication {
    OverTheCounter(OverTheCounter),
    Prescription(Prescription),
}

impl Medication {
    pub fn new(fields: MedicationKindFields) -> Result<Self> {
        Self::with_policy(fields, &ValidationPolicy::default())
    }

    pub fn with_policy(fields: MedicationKindFields, policy: &ValidationPolicy) -> Result<Self> {
        match fields {
            MedicationKindFields::OverTheCounter(f) => {
                OverTheCounter::with_policy(f, policy).map(Medication::OverTheCounter)
            }
            MedicationKindFields::Prescription(f) => {
                Prescription::with_policy(f, policy).map(Medication::Prescription)
            }
        }
    }

    /// The shared medication fields
    pub fn medication(&self) -> &MedicationBase {
        match self {
            Medication::OverTheCounter(otc) => otc.medication(),
            Medication::Prescription(rx) => rx.medication(),
        }
    }

    pub fn is_prescription(&self) -> bool {
        matches!(self, Medication::Prescription(_))
    }
}

impl From<OverTheCounter> for Medication {
    fn from(otc: OverTheCounter) -> Self {
        Medication::OverTheCounter(otc)
    }
}

impl From<Prescription> for Medication {
    fn from(rx: Prescription) -> Self {
        Medication::Prescription(rx)
    }
}

impl Model for Medication {
    type Projection = MedicationKindProjection;

    fn id(&self) -> EntityId {
        self.medication().id()
    }

    fn validate(&self) -> Result<()> {
        match self {
            Medication::OverTheCounter(otc) => otc.validate(),
            Medication::Prescription(rx) => rx.validate(),
        }
    }

    fn to_plain_object(&self) -> Result<Self::Projection> {
        Ok(match self {
            Medication::OverTheCounter(otc) => {
                MedicationKindProjection::OverTheCounter(otc.to_plain_object()?)
            }
            Medication::Prescription(rx) => {
                MedicationKindProjection::Prescription(rx.to_plain_object()?)
            }
        })
    }
}
