//! Vital-sign readings.

use crate::fields::{format_iso, NumberInput};
use crate::model::{EntityBase, EntityId, Model};
use crate::types::{VitalsFields, VitalsProjection};
use crate::{Error, Result};
use chrono::{DateTime, Duration, Utc};

const NUMERIC_RULE: &str =
    "Vitals must contain valid numeric values for systolic, diastolic, and heart rate.";
const DATE_RULE: &str = "Vitals date must not be in the future.";

/// Clock drift tolerated between the caller's timestamp and ours
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// A single blood pressure and heart rate reading
#[derive(Clone, Debug, PartialEq)]
pub struct Vitals {
    base: EntityBase,
    date: DateTime<Utc>,
    systolic: i64,
    diastolic: i64,
    heart_rate: i64,
}

impl Vitals {
    /// Record a reading taken now
    ///
    /// Each value is coerced with a lenient integer parse, so `"133"` and
    /// `133.6` both become 133.
    pub fn new(fields: VitalsFields) -> Result<Self> {
        Self::recorded_at(fields, Utc::now())
    }

    /// Record a reading taken at a known time
    ///
    /// Fails when `date` lies in the future.
    pub fn recorded_at(fields: VitalsFields, date: DateTime<Utc>) -> Result<Self> {
        let vitals = Self {
            base: EntityBase::new(),
            date,
            systolic: parse_reading(fields.systolic.as_ref())?,
            diastolic: parse_reading(fields.diastolic.as_ref())?,
            heart_rate: parse_reading(fields.heart_rate.as_ref())?,
        };
        vitals.validate()?;

        tracing::debug!(
            "Recorded vitals {} ({}/{} @ {} bpm)",
            vitals.id(),
            vitals.systolic,
            vitals.diastolic,
            vitals.heart_rate
        );
        Ok(vitals)
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Systolic pressure (upper number), mmHg
    pub fn systolic(&self) -> i64 {
        self.systolic
    }

    /// Diastolic pressure (lower number), mmHg
    pub fn diastolic(&self) -> i64 {
        self.diastolic
    }

    /// Beats per minute
    pub fn heart_rate(&self) -> i64 {
        self.heart_rate
    }
}

fn parse_reading(input: Option<&NumberInput>) -> Result<i64> {
    input
        .and_then(NumberInput::parse_int)
        .ok_or_else(|| Error::validation(NUMERIC_RULE))
}

impl Model for Vitals {
    type Projection = VitalsProjection;

    fn id(&self) -> EntityId {
        self.base.id()
    }

    fn validate(&self) -> Result<()> {
        if self.date > Utc::now() + Duration::seconds(MAX_CLOCK_SKEW_SECS) {
            return Err(Error::validation(DATE_RULE));
        }
        Ok(())
    }

    fn to_plain_object(&self) -> Result<Self::Projection> {
        Ok(VitalsProjection {
            id: self.id(),
            date: format_iso(&self.date),
            systolic: self.systolic,
            diastolic: self.diastolic,
            heart_rate: self.heart_rate,
        })
    }
}
