//! Fixed vocabularies used across the model.
//!
//! Routes of administration, dietary labels, meal types and usage labels are
//! closed token sets. Entities check membership against the cached sets below
//! rather than rebuilding them per construction.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Cached token sets - built once and reused across all constructions
static ROUTE_TOKENS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| RouteOfAdministration::ALL.iter().map(|r| r.as_str()).collect());
static DIETARY_TOKENS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DietaryLabel::ALL.iter().map(|l| l.as_str()).collect());
static MEAL_TYPE_TOKENS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| MealType::ALL.iter().map(|m| m.as_str()).collect());
static USAGE_TOKENS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| UsageLabel::ALL.iter().map(|u| u.as_str()).collect());

/// Error returned when a token is not part of a vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {vocabulary} token: {token:?}")]
pub struct UnknownToken {
    pub vocabulary: &'static str,
    pub token: String,
}

// ============================================================================
// Routes of administration
// ============================================================================

/// How a medication is taken
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteOfAdministration {
    /// By mouth (pills, tablets)
    Oral,
    /// Applied to the skin (creams, ointments)
    Topical,
    /// Into the lungs (inhalers, nebulizers)
    Inhaled,
    /// By injection
    Injectable,
}

impl RouteOfAdministration {
    pub const ALL: [RouteOfAdministration; 4] = [
        RouteOfAdministration::Oral,
        RouteOfAdministration::Topical,
        RouteOfAdministration::Inhaled,
        RouteOfAdministration::Injectable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteOfAdministration::Oral => "oral",
            RouteOfAdministration::Topical => "topical",
            RouteOfAdministration::Inhaled => "inhaled",
            RouteOfAdministration::Injectable => "injectable",
        }
    }
}

// ============================================================================
// Dietary labels
// ============================================================================

/// Nutritional or dietary characteristic of a meal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DietaryLabel {
    LowSodium,
    HighProtein,
    HighSugar,
    LowSugar,
    GlutenFree,
    Vegan,
    Keto,
    DairyFree,
    LowCarb,
    HighFiber,
    Paleo,
    NutFree,
    SoyFree,
    SugarFree,
    Organic,
    Halal,
    Kosher,
}

impl DietaryLabel {
    pub const ALL: [DietaryLabel; 17] = [
        DietaryLabel::LowSodium,
        DietaryLabel::HighProtein,
        DietaryLabel::HighSugar,
        DietaryLabel::LowSugar,
        DietaryLabel::GlutenFree,
        DietaryLabel::Vegan,
        DietaryLabel::Keto,
        DietaryLabel::DairyFree,
        DietaryLabel::LowCarb,
        DietaryLabel::HighFiber,
        DietaryLabel::Paleo,
        DietaryLabel::NutFree,
        DietaryLabel::SoyFree,
        DietaryLabel::SugarFree,
        DietaryLabel::Organic,
        DietaryLabel::Halal,
        DietaryLabel::Kosher,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryLabel::LowSodium => "Low Sodium",
            DietaryLabel::HighProtein => "High Protein",
            DietaryLabel::HighSugar => "High Sugar",
            DietaryLabel::LowSugar => "Low Sugar",
            DietaryLabel::GlutenFree => "Gluten Free",
            DietaryLabel::Vegan => "Vegan",
            DietaryLabel::Keto => "Keto",
            DietaryLabel::DairyFree => "Dairy Free",
            DietaryLabel::LowCarb => "Low Carb",
            DietaryLabel::HighFiber => "High Fiber",
            DietaryLabel::Paleo => "Paleo",
            DietaryLabel::NutFree => "Nut Free",
            DietaryLabel::SoyFree => "Soy Free",
            DietaryLabel::SugarFree => "Sugar Free",
            DietaryLabel::Organic => "Organic",
            DietaryLabel::Halal => "Halal",
            DietaryLabel::Kosher => "Kosher",
        }
    }
}

// ============================================================================
// Meal types
// ============================================================================

/// Time-of-day category of a meal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

// ============================================================================
// Usage labels
// ============================================================================

/// Grouping of over-the-counter usage labels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UsageCategory {
    PainManagement,
    FeverCold,
    DigestiveHealth,
    SkinTopical,
    SleepRelaxation,
    VitaminSupplements,
    Miscellaneous,
}

/// What an over-the-counter medication is used for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UsageLabel {
    PainRelief,
    AntiInflammatory,
    HeadacheRelief,
    FeverReduction,
    CoughSuppressant,
    Decongestant,
    AllergyRelief,
    DigestiveAid,
    Antacid,
    Laxative,
    SkinTreatment,
    TopicalAntiInflammatory,
    Antiseptic,
    SleepAid,
    AnxietyReduction,
    VitaminSupplement,
    MineralSupplement,
    EnergyBoost,
    ImmuneSupport,
}

impl UsageLabel {
    pub const ALL: [UsageLabel; 19] = [
        UsageLabel::PainRelief,
        UsageLabel::AntiInflammatory,
        UsageLabel::HeadacheRelief,
        UsageLabel::FeverReduction,
        UsageLabel::CoughSuppressant,
        UsageLabel::Decongestant,
        UsageLabel::AllergyRelief,
        UsageLabel::DigestiveAid,
        UsageLabel::Antacid,
        UsageLabel::Laxative,
        UsageLabel::SkinTreatment,
        UsageLabel::TopicalAntiInflammatory,
        UsageLabel::Antiseptic,
        UsageLabel::SleepAid,
        UsageLabel::AnxietyReduction,
        UsageLabel::VitaminSupplement,
        UsageLabel::MineralSupplement,
        UsageLabel::EnergyBoost,
        UsageLabel::ImmuneSupport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UsageLabel::PainRelief => "pain-relief",
            UsageLabel::AntiInflammatory => "anti-inflammatory",
            UsageLabel::HeadacheRelief => "headache-relief",
            UsageLabel::FeverReduction => "fever-reduction",
            UsageLabel::CoughSuppressant => "cough-suppressant",
            UsageLabel::Decongestant => "decongestant",
            UsageLabel::AllergyRelief => "allergy-relief",
            UsageLabel::DigestiveAid => "digestive-aid",
            UsageLabel::Antacid => "antacid",
            UsageLabel::Laxative => "laxative",
            UsageLabel::SkinTreatment => "skin-treatment",
            UsageLabel::TopicalAntiInflammatory => "topical-anti-inflammatory",
            UsageLabel::Antiseptic => "antiseptic",
            UsageLabel::SleepAid => "sleep-aid",
            UsageLabel::AnxietyReduction => "anxiety-reduction",
            UsageLabel::VitaminSupplement => "vitamin-supplement",
            UsageLabel::MineralSupplement => "mineral-supplement",
            UsageLabel::EnergyBoost => "energy-boost",
            UsageLabel::ImmuneSupport => "immune-support",
        }
    }

    pub fn category(&self) -> UsageCategory {
        match self {
            UsageLabel::PainRelief | UsageLabel::AntiInflammatory | UsageLabel::HeadacheRelief => {
                UsageCategory::PainManagement
            }
            UsageLabel::FeverReduction
            | UsageLabel::CoughSuppressant
            | UsageLabel::Decongestant
            | UsageLabel::AllergyRelief => UsageCategory::FeverCold,
            UsageLabel::DigestiveAid | UsageLabel::Antacid | UsageLabel::Laxative => {
                UsageCategory::DigestiveHealth
            }
            UsageLabel::SkinTreatment
            | UsageLabel::TopicalAntiInflammatory
            | UsageLabel::Antiseptic => UsageCategory::SkinTopical,
            UsageLabel::SleepAid | UsageLabel::AnxietyReduction => UsageCategory::SleepRelaxation,
            UsageLabel::VitaminSupplement | UsageLabel::MineralSupplement => {
                UsageCategory::VitaminSupplements
            }
            UsageLabel::EnergyBoost | UsageLabel::ImmuneSupport => UsageCategory::Miscellaneous,
        }
    }

    /// All labels belonging to a category, in vocabulary order
    pub fn in_category(category: UsageCategory) -> impl Iterator<Item = UsageLabel> {
        Self::ALL.into_iter().filter(move |l| l.category() == category)
    }
}

// ============================================================================
// Shared string conversions
// ============================================================================

impl fmt::Display for RouteOfAdministration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DietaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UsageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteOfAdministration {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownToken {
                vocabulary: "route of administration",
                token: s.to_string(),
            })
    }
}

impl FromStr for DietaryLabel {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnknownToken {
                vocabulary: "dietary label",
                token: s.to_string(),
            })
    }
}

impl FromStr for MealType {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownToken {
                vocabulary: "meal type",
                token: s.to_string(),
            })
    }
}

impl FromStr for UsageLabel {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| UnknownToken {
                vocabulary: "usage label",
                token: s.to_string(),
            })
    }
}

pub fn is_known_route(token: &str) -> bool {
    ROUTE_TOKENS.contains(token)
}

pub fn is_known_dietary_label(token: &str) -> bool {
    DIETARY_TOKENS.contains(token)
}

pub fn is_known_meal_type(token: &str) -> bool {
    MEAL_TYPE_TOKENS.contains(token)
}

pub fn is_known_usage_label(token: &str) -> bool {
    USAGE_TOKENS.contains(token)
}
