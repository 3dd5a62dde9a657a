use crate::error::SfiError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A named boolean sustainability signal.
///
/// Variant order is the declaration order used for advisories and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    BioBased,
    Biotech,
    Upcycled,
    Biodegradable,
    NoPeg,
    ColdProcess,
    Waterless,
    Refillable,
    Multifunctional,
    Sensorial,
    Claims,
    NaturalOrigin,
    Petrochemical,
    HighPotencyActives,
}

impl Attribute {
    pub const ALL: [Attribute; 14] = [
        Attribute::BioBased,
        Attribute::Biotech,
        Attribute::Upcycled,
        Attribute::Biodegradable,
        Attribute::NoPeg,
        Attribute::ColdProcess,
        Attribute::Waterless,
        Attribute::Refillable,
        Attribute::Multifunctional,
        Attribute::Sensorial,
        Attribute::Claims,
        Attribute::NaturalOrigin,
        Attribute::Petrochemical,
        Attribute::HighPotencyActives,
    ];

    /// Attributes that carry points in a category.
    pub const SCORED: [Attribute; 11] = [
        Attribute::BioBased,
        Attribute::Biotech,
        Attribute::Upcycled,
        Attribute::Biodegradable,
        Attribute::NoPeg,
        Attribute::ColdProcess,
        Attribute::Waterless,
        Attribute::Refillable,
        Attribute::Multifunctional,
        Attribute::Sensorial,
        Attribute::Claims,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::BioBased => "bio_based",
            Attribute::Biotech => "biotech",
            Attribute::Upcycled => "upcycled",
            Attribute::Biodegradable => "biodegradable",
            Attribute::NoPeg => "no_peg",
            Attribute::ColdProcess => "cold_process",
            Attribute::Waterless => "waterless",
            Attribute::Refillable => "refillable",
            Attribute::Multifunctional => "multifunctional",
            Attribute::Sensorial => "sensorial",
            Attribute::Claims => "claims",
            Attribute::NaturalOrigin => "natural_origin",
            Attribute::Petrochemical => "petrochemical",
            Attribute::HighPotencyActives => "high_potency_actives",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Attribute::BioBased => "Bio-based sourcing",
            Attribute::Biotech => "Biotech-derived ingredients",
            Attribute::Upcycled => "Upcycled ingredients",
            Attribute::Biodegradable => "Biodegradable formula",
            Attribute::NoPeg => "PEG-free",
            Attribute::ColdProcess => "Cold process",
            Attribute::Waterless => "Waterless format",
            Attribute::Refillable => "Refillable or recyclable packaging",
            Attribute::Multifunctional => "Multifunctional use",
            Attribute::Sensorial => "Sensorial experience",
            Attribute::Claims => "Wellness claims",
            Attribute::NaturalOrigin => "Natural-origin ingredient",
            Attribute::Petrochemical => "Petrochemical ingredient",
            Attribute::HighPotencyActives => "High-potency actives",
        }
    }

    pub fn is_scored(&self) -> bool {
        Self::SCORED.contains(self)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = SfiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Attribute::ALL
            .iter()
            .copied()
            .find(|attribute| attribute.as_str() == normalized)
            .ok_or_else(|| SfiError::UnknownAttribute(s.trim().to_string()))
    }
}

/// Attribute values for one formulation. Absent attributes read as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet(BTreeMap<Attribute, bool>);

impl AttributeSet {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(value: bool) -> Self {
        Attribute::ALL.iter().map(|attribute| (*attribute, value)).collect()
    }

    pub fn get(&self, attribute: Attribute) -> bool {
        self.0.get(&attribute).copied().unwrap_or(false)
    }

    pub fn set(&mut self, attribute: Attribute, value: bool) {
        self.0.insert(attribute, value);
    }

    #[allow(dead_code)]
    pub fn with(mut self, attribute: Attribute, value: bool) -> Self {
        self.set(attribute, value);
        self
    }

    pub fn enabled(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.0
            .iter()
            .filter(|(_, value)| **value)
            .map(|(attribute, _)| *attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, bool)> + '_ {
        self.0.iter().map(|(attribute, value)| (*attribute, *value))
    }
}

impl FromIterator<(Attribute, bool)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (Attribute, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
