use super::attribute::{Attribute, AttributeSet};
use super::evidence::EvidenceKind;
use super::scoring::ScoreBreakdown;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideRecord {
    pub attribute: Attribute,
    pub detected: bool,
    pub confirmed: bool,
}

/// One scored formulation, ready for rendering or export.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub source: String,
    pub source_sha256: String,
    pub evidence_kind: EvidenceKind,
    pub ruleset_version: &'static str,
    pub generated_at: String,
    pub reviewer: Option<String>,
    pub detected: AttributeSet,
    pub confirmed: AttributeSet,
    pub matches: BTreeMap<Attribute, Vec<String>>,
    pub overrides: Vec<OverrideRecord>,
    pub ignored_overrides: Vec<String>,
    pub composition_notes: Vec<String>,
    pub breakdown: ScoreBreakdown,
}
