use crate::detect::{self, rules::RULESET_VERSION};
use crate::load::LoadedEvidence;
use crate::review;
use crate::score::{self, advisory};
use crate::types::evidence::EvidenceKind;
use crate::types::report::Assessment;
use chrono::Utc;

/// Runs detection, reviewer overrides and scoring for one formulation.
pub fn assess(
    loaded: &LoadedEvidence,
    overrides: &[(String, bool)],
    reviewer: Option<&str>,
) -> Assessment {
    let detection = detect::detect(&loaded.evidence);
    let review = review::apply_overrides(&detection.attributes, overrides);
    let breakdown = score::compose(&review.confirmed);

    let evidence_kind = loaded.evidence.kind();
    let composition_notes = match evidence_kind {
        EvidenceKind::Table => advisory::composition_notes(&review.confirmed),
        EvidenceKind::Text => Vec::new(),
    };

    tracing::info!(
        source = %loaded.path.display(),
        total = breakdown.total,
        rating = breakdown.rating.label(),
        overrides = review.overrides.len(),
        enabled = ?review.confirmed.enabled().collect::<Vec<_>>(),
        "formulation assessed"
    );

    Assessment {
        source: loaded.path.display().to_string(),
        source_sha256: loaded.sha256.clone(),
        evidence_kind,
        ruleset_version: RULESET_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        reviewer: reviewer.map(str::to_string),
        detected: detection.attributes,
        confirmed: review.confirmed,
        matches: detection.matches,
        overrides: review.overrides,
        ignored_overrides: review.ignored,
        composition_notes,
        breakdown,
    }
}
