use crate::error::SfiError;
use crate::types::attribute::{Attribute, AttributeSet};
use crate::types::report::OverrideRecord;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Review {
    pub confirmed: AttributeSet,
    pub overrides: Vec<OverrideRecord>,
    pub ignored: Vec<String>,
}

/// Merges reviewer overrides over detector output, attribute by attribute.
///
/// Later entries win. Unknown names are collected in `ignored`.
pub fn apply_overrides(detected: &AttributeSet, overrides: &[(String, bool)]) -> Review {
    let mut review = Review {
        confirmed: detected.clone(),
        ..Review::default()
    };

    for (name, value) in overrides {
        match Attribute::from_str(name) {
            Ok(attribute) => {
                review.confirmed.set(attribute, *value);
                review
                    .overrides
                    .retain(|record| record.attribute != attribute);
                review.overrides.push(OverrideRecord {
                    attribute,
                    detected: detected.get(attribute),
                    confirmed: *value,
                });
            }
            Err(_) => {
                tracing::warn!(name = %name, "ignoring override for unknown attribute");
                if !review.ignored.contains(name) {
                    review.ignored.push(name.clone());
                }
            }
        }
    }

    review.overrides.sort_by_key(|record| record.attribute);
    review
}

/// Parses a `name=value` override as given on the command line.
pub fn parse_override(raw: &str) -> Result<(String, bool), SfiError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| SfiError::InvalidOverride(raw.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(SfiError::InvalidOverride(raw.to_string()));
    }
    let value = match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => true,
        "false" | "no" | "0" | "off" => false,
        _ => return Err(SfiError::InvalidOverride(raw.to_string())),
    };
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(pairs: &[(&str, bool)]) -> Vec<(String, bool)> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn override_takes_precedence_per_attribute() {
        let detected = AttributeSet::all(false).with(Attribute::Claims, true);
        let review = apply_overrides(
            &detected,
            &overrides(&[("waterless", true), ("claims", false)]),
        );

        assert!(review.confirmed.get(Attribute::Waterless));
        assert!(!review.confirmed.get(Attribute::Claims));
        assert!(!review.confirmed.get(Attribute::BioBased));
        assert_eq!(
            review.overrides,
            vec![
                OverrideRecord {
                    attribute: Attribute::Waterless,
                    detected: false,
                    confirmed: true,
                },
                OverrideRecord {
                    attribute: Attribute::Claims,
                    detected: true,
                    confirmed: false,
                },
            ]
        );
    }

    #[test]
    fn later_overrides_win() {
        let review = apply_overrides(
            &AttributeSet::new(),
            &overrides(&[("refillable", true), ("Refillable", false)]),
        );
        assert!(!review.confirmed.get(Attribute::Refillable));
        assert_eq!(review.overrides.len(), 1);
        assert!(!review.overrides[0].confirmed);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let detected = AttributeSet::all(true);
        let review = apply_overrides(&detected, &overrides(&[("vegan", false), ("vegan", true)]));
        assert_eq!(review.confirmed, detected);
        assert_eq!(review.ignored, vec!["vegan".to_string()]);
        assert!(review.overrides.is_empty());
    }

    #[test]
    fn no_overrides_confirms_detection() {
        let detected = AttributeSet::new().with(Attribute::Sensorial, true);
        let review = apply_overrides(&detected, &[]);
        assert_eq!(review.confirmed, detected);
    }

    #[test]
    fn parse_override_accepts_common_booleans() {
        assert_eq!(
            parse_override("no_peg=Yes").ok(),
            Some(("no_peg".to_string(), true))
        );
        assert_eq!(
            parse_override(" waterless = off ").ok(),
            Some(("waterless".to_string(), false))
        );
    }

    #[test]
    fn parse_override_rejects_malformed_input() {
        assert!(matches!(
            parse_override("waterless"),
            Err(SfiError::InvalidOverride(_))
        ));
        assert!(matches!(
            parse_override("=true"),
            Err(SfiError::InvalidOverride(_))
        ));
        assert!(matches!(
            parse_override("waterless=maybe"),
            Err(SfiError::InvalidOverride(_))
        ));
    }
}
