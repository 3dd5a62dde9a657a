use crate::detect::rules::RULES;
use crate::detect::Detection;
use crate::score::rules::CATEGORY_RULES;
use crate::types::report::Assessment;
use serde_json::json;

/// A single assessment renders as an object, several as an array.
pub fn to_json(assessments: &[Assessment]) -> Result<String, serde_json::Error> {
    match assessments {
        [single] => serde_json::to_string_pretty(single),
        many => serde_json::to_string_pretty(many),
    }
}

pub fn detection_to_json(source: &str, detection: &Detection) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "source": source,
        "attributes": detection.attributes,
        "matches": detection.matches,
    }))
}

pub fn rules_to_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "attributes": RULES,
        "categories": CATEGORY_RULES,
    }))
}
