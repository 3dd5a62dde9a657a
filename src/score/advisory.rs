use crate::types::attribute::{Attribute, AttributeSet};

pub const ADVISORIES: [(Attribute, &str); 11] = [
    (
        Attribute::BioBased,
        "Increase bio-based or botanical ingredients to strengthen the ingredient profile.",
    ),
    (
        Attribute::Biotech,
        "Explore biotech or fermentation-derived ingredients.",
    ),
    (
        Attribute::Upcycled,
        "Consider upcycled ingredients sourced from food or agricultural by-products.",
    ),
    (
        Attribute::Biodegradable,
        "Favour readily biodegradable ingredients and document biodegradability.",
    ),
    (
        Attribute::NoPeg,
        "Replace PEG derivatives with PEG-free emulsifiers.",
    ),
    (
        Attribute::ColdProcess,
        "Indicate cold-process compatibility to reduce manufacturing energy.",
    ),
    (
        Attribute::Waterless,
        "Consider a waterless or anhydrous format to cut water use and shipping weight.",
    ),
    (
        Attribute::Refillable,
        "Specify packaging format (solid, refillable, recyclable) to gain packaging points.",
    ),
    (
        Attribute::Multifunctional,
        "Position the product for multifunctional use to reduce product count.",
    ),
    (
        Attribute::Sensorial,
        "Describe the sensorial experience (texture, aroma) in the function claims.",
    ),
    (
        Attribute::Claims,
        "Add multifunctional or wellness-related claims for a higher application relevance score.",
    ),
];

pub fn advisory_for(attribute: Attribute) -> Option<&'static str> {
    ADVISORIES
        .iter()
        .find(|(advised, _)| *advised == attribute)
        .map(|(_, text)| *text)
}

/// One suggestion per unset scored attribute, in declaration order.
pub fn advisories(attributes: &AttributeSet) -> Vec<String> {
    Attribute::ALL
        .iter()
        .filter(|attribute| attribute.is_scored() && !attributes.get(**attribute))
        .filter_map(|attribute| advisory_for(*attribute))
        .map(str::to_string)
        .collect()
}

/// Informational notes from table-only composition signals.
pub fn composition_notes(attributes: &AttributeSet) -> Vec<String> {
    let mut notes = Vec::new();
    if !attributes.get(Attribute::NaturalOrigin) {
        notes.push(
            "Consider increasing natural or bio-based ingredients to improve the natural origin index."
                .to_string(),
        );
    }
    if attributes.get(Attribute::Petrochemical) {
        notes.push(
            "Reduce reliance on petrochemical derivatives like PEG or silicones.".to_string(),
        );
    }
    if !attributes.get(Attribute::HighPotencyActives) {
        notes.push("Consider using more high-efficiency actives (usage < 2%).".to_string());
    }
    notes
}
