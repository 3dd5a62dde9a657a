use crate::types::attribute::Attribute;
use serde::Serialize;

/// Bumped whenever a keyword list or threshold changes.
pub const RULESET_VERSION: &str = "2024.3";

pub const LOW_USAGE_PERCENT: f64 = 2.0;
pub const LOW_USAGE_MIN_EXCLUSIVE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// True when any keyword is present.
    Include,
    /// True when no keyword is present.
    Exclude,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Anywhere,
    Ingredients,
    Functions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    Keywords {
        polarity: Polarity,
        scope: Scope,
        keywords: &'static [&'static str],
    },
    LowUsageCount {
        below_pct: f64,
        more_than: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AttributeRule {
    pub attribute: Attribute,
    pub rule: Rule,
    /// Only evaluated for table evidence; text evidence reads `false`.
    pub table_only: bool,
    /// Table columns whose header names the attribute itself. An affirmative
    /// cell in one of them switches an include rule on.
    pub flag_columns: &'static [&'static str],
}

const fn include(
    attribute: Attribute,
    scope: Scope,
    keywords: &'static [&'static str],
) -> AttributeRule {
    AttributeRule {
        attribute,
        rule: Rule::Keywords {
            polarity: Polarity::Include,
            scope,
            keywords,
        },
        table_only: false,
        flag_columns: &[],
    }
}

const fn table_only(rule: AttributeRule) -> AttributeRule {
    AttributeRule {
        table_only: true,
        ..rule
    }
}

const fn flagged(rule: AttributeRule, columns: &'static [&'static str]) -> AttributeRule {
    AttributeRule {
        flag_columns: columns,
        ..rule
    }
}

pub const RULES: [AttributeRule; 14] = [
    include(
        Attribute::BioBased,
        Scope::Anywhere,
        &[
            "bio-based",
            "biobased",
            "botanical",
            "plant-derived",
            "plant derived",
            "plant-based",
            "plant based",
            "naturally derived",
            "natural origin",
        ],
    ),
    include(
        Attribute::Biotech,
        Scope::Anywhere,
        &["biotech", "ferment", "bioferment", "bio-fermented", "enzymatic"],
    ),
    include(
        Attribute::Upcycled,
        Scope::Anywhere,
        &["upcycled", "upcycling", "repurposed", "by-product"],
    ),
    include(
        Attribute::Biodegradable,
        Scope::Anywhere,
        &["biodegradable", "readily degradable", "compostable"],
    ),
    AttributeRule {
        attribute: Attribute::NoPeg,
        rule: Rule::Keywords {
            polarity: Polarity::Exclude,
            scope: Scope::Ingredients,
            keywords: &["peg", "polyethylene glycol"],
        },
        table_only: false,
        flag_columns: &[],
    },
    flagged(
        include(
            Attribute::ColdProcess,
            Scope::Anywhere,
            &[
                "cold process",
                "cold-process",
                "cold processed",
                "cold mix",
                "cold-mix",
                "no heat",
            ],
        ),
        &["cold", "cold process", "cold-process"],
    ),
    include(
        Attribute::Waterless,
        Scope::Anywhere,
        &[
            "waterless",
            "anhydrous",
            "water-free",
            "water free",
            "solid format",
        ],
    ),
    include(
        Attribute::Refillable,
        Scope::Anywhere,
        &["refill", "recyclable", "reusable"],
    ),
    include(
        Attribute::Multifunctional,
        Scope::Functions,
        &[
            "multifunction",
            "multi-function",
            "multi-use",
            "all-in-one",
            "2-in-1",
        ],
    ),
    include(
        Attribute::Sensorial,
        Scope::Functions,
        &["sensorial", "sensory", "texture", "aroma"],
    ),
    include(
        Attribute::Claims,
        Scope::Functions,
        &[
            "brightening",
            "hydrating",
            "fast",
            "barrier",
            "soothing",
            "firming",
        ],
    ),
    table_only(include(
        Attribute::NaturalOrigin,
        Scope::Ingredients,
        &["hyaluronate", "natural"],
    )),
    table_only(include(
        Attribute::Petrochemical,
        Scope::Ingredients,
        &[
            "peg",
            "dimethicone",
            "paraffin",
            "petrolatum",
            "mineral oil",
        ],
    )),
    AttributeRule {
        attribute: Attribute::HighPotencyActives,
        rule: Rule::LowUsageCount {
            below_pct: LOW_USAGE_PERCENT,
            more_than: LOW_USAGE_MIN_EXCLUSIVE,
        },
        table_only: true,
        flag_columns: &[],
    },
];

#[allow(dead_code)]
pub fn rule_for(attribute: Attribute) -> Option<&'static AttributeRule> {
    RULES.iter().find(|rule| rule.attribute == attribute)
}
