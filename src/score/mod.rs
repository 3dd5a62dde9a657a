pub mod advisory;
pub mod rules;

use crate::types::attribute::AttributeSet;
use crate::types::scoring::{CategoryScore, Points, Rating, ScoreBreakdown};
use rules::{CategoryRule, CATEGORY_RULES};

/// Scores a confirmed attribute set. Missing attributes count as unset.
pub fn compose(attributes: &AttributeSet) -> ScoreBreakdown {
    let categories: Vec<CategoryScore> = CATEGORY_RULES
        .iter()
        .map(|rule| score_category(rule, attributes))
        .collect();

    let total: Points = categories.iter().map(|score| score.achieved).sum();
    let max_total: Points = categories.iter().map(|score| score.max).sum();
    let rating = Rating::from_total(total);

    ScoreBreakdown {
        categories,
        total,
        max_total,
        rating,
        advisories: advisory::advisories(attributes),
    }
}

fn score_category(rule: &CategoryRule, attributes: &AttributeSet) -> CategoryScore {
    let mut achieved = rule.bonus;
    let mut missing = Vec::new();
    for (attribute, points) in rule.weights {
        if attributes.get(*attribute) {
            achieved += points;
        } else {
            missing.push(*attribute);
        }
    }

    CategoryScore {
        category: rule.category,
        achieved: achieved.min(rule.max),
        max: rule.max,
        missing,
    }
}
