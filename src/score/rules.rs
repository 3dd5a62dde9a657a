use crate::types::attribute::Attribute;
use crate::types::scoring::{Category, Points};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryRule {
    pub category: Category,
    pub max: Points,
    pub weights: &'static [(Attribute, Points)],
    /// Awarded regardless of attributes.
    pub bonus: Points,
}

// `waterless` scores under both Formulation Impact and Packaging.
pub const CATEGORY_RULES: [CategoryRule; 4] = [
    CategoryRule {
        category: Category::IngredientProfile,
        max: 30,
        weights: &[
            (Attribute::BioBased, 6),
            (Attribute::Biotech, 6),
            (Attribute::Upcycled, 6),
            (Attribute::Biodegradable, 6),
            (Attribute::NoPeg, 6),
        ],
        bonus: 0,
    },
    CategoryRule {
        category: Category::FormulationImpact,
        max: 25,
        weights: &[(Attribute::ColdProcess, 10), (Attribute::Waterless, 10)],
        bonus: 5,
    },
    CategoryRule {
        category: Category::Packaging,
        max: 20,
        weights: &[(Attribute::Waterless, 10), (Attribute::Refillable, 10)],
        bonus: 0,
    },
    CategoryRule {
        category: Category::ApplicationRelevance,
        max: 25,
        weights: &[
            (Attribute::Multifunctional, 5),
            (Attribute::Sensorial, 10),
            (Attribute::Claims, 10),
        ],
        bonus: 0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::MAX_TOTAL;

    #[test]
    fn category_weights_fill_each_maximum() {
        for rule in CATEGORY_RULES {
            let weights: Points = rule.weights.iter().map(|(_, points)| points).sum();
            assert_eq!(weights + rule.bonus, rule.max, "{:?}", rule.category);
        }
    }

    #[test]
    fn category_maxima_sum_to_total() {
        let total: Points = CATEGORY_RULES.iter().map(|rule| rule.max).sum();
        assert_eq!(total, MAX_TOTAL);
    }

    #[test]
    fn only_scored_attributes_carry_weight() {
        for rule in CATEGORY_RULES {
            for (attribute, _) in rule.weights {
                assert!(attribute.is_scored(), "{attribute} should be scored");
            }
        }
        for attribute in Attribute::SCORED {
            assert!(CATEGORY_RULES
                .iter()
                .any(|rule| rule.weights.iter().any(|(weighted, _)| *weighted == attribute)));
        }
    }
}
