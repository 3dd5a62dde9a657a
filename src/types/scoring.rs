use super::attribute::Attribute;
use serde::Serialize;

pub type Points = u32;

pub const MAX_TOTAL: Points = 100;
pub const SUSTAINABLE_THRESHOLD: Points = 80;
pub const BETTER_CHOICE_THRESHOLD: Points = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    IngredientProfile,
    FormulationImpact,
    Packaging,
    ApplicationRelevance,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::IngredientProfile => "Ingredient Profile",
            Category::FormulationImpact => "Formulation Impact",
            Category::Packaging => "Packaging",
            Category::ApplicationRelevance => "Application Relevance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    #[serde(rename = "Sustainably Formulated")]
    SustainablyFormulated,
    #[serde(rename = "Better Choice")]
    BetterChoice,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Rating {
    pub fn from_total(total: Points) -> Self {
        if total >= SUSTAINABLE_THRESHOLD {
            Rating::SustainablyFormulated
        } else if total >= BETTER_CHOICE_THRESHOLD {
            Rating::BetterChoice
        } else {
            Rating::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::SustainablyFormulated => "Sustainably Formulated",
            Rating::BetterChoice => "Better Choice",
            Rating::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub achieved: Points,
    pub max: Points,
    /// Attributes of this category that earned no points.
    pub missing: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub categories: Vec<CategoryScore>,
    pub total: Points,
    pub max_total: Points,
    pub rating: Rating,
    pub advisories: Vec<String>,
}

impl ScoreBreakdown {
    #[allow(dead_code)]
    pub fn category(&self, category: Category) -> Option<&CategoryScore> {
        self.categories
            .iter()
            .find(|score| score.category == category)
    }
}
