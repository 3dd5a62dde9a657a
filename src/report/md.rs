use crate::detect::rules::{Polarity, Rule, Scope, RULES};
use crate::detect::Detection;
use crate::score::rules::CATEGORY_RULES;
use crate::types::attribute::Attribute;
use crate::types::report::Assessment;

pub const REPORT_TITLE: &str = "# Sustainable Formulation Index Report";

pub fn to_markdown(assessments: &[Assessment], project: Option<&str>) -> String {
    let mut output = String::new();
    output.push_str(REPORT_TITLE);
    output.push_str("\n\n");
    if let Some(project) = project {
        output.push_str(&format!("Project: {project}\n\n"));
    }

    for assessment in assessments {
        push_assessment(&mut output, assessment);
    }

    output
}

fn push_assessment(output: &mut String, assessment: &Assessment) {
    let breakdown = &assessment.breakdown;
    output.push_str(&format!("## {}\n\n", assessment.source));
    output.push_str(&format!(
        "SFI score: {} / {}\nRating: {}\n",
        breakdown.total,
        breakdown.max_total,
        breakdown.rating.label()
    ));
    output.push_str(&format!(
        "Evidence: {:?}, ruleset {}, sha256 {}\n",
        assessment.evidence_kind, assessment.ruleset_version, assessment.source_sha256
    ));
    if let Some(reviewer) = &assessment.reviewer {
        output.push_str(&format!("Reviewed by: {reviewer}\n"));
    }
    output.push('\n');

    output.push_str("### Category Scores\n\n");
    output.push_str("| Category | Score | Missing |\n|---|---|---|\n");
    for score in &breakdown.categories {
        output.push_str(&format!(
            "| {} | {} / {} | {} |\n",
            score.category.label(),
            score.achieved,
            score.max,
            join_labels(&score.missing)
        ));
    }
    output.push('\n');

    output.push_str("### Advisory Feedback\n\n");
    push_list(output, &breakdown.advisories);

    if !assessment.composition_notes.is_empty() {
        output.push_str("### Composition Notes\n\n");
        push_list(output, &assessment.composition_notes);
    }

    if !assessment.overrides.is_empty() || !assessment.ignored_overrides.is_empty() {
        output.push_str("### Reviewer Overrides\n\n");
        for record in &assessment.overrides {
            output.push_str(&format!(
                "- {}: detected {}, confirmed {}\n",
                record.attribute, record.detected, record.confirmed
            ));
        }
        for name in &assessment.ignored_overrides {
            output.push_str(&format!("- {name}: ignored (unknown attribute)\n"));
        }
        output.push('\n');
    }
}

fn push_list(output: &mut String, items: &[String]) {
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
    output.push('\n');
}

fn join_labels(attributes: &[Attribute]) -> String {
    if attributes.is_empty() {
        return "-".to_string();
    }
    attributes
        .iter()
        .map(|attribute| attribute.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn detection_to_markdown(source: &str, detection: &Detection) -> String {
    let mut output = format!("# Detected Attributes: {source}\n\n");
    output.push_str("| Attribute | Detected | Evidence |\n|---|---|---|\n");
    for (attribute, value) in detection.attributes.iter() {
        let evidence = detection
            .matches
            .get(&attribute)
            .map(|terms| terms.join(", "))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!("| {attribute} | {value} | {evidence} |\n"));
    }
    output
}

pub fn rules_to_markdown() -> String {
    let mut output = String::from("# Detection Rules\n\n");
    output.push_str("| Attribute | Rule | Scope | Terms |\n|---|---|---|---|\n");
    for rule in &RULES {
        let (kind, scope, terms) = match rule.rule {
            Rule::Keywords {
                polarity,
                scope,
                keywords,
            } => (
                match polarity {
                    Polarity::Include => "any present",
                    Polarity::Exclude => "none present",
                },
                match scope {
                    Scope::Anywhere => "anywhere",
                    Scope::Ingredients => "ingredients",
                    Scope::Functions => "functions",
                },
                if rule.flag_columns.is_empty() {
                    keywords.join(", ")
                } else {
                    format!(
                        "{}; flag columns: {}",
                        keywords.join(", "),
                        rule.flag_columns.join(", ")
                    )
                },
            ),
            Rule::LowUsageCount {
                below_pct,
                more_than,
            } => (
                "usage count",
                "usage",
                format!("more than {more_than} entries below {below_pct}%"),
            ),
        };
        let table_only = if rule.table_only { " (table only)" } else { "" };
        output.push_str(&format!(
            "| {} | {kind}{table_only} | {scope} | {terms} |\n",
            rule.attribute
        ));
    }

    output.push_str("\n# Category Weights\n\n");
    output.push_str("| Category | Max | Weights | Bonus |\n|---|---|---|---|\n");
    for rule in &CATEGORY_RULES {
        let weights = rule
            .weights
            .iter()
            .map(|(attribute, points)| format!("{attribute} {points}"))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            rule.category.label(),
            rule.max,
            weights,
            rule.bonus
        ));
    }
    output
}
