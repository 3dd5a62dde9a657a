pub mod rules;
pub mod usage;

use crate::types::attribute::{Attribute, AttributeSet};
use crate::types::evidence::{
    Evidence, Table, FUNCTION_COLUMNS, INGREDIENT_COLUMNS, USAGE_COLUMNS,
};
use rules::{AttributeRule, Polarity, Rule, Scope, RULES};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detection {
    pub attributes: AttributeSet,
    /// Terms that decided each attribute: matched keywords, banned terms found,
    /// or a usage summary.
    pub matches: BTreeMap<Attribute, Vec<String>>,
}

/// Lower-cased text per scope. `None` means the backing column is absent.
struct Haystacks<'a> {
    anywhere: Option<String>,
    ingredients: Option<String>,
    functions: Option<String>,
    usage: Option<Vec<&'a str>>,
    table: Option<&'a Table>,
}

impl<'a> Haystacks<'a> {
    fn from_evidence(evidence: &'a Evidence) -> Self {
        match evidence {
            Evidence::Text(text) => {
                let normalized = text.to_lowercase();
                Self {
                    anywhere: Some(normalized.clone()),
                    ingredients: Some(normalized.clone()),
                    functions: Some(normalized),
                    usage: None,
                    table: None,
                }
            }
            Evidence::Table(table) => Self::from_table(table),
        }
    }

    fn from_table(table: &'a Table) -> Self {
        // Headers name columns, they are not evidence; see `flagged_column`.
        let anywhere = table.cells().collect::<Vec<_>>().join("\n").to_lowercase();
        let joined = |aliases: &[&str]| {
            table
                .column(aliases)
                .map(|cells| cells.join("\n").to_lowercase())
        };

        Self {
            anywhere: Some(anywhere),
            ingredients: joined(&INGREDIENT_COLUMNS[..]),
            functions: joined(&FUNCTION_COLUMNS[..]),
            usage: table.column(&USAGE_COLUMNS),
            table: Some(table),
        }
    }

    fn scoped(&self, scope: Scope) -> Option<&str> {
        match scope {
            Scope::Anywhere => self.anywhere.as_deref(),
            Scope::Ingredients => self.ingredients.as_deref(),
            Scope::Functions => self.functions.as_deref(),
        }
    }
}

/// Maps evidence to the full attribute set. Never fails: missing columns and
/// malformed cells only turn attributes off.
pub fn detect(evidence: &Evidence) -> Detection {
    let haystacks = Haystacks::from_evidence(evidence);
    let mut detection = Detection::default();

    for rule in &RULES {
        let (value, terms) = evaluate(rule, &haystacks);
        tracing::debug!(attribute = %rule.attribute, value, ?terms, "rule evaluated");
        detection.attributes.set(rule.attribute, value);
        if !terms.is_empty() {
            detection.matches.insert(rule.attribute, terms);
        }
    }

    detection
}

fn evaluate(rule: &AttributeRule, haystacks: &Haystacks<'_>) -> (bool, Vec<String>) {
    if rule.table_only && haystacks.table.is_none() {
        return (false, Vec::new());
    }

    match rule.rule {
        Rule::Keywords {
            polarity,
            scope,
            keywords,
        } => match haystacks.scoped(scope) {
            Some(text) => {
                let mut found = matched_keywords(text, keywords);
                let value = match polarity {
                    Polarity::Include => {
                        if let Some(column) = flagged_column(rule, haystacks.table) {
                            found.push(format!("column '{column}'"));
                        }
                        !found.is_empty()
                    }
                    Polarity::Exclude => found.is_empty(),
                };
                (value, found)
            }
            None => (false, Vec::new()),
        },
        Rule::LowUsageCount {
            below_pct,
            more_than,
        } => match &haystacks.usage {
            Some(cells) => {
                let count = usage::count_below(cells, below_pct);
                let summary = vec![format!("{count} entries below {below_pct}%")];
                (count > more_than, summary)
            }
            None => (false, Vec::new()),
        },
    }
}

/// Header of a flag column holding at least one affirmative cell.
fn flagged_column<'t>(rule: &AttributeRule, table: Option<&'t Table>) -> Option<&'t str> {
    let table = table?;
    let index = table.column_index(rule.flag_columns)?;
    let affirmed = table
        .column(rule.flag_columns)?
        .into_iter()
        .any(is_affirmative);
    affirmed.then(|| table.headers[index].as_str())
}

fn is_affirmative(cell: &str) -> bool {
    matches!(
        cell.trim().to_lowercase().as_str(),
        "yes" | "y" | "true" | "1" | "x" | "✓"
    )
}

/// Keywords present in `text`, in table order. `text` must already be lower-case.
pub fn matched_keywords(text: &str, keywords: &[&str]) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Evidence {
        Evidence::Table(Table::new(
            headers.iter().map(|header| header.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        ))
    }

    fn enabled(detection: &Detection) -> Vec<Attribute> {
        detection.attributes.enabled().collect()
    }

    #[test]
    fn text_scenario_sets_expected_attributes() {
        let evidence =
            Evidence::Text("Botanical serum, made by Cold Process, recyclable jar, hydrating".into());
        let detection = detect(&evidence);

        assert_eq!(
            enabled(&detection),
            vec![
                Attribute::BioBased,
                Attribute::NoPeg,
                Attribute::ColdProcess,
                Attribute::Refillable,
                Attribute::Claims,
            ]
        );
        assert_eq!(
            detection.matches.get(&Attribute::BioBased),
            Some(&vec!["botanical".to_string()])
        );
    }

    #[test]
    fn no_peg_turns_off_when_banned_term_present() {
        let detection = detect(&Evidence::Text("Contains PEG-40 hydrogenated castor oil".into()));
        assert!(!detection.attributes.get(Attribute::NoPeg));
        assert_eq!(
            detection.matches.get(&Attribute::NoPeg),
            Some(&vec!["peg".to_string()])
        );
    }

    #[test]
    fn empty_text_only_sets_exclusion_attributes() {
        let detection = detect(&Evidence::Text(String::new()));
        assert_eq!(enabled(&detection), vec![Attribute::NoPeg]);
        assert_eq!(detection.attributes.iter().count(), Attribute::ALL.len());
    }

    #[test]
    fn text_evidence_never_sets_composition_attributes() {
        let detection = detect(&Evidence::Text("sodium hyaluronate, natural, dimethicone".into()));
        assert!(!detection.attributes.get(Attribute::NaturalOrigin));
        assert!(!detection.attributes.get(Attribute::Petrochemical));
        assert!(!detection.attributes.get(Attribute::HighPotencyActives));
    }

    #[test]
    fn table_scenario_sets_noi_and_high_potency_actives() {
        let evidence = table(
            &["INCI", "Function", "Wt %"],
            &[
                &["Aqua", "Solvent", "80"],
                &["Sodium Hyaluronate", "Hydrating", "0.5%"],
                &["Niacinamide", "Brightening", "1.5 %"],
                &["Panthenol", "Soothing", "1"],
                &["Tocopherol", "Antioxidant", "0.2"],
                &["Allantoin", "Soothing", "0.3"],
                &["Bisabolol", "Soothing", "0.1"],
                &["Ceramide NP", "Barrier", "0.05"],
            ],
        );
        let detection = detect(&evidence);

        assert!(detection.attributes.get(Attribute::NaturalOrigin));
        assert!(detection.attributes.get(Attribute::HighPotencyActives));
        assert!(detection.attributes.get(Attribute::Claims));
        assert!(detection.attributes.get(Attribute::NoPeg));
        assert!(!detection.attributes.get(Attribute::Petrochemical));
        assert_eq!(
            detection.matches.get(&Attribute::HighPotencyActives),
            Some(&vec!["7 entries below 2%".to_string()])
        );
    }

    #[test]
    fn low_usage_requires_more_than_five_entries() {
        let rows: &[&[&str]] = &[
            &["A", "1"],
            &["B", "1"],
            &["C", "1"],
            &["D", "1"],
            &["E", "1"],
            &["F", "n/a"],
        ];
        let detection = detect(&table(&["INCI", "Wt %"], rows));
        assert!(!detection.attributes.get(Attribute::HighPotencyActives));
    }

    #[test]
    fn missing_columns_turn_dependent_attributes_off() {
        let evidence = table(&["Notes"], &[&["hydrating, multi-use, botanical"]]);
        let detection = detect(&evidence);

        assert!(detection.attributes.get(Attribute::BioBased));
        assert!(!detection.attributes.get(Attribute::Claims));
        assert!(!detection.attributes.get(Attribute::Multifunctional));
        assert!(!detection.attributes.get(Attribute::NoPeg));
        assert!(!detection.attributes.get(Attribute::HighPotencyActives));
    }

    #[test]
    fn header_names_alone_are_not_evidence() {
        let evidence = table(
            &["INCI", "Refillable", "Biodegradable", "Cold"],
            &[&["Aqua", "no", "no", "no"]],
        );
        let detection = detect(&evidence);

        assert!(!detection.attributes.get(Attribute::Refillable));
        assert!(!detection.attributes.get(Attribute::Biodegradable));
        assert!(!detection.attributes.get(Attribute::ColdProcess));
    }

    #[test]
    fn affirmative_cold_column_marks_cold_process() {
        let evidence = table(
            &["INCI", "Refillable", "Cold"],
            &[&["Aqua", "no", ""], &["Glycerin", "no", "Yes"]],
        );
        let detection = detect(&evidence);

        assert!(detection.attributes.get(Attribute::ColdProcess));
        assert_eq!(
            detection.matches.get(&Attribute::ColdProcess),
            Some(&vec!["column 'Cold'".to_string()])
        );
        assert!(!detection.attributes.get(Attribute::Refillable));
    }

    #[test]
    fn cell_keywords_still_count_anywhere_in_table() {
        let evidence = table(&["INCI", "Notes"], &[&["Aqua", "Cold process, refillable pump"]]);
        let detection = detect(&evidence);
        assert!(detection.attributes.get(Attribute::ColdProcess));
        assert!(detection.attributes.get(Attribute::Refillable));
    }

    #[test]
    fn plain_fast_claim_counts() {
        let evidence = table(&["INCI", "Function"], &[&["Squalane", "Fast"]]);
        assert!(detect(&evidence).attributes.get(Attribute::Claims));
    }

    #[test]
    fn keywords_do_not_span_cells() {
        let evidence = table(&["INCI", "Notes"], &[&["Aqua", "cold"], &["Glycerin", "process"]]);
        assert!(!detect(&evidence).attributes.get(Attribute::ColdProcess));
    }

    #[test]
    fn petrochemical_detection_is_case_insensitive() {
        let evidence = table(&["INCI"], &[&["PEG-100 Stearate"], &["Dimethicone"]]);
        let detection = detect(&evidence);
        assert!(detection.attributes.get(Attribute::Petrochemical));
        assert!(!detection.attributes.get(Attribute::NoPeg));
    }

    #[test]
    fn detection_is_idempotent() {
        let evidence = Evidence::Text("upcycled coffee, anhydrous balm, refillable tin".into());
        assert_eq!(detect(&evidence), detect(&evidence));
    }
}
