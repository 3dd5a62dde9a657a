use serde::Serialize;

pub const INGREDIENT_COLUMNS: [&str; 5] =
    ["inci", "inci name", "ingredient", "ingredients", "ingredient list"];
pub const FUNCTION_COLUMNS: [&str; 5] =
    ["function", "functions", "claims", "claim", "function/claims"];
pub const USAGE_COLUMNS: [&str; 7] = [
    "wt %",
    "wt%",
    "w/w %",
    "usage %",
    "usage",
    "usage percent",
    "%",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    Text,
    Table,
}

/// Raw description of one formulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Evidence {
    Text(String),
    Table(Table),
}

impl Evidence {
    pub fn kind(&self) -> EvidenceKind {
        match self {
            Evidence::Text(_) => EvidenceKind::Text,
            Evidence::Table(_) => EvidenceKind::Table,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of the first header matching any alias after trimming and lower-casing.
    pub fn column_index(&self, aliases: &[&str]) -> Option<usize> {
        self.headers.iter().position(|header| {
            let normalized = header.trim().to_lowercase();
            aliases.iter().any(|alias| *alias == normalized)
        })
    }

    /// Cells of the matching column; rows too short for it are skipped.
    pub fn column(&self, aliases: &[&str]) -> Option<Vec<&str>> {
        let index = self.column_index(aliases)?;
        Some(
            self.rows
                .iter()
                .filter_map(|row| row.get(index).map(String::as_str))
                .collect(),
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec![" INCI ".to_string(), "Wt %".to_string()],
            vec![
                vec!["Aqua".to_string(), "70".to_string()],
                vec!["Glycerin".to_string()],
            ],
        )
    }

    #[test]
    fn column_lookup_normalizes_headers() {
        let table = sample();
        assert_eq!(table.column(&INGREDIENT_COLUMNS), Some(vec!["Aqua", "Glycerin"]));
        assert_eq!(table.column(&USAGE_COLUMNS), Some(vec!["70"]));
    }

    #[test]
    fn missing_column_is_none() {
        assert!(sample().column(&FUNCTION_COLUMNS).is_none());
    }
}
