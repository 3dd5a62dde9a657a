/// Parses a usage cell such as `" 1.5 %"`; anything else is `None`.
pub fn parse_percent(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn count_below(cells: &[&str], threshold: f64) -> usize {
    cells
        .iter()
        .filter_map(|cell| parse_percent(cell))
        .filter(|value| *value < threshold)
        .count()
}
