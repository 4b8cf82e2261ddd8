/// A single captured cell. Enclosing double quotes are kept verbatim.
pub type Field = String;
pub type Row = Vec<Field>;
pub type Table = Vec<Row>;

/// Widest row in the table.
pub fn column_count(table: &[Row]) -> usize {
    table.iter().map(Vec::len).max().unwrap_or(0)
}

/// Strips one pair of enclosing double quotes for display.
pub fn display_field(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(field)
}

/// Column captions for rendering and chart selection. Uses the header row
/// when one is given, falling back to 1-based column numbers.
pub fn column_labels(header: Option<&Row>, width: usize) -> Vec<String> {
    (0..width)
        .map(|idx| {
            header
                .and_then(|row| row.get(idx))
                .map(|field| display_field(field).trim().to_string())
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| format!("{}", idx + 1))
        })
        .collect()
}
