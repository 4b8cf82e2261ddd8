//! Line-oriented CSV reading.
//!
//! Only the comma delimiter is recognised. A field is either a double-quoted
//! run (kept with its quotes) or a maximal run of non-comma characters, and
//! must be followed by optional whitespace and then a comma or the end of
//! the line. Empty cells produce no field at all, so a row with blanks comes
//! out shorter than its neighbours; the validator relies on that.
//!
//! Escaped quotes (`""`) and quoted fields spanning lines are not supported.

use tracing::trace;

use crate::state::data_model::{Row, Table};

/// Splits one line into fields. Returns `None` when the line holds no field
/// at all, e.g. an empty line or one made only of commas.
pub fn tokenize_line(line: &str) -> Option<Row> {
    let mut fields = Row::new();
    let mut pos = 0;

    while pos < line.len() {
        if line.as_bytes()[pos] == b',' {
            pos += 1;
            continue;
        }

        let end = quoted_end(line, pos).unwrap_or_else(|| unquoted_end(line, pos));
        fields.push(line[pos..end].to_string());
        pos = end;
    }

    (!fields.is_empty()).then_some(fields)
}

/// Splits `contents` into lines and tokenizes each non-empty one. Lines that
/// yield no field are skipped, so the result may be empty.
pub fn build_table(contents: &str) -> Table {
    let mut table = Table::new();

    for (line_no, line) in contents.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        match tokenize_line(line) {
            Some(row) => {
                trace!(line = line_no + 1, cells = row.len(), "row tokenized");
                table.push(row);
            }
            None => trace!(line = line_no + 1, "line has no fields, skipped"),
        }
    }

    table
}

// Shortest `"..."` starting at `start` that sits on a field boundary.
fn quoted_end(line: &str, start: usize) -> Option<usize> {
    if !line[start..].starts_with('"') {
        return None;
    }

    let body = start + 1;
    line[body..]
        .match_indices('"')
        .map(|(offset, _)| body + offset + 1)
        .find(|&end| at_field_boundary(&line[end..]))
}

fn unquoted_end(line: &str, start: usize) -> usize {
    line[start..]
        .find(',')
        .map(|offset| start + offset)
        .unwrap_or(line.len())
}

fn at_field_boundary(rest: &str) -> bool {
    let rest = rest.trim_start();
    rest.is_empty() || rest.starts_with(',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_run_needs_boundary_after_closing_quote() {
        assert_eq!(quoted_end(r#""a"x,b"#, 0), None);
        assert_eq!(quoted_end(r#""a"  ,b"#, 0), Some(3));
        assert_eq!(quoted_end(r#""a,"b",c"#, 0), Some(6));
    }

    #[test]
    fn unquoted_run_stops_at_comma() {
        assert_eq!(unquoted_end("abc,def", 0), 3);
        assert_eq!(unquoted_end("abc,def", 4), 7);
    }
}
