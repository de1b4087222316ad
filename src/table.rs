//! Plain-text table rendering for the CLI front-end
//!
//! Renders a row list as a fixed-width table with a header line and a
//! dashed separator, sized to the widest cell in each column.

use crate::data::TableRow;

/// Gap between columns
const COLUMN_GAP: &str = "  ";

/// Renders rows as a left-aligned fixed-width table
///
/// The header set is fixed per row type via [`TableRow::HEADERS`]; every
/// cell is guaranteed present by the normalizers, so no width fallback is
/// needed here.
pub fn render_table<R: TableRow>(rows: &[R]) -> String {
    let headers = R::HEADERS;
    let cells: Vec<Vec<String>> = rows.iter().map(|row| row.cells()).collect();

    // Column width = max of header and all cells in that column
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    push_line(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    push_line(&mut out, widths.iter().map(|w| "-".repeat(*w)), &widths);
    for row in cells {
        push_line(&mut out, row.into_iter(), &widths);
    }

    out
}

/// Appends one padded table line, trimming trailing padding
fn push_line(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ForexRow;

    fn row(pair: &str, rate: &str, timestamp: &str) -> ForexRow {
        ForexRow {
            pair: pair.to_string(),
            rate: rate.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn test_render_includes_headers_and_separator() {
        let table = render_table(&[row("EURUSD", "1.08", "N/A")]);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Pair"));
        assert!(lines[0].contains("Rate"));
        assert!(lines[1].starts_with("----"));
        assert!(lines[2].starts_with("EURUSD"));
    }

    #[test]
    fn test_columns_sized_to_widest_cell() {
        let table = render_table(&[
            row("EURUSD", "1.08", "N/A"),
            row("A", "1234567.89", "N/A"),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        // Rate column must be wide enough for the long value, so the
        // timestamp header aligns across every line
        let ts_col = lines[0].find("Timestamp").unwrap();
        assert_eq!(&lines[2][ts_col..ts_col + 3], "N/A");
        assert_eq!(&lines[3][ts_col..ts_col + 3], "N/A");
    }

    #[test]
    fn test_render_empty_rows_is_header_only() {
        let table = render_table::<ForexRow>(&[]);
        assert_eq!(table.lines().count(), 2);
    }
}
