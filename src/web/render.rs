//! HTML rendering for the web front-end
//!
//! One shared table template serves all three categories: the handler
//! passes whichever row list it produced (possibly empty) and the other
//! categories simply do not appear. All cell values are HTML-escaped.

use crate::data::TableRow;

/// Renders the index page with the three query forms
pub fn index_page() -> String {
    page(
        "InvestIQ",
        r#"<h1>InvestIQ</h1>
<p>Financial market insights: bonds, forex, and stock quotes.</p>
<form method="post" action="/get-bonds">
  <label>Bond type
    <input type="text" name="bondType" placeholder="CB, SGB, GS, Tbill, MF, ETF">
  </label>
  <button type="submit">View bonds</button>
</form>
<form method="post" action="/get-forex">
  <button type="submit">View forex rates</button>
</form>
<form method="post" action="/get-stocks">
  <label>Stock symbols
    <input type="text" name="stockSymbols" placeholder="AAPL,MSFT">
  </label>
  <button type="submit">View stock quotes</button>
</form>"#,
    )
}

/// Renders the display page for one category's rows
///
/// An empty row list renders as a no-data notice instead of a bare
/// header row, which is what a degraded fetch surfaces to the user.
pub fn display_page<R: TableRow>(title: &str, rows: &[R]) -> String {
    let body = if rows.is_empty() {
        format!(
            "<h1>{}</h1>\n<p>No data available.</p>\n{}",
            escape(title),
            BACK_LINK
        )
    } else {
        format!(
            "<h1>{}</h1>\n{}\n{}",
            escape(title),
            table_html(rows),
            BACK_LINK
        )
    };
    page(title, &body)
}

/// Link back to the index form page
const BACK_LINK: &str = r#"<p><a href="/">Back</a></p>"#;

/// Renders the shared table template for a row list
fn table_html<R: TableRow>(rows: &[R]) -> String {
    let mut html = String::from("<table border=\"1\">\n  <tr>");
    for header in R::HEADERS {
        html.push_str(&format!("<th>{}</th>", escape(header)));
    }
    html.push_str("</tr>\n");

    for row in rows {
        html.push_str("  <tr>");
        for cell in row.cells() {
            html.push_str(&format!("<td>{}</td>", escape(&cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>");
    html
}

/// Wraps body markup in the page skeleton
fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

/// Escapes text for safe use in HTML element content and attributes
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BondRow;

    fn bond(issuer: &str) -> BondRow {
        BondRow {
            issuer_name: issuer.to_string(),
            name: "US1".to_string(),
            yield_value: "5%".to_string(),
            date: "2030-01-01".to_string(),
        }
    }

    #[test]
    fn test_index_page_has_all_three_forms() {
        let html = index_page();
        assert!(html.contains("action=\"/get-bonds\""));
        assert!(html.contains("action=\"/get-forex\""));
        assert!(html.contains("action=\"/get-stocks\""));
        assert!(html.contains("name=\"bondType\""));
        assert!(html.contains("name=\"stockSymbols\""));
    }

    #[test]
    fn test_display_page_renders_headers_and_cells() {
        let html = display_page("Bonds", &[bond("Acme")]);
        assert!(html.contains("<th>Issuer</th>"));
        assert!(html.contains("<th>Expiry</th>"));
        assert!(html.contains("<td>Acme</td>"));
        assert!(html.contains("<td>2030-01-01</td>"));
    }

    #[test]
    fn test_display_page_empty_rows_shows_notice() {
        let html = display_page::<BondRow>("Bonds", &[]);
        assert!(html.contains("No data available."));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_cells_are_escaped() {
        let html = display_page("Bonds", &[bond("<script>alert(1)</script>")]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn test_escape_covers_all_special_characters() {
        assert_eq!(escape(r#"a&b<c>d"e'f"#), "a&amp;b&lt;c&gt;d&quot;e&#39;f");
    }
}
