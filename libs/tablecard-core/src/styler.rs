//! Pure HTML rendering for grids, cloze blanks and card decoration.
//!
//! Every function here is deterministic: same input, byte-identical
//! output. Cell text is inserted verbatim; callers escape beforehand if
//! their content needs it.

use crate::grid::TableGrid;

/// Replace every character except tabs and newlines with a space and wrap
/// the result in a whitespace-preserving span, so the blank keeps the
/// shape of the hidden text.
pub fn masked(text: &str) -> String {
    let blanked: String = text
        .chars()
        .map(|ch| if ch == '\t' || ch == '\n' { ch } else { ' ' })
        .collect();
    format!("<span class=\"masked\" style=\"white-space: pre;\">{blanked}</span>")
}

/// Wrap revealed answer text in a highlight span for the back side.
pub fn unmasked(text: &str) -> String {
    format!("<span class=\"unmasked\">{text}</span>")
}

/// Render a grid as an HTML table fragment.
///
/// Every cell carries `table_body`. The (0,0) cell gets `table_corner`
/// exclusively; the rest of row 0 gets `table_header_top` and the rest of
/// column 0 gets `table_header_left`. An empty grid renders as an empty
/// string.
pub fn render_table(grid: &TableGrid) -> String {
    if grid.is_empty() {
        return String::new();
    }

    let mut html = vec!["<table>".to_string(), "  <tbody>".to_string()];
    for (i, row) in grid.rows().iter().enumerate() {
        html.push("    <tr>".to_string());
        for (j, cell) in row.iter().enumerate() {
            let mut classes = vec!["table_body"];
            if i == 0 && j == 0 {
                classes.push("table_corner");
            } else if i == 0 {
                classes.push("table_header_top");
            } else if j == 0 {
                classes.push("table_header_left");
            }
            html.push(format!(
                "      <td class=\"{}\">{}</td>",
                classes.join(" "),
                cell
            ));
        }
        html.push("    </tr>".to_string());
    }
    html.push("  </tbody>".to_string());
    html.push("</table>".to_string());
    html.join("\n")
}

/// Prepend the card header line to rendered content.
pub fn add_card_header(header: &str, content: &str) -> String {
    format!("<span class=\"card_header\">{header}</span>\n{content}")
}

/// Append a hint block below the content. No hints, no block.
pub fn add_hints(hints: &[String], content: &str) -> String {
    if hints.is_empty() {
        return content.to_string();
    }
    let mut lines = vec![content.to_string(), "<div class=\"hints\">".to_string()];
    for hint in hints {
        lines.push(format!("  <span class=\"hint\">{hint}</span>"));
    }
    lines.push("</div>".to_string());
    lines.join("\n")
}
