#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table for string rows.
///
/// Widths count characters, not bytes, so Hebrew cells line up.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(&header_line));

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).map_or("-", String::as_str);
                    let truncated = truncate_text(value, *width);
                    let numeric = looks_numeric(&truncated);
                    let padded = format_cell(&truncated, *width, numeric);
                    if options.color {
                        colorize_status(&truncated, padded)
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_COLUMN_WIDTH: usize = 6;

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = " ".repeat(width.saturating_sub(display_width(value)));
    if numeric {
        format!("{pad}{value}")
    } else {
        format!("{value}{pad}")
    }
}

/// Wrap an already padded cell in a color code keyed on its plain value.
fn colorize_status(value: &str, padded: String) -> String {
    let code = match value.trim() {
        "open" | "פתוח להגשה" => Some("32"),
        "closing_soon" | "נסגר בקרוב" => Some("33"),
        "closed" | "סגור" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_entity_table, truncate_text};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["id", "status", "title"];
        let rows = vec![
            vec!["1".to_string(), "open".to_string(), "short".to_string()],
            vec![
                "200".to_string(),
                "closing_soon".to_string(),
                "a much longer title".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("status"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }

    #[test]
    fn hebrew_cells_align_by_characters() {
        let headers = ["title", "id"];
        let rows = vec![
            vec!["ריהוט".to_string(), "1".to_string()],
            vec!["abcde".to_string(), "2".to_string()],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths[2], widths[3]);
        assert_eq!(widths[0], widths[2]);
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["id", "title"];
        let rows = vec![vec!["1".to_string(), "x".repeat(80)]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };

        let table = render_entity_table(&headers, &rows, options);
        let row = table.lines().nth(2).unwrap();
        assert_eq!(row.chars().count(), 40);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn truncation_marks_cut_text() {
        assert_eq!(truncate_text("מכרז לריהוט", 5), "מכרז…");
        assert_eq!(truncate_text("short", 10), "short");
    }

    #[test]
    fn colored_status_keeps_padding_inside_escape() {
        let headers = ["status"];
        let rows = vec![vec!["open".to_string()]];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_entity_table(&headers, &rows, options);
        assert!(table.contains("\u{1b}[32mopen  \u{1b}[0m"));
    }
}
