const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

/// Render an aligned plain-text table.
///
/// Columns shrink (longest first) to fit `max_width`; cut cells end in `…`.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    if let Some(max_width) = max_width {
        fit_widths(&mut widths, max_width);
    }

    let header_line = render_line(headers.iter().copied(), &widths);
    let divider = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let cells = (0..widths.len()).map(|index| row.get(index).map_or("-", String::as_str));
        lines.push(render_line(cells, &widths));
    }
    lines.join("\n")
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter())
        .map(|(cell, width)| pad(&truncate(cell, *width), *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

fn fit_widths(widths: &mut [usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let budget = max_width.saturating_sub(separators);

    while widths.iter().sum::<usize>() > budget {
        let Some((index, widest)) = widths
            .iter()
            .copied()
            .enumerate()
            .max_by_key(|(_, width)| *width)
        else {
            return;
        };
        if widest <= MIN_COLUMN_WIDTH {
            return;
        }
        widths[index] = widest - 1;
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_aligned_columns() {
        let rows = vec![
            vec!["Jane".to_string(), "1990-04-12".to_string()],
            vec!["Bartholomew".to_string(), "1985-01-01".to_string()],
        ];
        let out = render_table(&["name", "dob"], &rows, None);
        assert_eq!(
            out,
            "name         dob\n-----------  ----------\nJane         1990-04-12\nBartholomew  1985-01-01"
        );
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rows = vec![vec!["only".to_string()]];
        let out = render_table(&["a", "b"], &rows, None);
        assert!(out.ends_with("only  -"));
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let rows = vec![vec!["x".repeat(50), "short".to_string()]];
        let out = render_table(&["long", "s"], &rows, Some(30));
        for line in out.lines() {
            assert!(line.chars().count() <= 30, "line too wide: {line}");
        }
        assert!(out.contains('…'));
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
