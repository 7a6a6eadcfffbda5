use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = " | ";
const DIVIDER_JOIN: &str = "-+-";

/// Renders rows as a left-justified text table with a divider under the header.
///
/// Column widths are measured in terminal cells, so wide characters line up.
/// Missing cells render empty; cells past the last header are dropped.
pub fn render_table<H, C>(headers: &[H], rows: &[Vec<C>]) -> String
where
    H: AsRef<str>,
    C: AsRef<str>,
{
    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.as_ref().width());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_cells(headers.iter().map(|h| h.as_ref()), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(DIVIDER_JOIN),
    );
    for row in rows {
        let cells = (0..widths.len()).map(|i| row.get(i).map(|c| c.as_ref()).unwrap_or(""));
        lines.push(join_cells(cells, &widths));
    }
    lines.join("\n")
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| pad_right(cell, *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
