use checker_core::RunReport;

const HEADERS: [&str; 5] = [
    "URL",
    "Индексирован",
    "Покрытие",
    "Последний краул",
    "Канонический URL",
];

/// Render the report as a fixed-width terminal table, one row per checked
/// URL in the order checked.
pub fn render_table(report: &RunReport) -> String {
    let mut rows: Vec<[String; 5]> = Vec::with_capacity(report.len());
    for (url, result) in report.iter() {
        rows.push([
            url.to_string(),
            result.status_text(),
            result.coverage_state.clone(),
            result.last_crawl_date.clone(),
            result.canonical_url.clone(),
        ]);
    }

    let mut widths: [usize; 5] = HEADERS.map(display_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(display_width(cell));
        }
    }

    let mut buffer = String::new();
    push_row(&mut buffer, &HEADERS.map(str::to_string), &widths);
    let total: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    buffer.push_str(&"-".repeat(total));
    buffer.push('\n');
    for row in &rows {
        push_row(&mut buffer, row, &widths);
    }
    buffer
}

fn push_row(buffer: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            buffer.push_str(" | ");
        }
        buffer.push_str(cell);
        for _ in display_width(cell)..*width {
            buffer.push(' ');
        }
    }
    // Trailing padding on the last column is pointless; trim it.
    while buffer.ends_with(' ') {
        buffer.pop();
    }
    buffer.push('\n');
}

/// Column width in characters. Not a full Unicode width calculation, but
/// consistent between header and cells, which is what alignment needs.
fn display_width(text: &str) -> usize {
    text.chars().count()
}
