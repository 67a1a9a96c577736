use crate::RunReport;

/// Fixed header row of the exported report.
pub const CSV_HEADER: &str = "URL,Индексирован,Покрытие,Последний краул,Канонический URL";

/// Byte-order mark prepended so spreadsheet tools detect UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

/// Render the report as CSV text: BOM, header row, one row per checked URL
/// in the order checked.
pub fn render_csv(report: &RunReport) -> String {
    let mut buffer = String::new();
    buffer.push_str(UTF8_BOM);
    buffer.push_str(CSV_HEADER);
    buffer.push('\n');
    for (url, result) in report.iter() {
        let row = [
            url,
            &result.status_text(),
            &result.coverage_state,
            &result.last_crawl_date,
            &result.canonical_url,
        ];
        let encoded: Vec<String> = row.iter().map(|field| escape_field(field)).collect();
        buffer.push_str(&encoded.join(","));
        buffer.push('\n');
    }
    buffer
}

/// Quote a field when it contains a comma, quote or newline.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
