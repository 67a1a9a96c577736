use thiserror::Error;

/// Column name the uploaded table must contain.
pub const URL_COLUMN: &str = "URL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("файл должен содержать колонку с названием 'URL'")]
    MissingUrlColumn,
    #[error("файл пуст")]
    EmptyFile,
}

/// Extract URLs from a newline-delimited text block.
///
/// Lines are trimmed; anything not starting with `http` is discarded, so
/// blank lines, comments and stray labels fall out without an error.
pub fn parse_url_block(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("http"))
        .map(ToOwned::to_owned)
        .collect()
}

/// Extract URLs from CSV text with a header row.
///
/// The header must contain a column literally named `URL`; its values are
/// filtered with the same `http` prefix rule as [`parse_url_block`].
pub fn parse_url_csv(raw: &str) -> Result<Vec<String>, InputError> {
    let mut lines = raw.lines();
    let header = lines.next().ok_or(InputError::EmptyFile)?;
    let url_index = split_csv_line(header)
        .iter()
        .position(|name| name.trim() == URL_COLUMN)
        .ok_or(InputError::MissingUrlColumn)?;

    let urls = lines
        .filter_map(|line| {
            let fields = split_csv_line(line);
            fields.get(url_index).map(|value| value.trim().to_owned())
        })
        .filter(|value| value.starts_with("http"))
        .collect();
    Ok(urls)
}

/// Split one CSV line into fields, honoring double-quoted cells.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                // Doubled quote inside a quoted cell is a literal quote.
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}
