// CSV export of a result list, and the matching reader.
//
// Format: a `slogan,score` header, then one `"<text>",<score>` row per
// result joined with `\n`. Text is always quoted with embedded quotes
// doubled; scores are printed with one decimal. Slogans never contain line
// breaks (whitespace is collapsed during generation), so the reader works
// line by line.

use thiserror::Error;

use crate::generate::Candidate;

pub const EXPORT_HEADER: &str = "slogan,score";

#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
    #[error("export is missing the `slogan,score` header")]
    MissingHeader,
    #[error("line {line}: unterminated quoted slogan")]
    UnterminatedQuote { line: usize },
    #[error("line {line}: invalid score {value:?}")]
    BadScore { line: usize, value: String },
}

/// Render `results` as CSV. `None` when there is nothing to export.
pub fn export_csv(results: &[Candidate]) -> Option<String> {
    if results.is_empty() {
        return None;
    }
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(EXPORT_HEADER.to_string());
    for c in results {
        lines.push(format!("\"{}\",{:.1}", c.text.replace('"', "\"\""), c.score));
    }
    Some(lines.join("\n"))
}

/// Read back CSV produced by `export_csv`. Blank lines are skipped; an
/// unquoted slogan is taken up to the last comma.
pub fn parse_export(csv: &str) -> Result<Vec<Candidate>, ExportError> {
    let mut lines = csv.lines().enumerate();
    match lines.next() {
        Some((_, header)) if header.trim() == EXPORT_HEADER => {}
        _ => return Err(ExportError::MissingHeader),
    }

    let mut out = Vec::new();
    for (idx, raw) in lines {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let (text, rest) = split_slogan(raw, line)?;
        let value = rest.trim();
        let score = value.parse::<f64>().map_err(|_| ExportError::BadScore {
            line,
            value: value.to_string(),
        })?;
        out.push(Candidate { text, score });
    }
    Ok(out)
}

/// Split one row into the unescaped slogan and the text after its
/// separating comma.
fn split_slogan(row: &str, line: usize) -> Result<(String, &str), ExportError> {
    let Some(quoted) = row.strip_prefix('"') else {
        return Ok(match row.rsplit_once(',') {
            Some((text, score)) => (text.to_string(), score),
            None => (row.to_string(), ""),
        });
    };

    let mut text = String::new();
    let mut chars = quoted.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '"' {
            text.push(c);
            continue;
        }
        if let Some(&(_, '"')) = chars.peek() {
            text.push('"');
            chars.next();
            continue;
        }
        let rest = &quoted[i + 1..];
        let rest = rest.strip_prefix(',').unwrap_or(rest);
        return Ok((text, rest));
    }
    Err(ExportError::UnterminatedQuote { line })
}
