//! Best-effort PDF text extraction for uploaded resumes.

use tracing::warn;

/// Returns the document text with whitespace runs collapsed.
/// On failure returns an `Error reading PDF: ...` string in place of content.
pub fn extract_text(document: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(document) {
        Ok(text) => collapse_whitespace(&text),
        Err(e) => {
            warn!("PDF extraction failed: {e}");
            format!("Error reading PDF: {e}")
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  Jane Doe\n\nRust   Engineer\t\n"),
            "Jane Doe Rust Engineer"
        );
    }

    #[test]
    fn test_invalid_pdf_yields_error_string() {
        let text = extract_text(b"definitely not a pdf");
        assert!(text.starts_with("Error reading PDF:"));
    }
}
