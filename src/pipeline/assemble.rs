//! Text assembly: OCR spans → page text → one document-level blob.
//!
//! The OCR engine makes no ordering promise within a page, so this stage
//! makes none either: spans are joined in whatever order they arrived,
//! separated by single spaces. The only order this crate guarantees — and
//! the only one the extraction grammar needs — is page order, preserved by
//! joining page texts with a newline. The grammar downstream is anchored on
//! the enrollment prefix precisely so that it survives arbitrary span order
//! and merged or split physical lines.

use crate::record::TextSpan;

/// Join one page's spans into a single line of text.
///
/// Empty and whitespace-only spans are skipped so they cannot produce runs
/// of separator spaces.
pub fn assemble_page(spans: &[TextSpan]) -> String {
    spans
        .iter()
        .map(|s| s.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join per-page texts into the document blob, preserving page order.
pub fn assemble_document(pages: &[String]) -> String {
    pages.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_joined_with_single_spaces() {
        let spans = vec![
            TextSpan::new("0801CS021", 0.98),
            TextSpan::new("John Smith", 0.91),
            TextSpan::new("25", 0.99),
        ];
        assert_eq!(assemble_page(&spans), "0801CS021 John Smith 25");
    }

    #[test]
    fn blank_spans_are_dropped() {
        let spans = vec![
            TextSpan::new("0801CS021", 0.9),
            TextSpan::new("   ", 0.1),
            TextSpan::new("", 0.0),
            TextSpan::new("Jane", 0.8),
        ];
        assert_eq!(assemble_page(&spans), "0801CS021 Jane");
    }

    #[test]
    fn span_whitespace_is_trimmed_not_collapsed() {
        // Internal whitespace inside a span is OCR output and kept verbatim.
        let spans = vec![TextSpan::new("  John  Smith ", 0.9)];
        assert_eq!(assemble_page(&spans), "John  Smith");
    }

    #[test]
    fn pages_joined_with_newline_in_order() {
        let pages = vec!["page one".to_string(), "page two".to_string()];
        assert_eq!(assemble_document(&pages), "page one\npage two");
    }

    #[test]
    fn empty_page_list_yields_empty_document() {
        assert_eq!(assemble_document(&[]), "");
    }

    #[test]
    fn confidence_does_not_affect_assembly() {
        let low = vec![TextSpan::new("abc", 0.01)];
        let high = vec![TextSpan::new("abc", 0.99)];
        assert_eq!(assemble_page(&low), assemble_page(&high));
    }
}
