//! Error types for the marksheet-ocr library.
//!
//! Only document-level failures surface as errors. The spec distinguishes
//! three terminal cases a caller must be able to tell apart:
//!
//! * [`MarksheetError::NoTextExtracted`] — OCR produced nothing usable;
//! * [`MarksheetError::NoMatchingRecords`] — text existed but the record
//!   grammar matched zero records;
//! * [`MarksheetError::EmptyExportSet`] — records existed but every export
//!   partition came out empty (e.g. all tokens classified as Unknown).
//!
//! Per-record anomalies are absorbed, never propagated: a raw record with a
//! missing enrollment id or name is dropped (logged at debug), and a mark
//! token matching no classification rule becomes status `Unknown` and is
//! simply excluded from export. One bad row must never abort a run.

use thiserror::Error;

/// All fatal errors returned by the marksheet-ocr library.
#[derive(Debug, Error)]
pub enum MarksheetError {
    // ── Document-level extraction failures ───────────────────────────────
    /// OCR produced no usable text from any page.
    #[error(
        "No text extracted from any of the {pages} page(s).\n\
         Check that the PDF contains scanned content and the OCR engine is working."
    )]
    NoTextExtracted { pages: usize },

    /// Text was extracted but the record grammar matched nothing.
    #[error(
        "No student records matched in {text_len} bytes of extracted text.\n\
         Check the enrollment prefix configured for this institution."
    )]
    NoMatchingRecords { text_len: usize },

    /// Splitting yielded zero non-empty export categories.
    #[error(
        "Nothing to export: all {classified} classified record(s) fell outside \
         every category ({unknown} with status Unknown)"
    )]
    EmptyExportSet { classified: usize, unknown: usize },

    // ── Capability failures ──────────────────────────────────────────────
    /// The injected rasteriser failed to render the PDF.
    #[error("PDF rasterisation failed: {detail}")]
    RasterizeFailed { detail: String },

    /// The injected OCR engine failed on a specific page.
    #[error("OCR failed on page {page}: {detail}")]
    OcrFailed { page: usize, detail: String },

    /// The injected workbook writer failed to produce the artifact.
    #[error("Workbook export failed: {detail}")]
    ExportFailed { detail: String },

    // ── Config errors ────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_text_display() {
        let e = MarksheetError::NoTextExtracted { pages: 3 };
        assert!(e.to_string().contains("3 page(s)"));
    }

    #[test]
    fn no_records_display() {
        let e = MarksheetError::NoMatchingRecords { text_len: 512 };
        let msg = e.to_string();
        assert!(msg.contains("512 bytes"), "got: {msg}");
        assert!(msg.contains("enrollment prefix"));
    }

    #[test]
    fn empty_export_display() {
        let e = MarksheetError::EmptyExportSet {
            classified: 4,
            unknown: 4,
        };
        let msg = e.to_string();
        assert!(msg.contains("4 classified"));
        assert!(msg.contains("4 with status Unknown"));
    }

    #[test]
    fn ocr_failed_display() {
        let e = MarksheetError::OcrFailed {
            page: 2,
            detail: "engine crashed".into(),
        };
        assert!(e.to_string().contains("page 2"));
        assert!(e.to_string().contains("engine crashed"));
    }

    #[test]
    fn variants_are_distinguishable() {
        // The three terminal document-level cases must stay distinct types,
        // not one message-only variant.
        let cases = [
            MarksheetError::NoTextExtracted { pages: 1 },
            MarksheetError::NoMatchingRecords { text_len: 0 },
            MarksheetError::EmptyExportSet {
                classified: 0,
                unknown: 0,
            },
        ];
        let msgs: Vec<String> = cases.iter().map(|e| e.to_string()).collect();
        assert_ne!(msgs[0], msgs[1]);
        assert_ne!(msgs[1], msgs[2]);
    }
}
