//! # marksheet-ocr
//!
//! Extract categorised student mark records from scanned PDF mark-sheets.
//!
//! ## Why this crate?
//!
//! University mark-sheets arrive as low-resolution scans. Raw OCR output on
//! them is noisy — merged tokens, collapsed whitespace, misread glyphs — and
//! the physical line structure of the table rarely survives recognition.
//! Instead of trusting lines, this crate anchors each student record on the
//! enrollment-number prefix and parses forward with a small hand-written
//! grammar that tolerates garbage between genuine records. Every record is
//! then classified (Pass / Fail / Absent / Detained) with deterministic
//! precedence rules and partitioned into named tables for a spreadsheet
//! workbook.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF bytes
//!  │
//!  ├─ 1. Rasterise  one image per page (injected PageRasterizer)
//!  ├─ 2. Preprocess grayscale → contrast → median 3×3 → sharpen
//!  ├─ 3. Recognise  image → text spans (injected OcrEngine)
//!  ├─ 4. Assemble   spans → page text → document text, page order kept
//!  ├─ 5. Extract    prefix-anchored grammar → RawRecord tuples
//!  ├─ 6. Classify   raw token → Pass / Fail / Absent / Detained / Unknown
//!  ├─ 7. Split      stable partition into four export tables
//!  └─ 8. Export     named tables → workbook bytes (injected WorkbookWriter)
//! ```
//!
//! The rasteriser, OCR engine, and workbook writer are capability traits
//! ([`PageRasterizer`], [`OcrEngine`], [`WorkbookWriter`]) supplied by the
//! caller, never ambient global state. Everything in between is pure,
//! synchronous, and deterministic.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marksheet_ocr::{process_document, ExtractionConfig};
//! # use marksheet_ocr::capability::{PageRasterizer, OcrEngine, WorkbookWriter};
//!
//! # fn run(rasterizer: impl PageRasterizer, ocr: impl OcrEngine,
//! #        writer: impl WorkbookWriter) -> Result<(), Box<dyn std::error::Error>> {
//! let pdf = std::fs::read("marksheet.pdf")?;
//! let config = ExtractionConfig::default();
//! let output = process_document(&pdf, &config, &rasterizer, &ocr, &writer)?;
//! std::fs::write("student-marks.xlsx", &output.workbook)?;
//! eprintln!("{} passed, {} failed",
//!     output.result.passed.len(),
//!     output.result.failed.len());
//! # Ok(())
//! # }
//! ```
//!
//! For text that is already assembled (tests, alternative OCR front-ends),
//! [`process_text`] runs the extract → classify → split core on its own.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod capability;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod record;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use capability::{OcrEngine, PageRasterizer, WorkbookWriter};
pub use config::{ExtractionConfig, ExtractionConfigBuilder};
pub use error::MarksheetError;
pub use output::{ExtractionOutput, RunStats};
pub use process::{export_workbook, process_document, process_text};
pub use record::{
    ClassifiedRecord, ExportTable, RawRecord, ResultSet, SpanBounds, Status, TextSpan,
};
