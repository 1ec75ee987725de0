//! Capability seams: the three external collaborators the pipeline consumes.
//!
//! The reference implementation held a single OCR engine instance in global
//! state and reused it across calls. Here every collaborator is an
//! explicitly constructed, explicitly passed trait object whose lifetime is
//! scoped by the caller — a pipeline run borrows the capabilities, it never
//! owns or hides them. This keeps the core testable with in-process fakes
//! and keeps vendor backends (pdfium, tesseract, a spreadsheet library)
//! out of this crate entirely.

use crate::record::{ExportTable, TextSpan};
use image::DynamicImage;

/// Boxed error for capability implementations.
///
/// Backends have their own error types; the orchestrator only needs a
/// displayable detail string to wrap into the run-level error.
pub type CapabilityError = Box<dyn std::error::Error + Send + Sync>;

/// Renders a PDF into one raster image per page, in page order.
pub trait PageRasterizer {
    /// Render every page of `pdf` to an image.
    ///
    /// The returned vector's order defines page order for the rest of the
    /// pipeline; the text assembler relies on it.
    fn render_pages(&self, pdf: &[u8]) -> Result<Vec<DynamicImage>, CapabilityError>;
}

/// Recognises text spans in a raster image.
pub trait OcrEngine {
    /// Recognise text in `image`.
    ///
    /// Spans may come back in arbitrary order — reading order is not part
    /// of this contract. Confidence and geometry are accepted and carried
    /// but the extraction grammar never depends on them.
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<TextSpan>, CapabilityError>;
}

/// Writes named record tables into a multi-sheet workbook artifact.
pub trait WorkbookWriter {
    /// Produce workbook bytes with one sheet per table.
    ///
    /// The orchestrator guarantees `tables` is non-empty and every table
    /// has at least one row; empty categories were already omitted.
    fn write_workbook(&self, tables: &[ExportTable]) -> Result<Vec<u8>, CapabilityError>;
}
