//! Pipeline orchestration: PDF bytes in, categorised workbook out.
//!
//! [`process_document`] wires the injected capabilities through the pure
//! stages in strict left-to-right order — no stage starts before the prior
//! stage's full output exists, matching the reference's synchronous,
//! single-pass behaviour. [`process_text`] is the capability-free core
//! (extract → classify → split) for callers that already hold assembled
//! text, and [`export_workbook`] is the final guarded export step.

use crate::capability::{OcrEngine, PageRasterizer, WorkbookWriter};
use crate::config::ExtractionConfig;
use crate::error::MarksheetError;
use crate::output::{ExtractionOutput, RunStats};
use crate::pipeline::{assemble, classify, extract, preprocess, split};
use crate::record::ResultSet;
use std::time::Instant;
use tracing::{debug, info};

/// Run the full pipeline over a PDF document.
///
/// # Errors
///
/// Fails only for document-level anomalies: rasterisation/OCR/export
/// capability failures, no text extracted, no matching records, or an
/// empty export set. Per-record anomalies are absorbed and counted in
/// [`RunStats`].
pub fn process_document(
    pdf: &[u8],
    config: &ExtractionConfig,
    rasterizer: &dyn PageRasterizer,
    ocr: &dyn OcrEngine,
    writer: &dyn WorkbookWriter,
) -> Result<ExtractionOutput, MarksheetError> {
    let total_start = Instant::now();

    // ── Step 1: Rasterise pages ──────────────────────────────────────────
    let render_start = Instant::now();
    let pages = rasterizer
        .render_pages(pdf)
        .map_err(|e| MarksheetError::RasterizeFailed {
            detail: e.to_string(),
        })?;
    let render_duration_ms = render_start.elapsed().as_millis() as u64;
    info!(pages = pages.len(), ms = render_duration_ms, "rasterised PDF");

    // ── Step 2+3: Preprocess and recognise, page by page ─────────────────
    let ocr_start = Instant::now();
    let mut page_texts = Vec::with_capacity(pages.len());
    let mut span_count = 0;
    for (idx, page) in pages.iter().enumerate() {
        let prepared = preprocess::preprocess(page, config);
        let spans = ocr
            .recognize(&prepared)
            .map_err(|e| MarksheetError::OcrFailed {
                page: idx + 1,
                detail: e.to_string(),
            })?;
        span_count += spans.len();
        page_texts.push(assemble::assemble_page(&spans));
        // `prepared` and the source page buffer are released here; text is
        // all that flows downstream.
    }
    let ocr_duration_ms = ocr_start.elapsed().as_millis() as u64;
    debug!(spans = span_count, ms = ocr_duration_ms, "OCR complete");

    // ── Step 4: Assemble document text ───────────────────────────────────
    let text = assemble::assemble_document(&page_texts);
    if text.trim().is_empty() {
        return Err(MarksheetError::NoTextExtracted { pages: pages.len() });
    }

    // ── Step 5–7: Extract, classify, split ───────────────────────────────
    let raws = extract::extract(&text, config);
    if raws.is_empty() {
        return Err(MarksheetError::NoMatchingRecords {
            text_len: text.len(),
        });
    }
    let records_extracted = raws.len();

    let (classified, records_dropped) = classify::classify_all(&raws, config);
    let result = split::split(classified);
    let unknown_count = result.unknown.len();

    // ── Step 8: Export ───────────────────────────────────────────────────
    let workbook = export_workbook(&result, writer)?;

    let stats = RunStats {
        page_count: pages.len(),
        span_count,
        records_extracted,
        records_dropped,
        unknown_count,
        render_duration_ms,
        ocr_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
    };
    info!(
        records = records_extracted,
        dropped = records_dropped,
        unknown = unknown_count,
        ms = stats.total_duration_ms,
        "extraction complete"
    );

    Ok(ExtractionOutput {
        result,
        workbook,
        stats,
    })
}

/// Run the capability-free core over already-assembled document text.
///
/// Covers the extract → classify → split stages with the same terminal
/// failures as [`process_document`]; export is left to the caller (see
/// [`export_workbook`]).
pub fn process_text(
    text: &str,
    config: &ExtractionConfig,
) -> Result<ResultSet, MarksheetError> {
    if text.trim().is_empty() {
        return Err(MarksheetError::NoTextExtracted { pages: 0 });
    }
    let raws = extract::extract(text, config);
    if raws.is_empty() {
        return Err(MarksheetError::NoMatchingRecords {
            text_len: text.len(),
        });
    }
    let (classified, _dropped) = classify::classify_all(&raws, config);
    Ok(split::split(classified))
}

/// Write the result set through the workbook capability.
///
/// Empty categories are omitted from the artifact; if that leaves zero
/// sheets the export fails with [`MarksheetError::EmptyExportSet`] rather
/// than silently producing an empty workbook.
pub fn export_workbook(
    result: &ResultSet,
    writer: &dyn WorkbookWriter,
) -> Result<Vec<u8>, MarksheetError> {
    let tables = result.export_tables();
    if tables.is_empty() {
        return Err(MarksheetError::EmptyExportSet {
            classified: result.len(),
            unknown: result.unknown.len(),
        });
    }
    writer
        .write_workbook(&tables)
        .map_err(|e| MarksheetError::ExportFailed {
            detail: e.to_string(),
        })
}
