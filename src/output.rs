//! Run output: the workbook artifact, the classified partition, and stats.

use crate::record::ResultSet;
use serde::{Deserialize, Serialize};

/// Everything a completed pipeline run produces.
#[derive(Debug, Clone)]
pub struct ExtractionOutput {
    /// The classified partition, Unknown set included.
    pub result: ResultSet,
    /// Workbook artifact bytes from the injected writer.
    pub workbook: Vec<u8>,
    /// Counters and timings for the run.
    pub stats: RunStats,
}

/// Statistics for one pipeline run.
///
/// Serialisable so callers can log a run summary as structured data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Pages rendered by the rasteriser.
    pub page_count: usize,
    /// Text spans recognised across all pages.
    pub span_count: usize,
    /// Raw records captured by the extraction grammar.
    pub records_extracted: usize,
    /// Raw records dropped for a missing enrollment id or name.
    pub records_dropped: usize,
    /// Classified records with status Unknown (excluded from export).
    pub unknown_count: usize,
    /// Time spent in the rasteriser.
    pub render_duration_ms: u64,
    /// Time spent in preprocessing plus OCR, across all pages.
    pub ocr_duration_ms: u64,
    /// Wall-clock time for the whole run.
    pub total_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_serialise_as_structured_log() {
        let stats = RunStats {
            page_count: 2,
            span_count: 17,
            records_extracted: 4,
            records_dropped: 1,
            unknown_count: 0,
            render_duration_ms: 120,
            ocr_duration_ms: 900,
            total_duration_ms: 1040,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"records_extracted\":4"));
        assert!(json.contains("\"page_count\":2"));
    }
}
