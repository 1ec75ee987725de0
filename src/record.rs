//! Data model: OCR spans, raw and classified records, and export tables.
//!
//! The types here trace the pipeline's data flow: an [`TextSpan`] is what
//! the OCR engine hands back per page, a [`RawRecord`] is what the grammar
//! captures from the assembled text, a [`ClassifiedRecord`] adds the final
//! status, and a [`ResultSet`] is the stable partition handed to the
//! workbook writer as [`ExportTable`]s.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── OCR output ───────────────────────────────────────────────────────────

/// Bounding geometry of a recognised span, in page-pixel coordinates.
///
/// Carried through from the OCR engine but never consulted by the
/// extraction grammar, which works on assembled text only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One recognised text fragment from a page.
///
/// Span order within a page is whatever the OCR engine returned — reading
/// order is NOT guaranteed, and downstream code must not rely on it beyond
/// page order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    /// Recognised text. May contain collapsed whitespace, partial glyph
    /// misreads, and merged or split tokens.
    pub text: String,
    /// Engine-reported confidence in `[0, 1]`. Accepted but unused downstream.
    pub confidence: f32,
    /// Bounding geometry, if the engine reports one.
    pub bounds: Option<SpanBounds>,
}

impl TextSpan {
    /// Convenience constructor for a span without geometry.
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
            bounds: None,
        }
    }
}

// ── Extraction output ────────────────────────────────────────────────────

/// A record as captured by the extraction grammar, before classification.
///
/// All three fields are whitespace-trimmed at capture time. A raw record
/// with an empty `enrollment_id` or `name` never reaches the classifier;
/// it is dropped locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub enrollment_id: String,
    pub name: String,
    /// The unparsed mark-or-status field exactly as captured.
    pub raw_token: String,
}

// ── Classification output ────────────────────────────────────────────────

/// Final classification outcome for a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Pass,
    Fail,
    Absent,
    Detained,
    /// The mark-or-status token matched no classification rule. Unknown
    /// records are kept in the classified set but excluded from every
    /// export table.
    Unknown,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Pass => "Pass",
            Status::Fail => "Fail",
            Status::Absent => "Absent",
            Status::Detained => "Detained",
            Status::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// A fully classified student record.
///
/// Invariants upheld by the classifier:
/// * `mark.is_some()` if and only if `status` is `Pass` or `Fail`;
/// * `detained` is true if and only if `status` is `Detained`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub enrollment_id: String,
    pub name: String,
    /// Numeric mark, full decimal precision, no rounding.
    pub mark: Option<f64>,
    pub status: Status,
    pub detained: bool,
}

// ── Partitioning ─────────────────────────────────────────────────────────

/// Sheet names for the four export categories, in partition order.
pub const SHEET_NAMES: [&str; 4] = [
    "Passed Students",
    "Failed Students",
    "Absent Students",
    "Detained Students",
];

/// Column headers shared by every export table.
pub const COLUMNS: [&str; 5] = ["Enrollment No", "Name", "Marks", "Status", "Detained"];

/// The disjoint partition of classified records, each group preserving the
/// classifier's input order.
///
/// `unknown` is intentionally a first-class field: the reference silently
/// discarded Unknown records at export, and that behaviour is preserved
/// (no export table includes them), but callers can inspect or log the set
/// rather than losing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub passed: Vec<ClassifiedRecord>,
    pub failed: Vec<ClassifiedRecord>,
    pub absent: Vec<ClassifiedRecord>,
    pub detained: Vec<ClassifiedRecord>,
    pub unknown: Vec<ClassifiedRecord>,
}

impl ResultSet {
    /// Total records across the four exported partitions (excludes Unknown).
    pub fn exported_len(&self) -> usize {
        self.passed.len() + self.failed.len() + self.absent.len() + self.detained.len()
    }

    /// Total classified records including Unknown.
    pub fn len(&self) -> usize {
        self.exported_len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the named tables for the workbook writer, omitting empty ones.
    ///
    /// Returns an empty vector when every category is empty; the caller
    /// (the orchestrator) turns that into an `EmptyExportSet` failure
    /// rather than writing an empty artifact.
    pub fn export_tables(&self) -> Vec<ExportTable> {
        [
            (SHEET_NAMES[0], &self.passed),
            (SHEET_NAMES[1], &self.failed),
            (SHEET_NAMES[2], &self.absent),
            (SHEET_NAMES[3], &self.detained),
        ]
        .into_iter()
        .filter(|(_, records)| !records.is_empty())
        .map(|(name, records)| ExportTable {
            name: name.to_string(),
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: records.iter().map(ExportRow::from_record).collect(),
        })
        .collect()
    }
}

// ── Export shapes ────────────────────────────────────────────────────────

/// One row of an export table.
///
/// `mark` stays an `Option<f64>` so status-only rows render as an empty
/// cell rather than a zero, and numeric marks keep their decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub enrollment_id: String,
    pub name: String,
    pub mark: Option<f64>,
    pub status: String,
    pub detained: bool,
}

impl ExportRow {
    fn from_record(r: &ClassifiedRecord) -> Self {
        Self {
            enrollment_id: r.enrollment_id.clone(),
            name: r.name.clone(),
            mark: r.mark,
            status: r.status.to_string(),
            detained: r.detained,
        }
    }
}

/// A named table handed to the [`crate::capability::WorkbookWriter`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTable {
    /// Sheet name, e.g. "Passed Students".
    pub name: String,
    /// Column headers, one per cell of a row.
    pub columns: Vec<String>,
    pub rows: Vec<ExportRow>,
}
