//! Record extraction: prefix-anchored scan of the assembled document text.
//!
//! ## Why not split on lines?
//!
//! OCR merges and splits physical lines unpredictably, so the only reliable
//! record boundary in the blob is the enrollment-number prefix. The scanner
//! looks for the next prefix occurrence, then a small hand-written parser
//! consumes forward through the three-field grammar:
//!
//! ```text
//! record     = enrollment SP name aside? SP mark
//! enrollment = prefix alnum*
//! name       = word (SP word)*          word = letters only
//! aside      = "(" … ")"                discarded
//! mark       = numeral | "A" | "None" | "Absent" | "abs" | "D"
//! ```
//!
//! Matching is leftmost-first and non-overlapping. The name is non-greedy
//! at word granularity: the first whole word that parses as a mark token
//! ends the name, which is what keeps `D` from swallowing the `Doe` in
//! "Jane Doe A". A prefix occurrence whose tail fails the grammar yields no
//! record at all — never a partial one — and scanning resumes one character
//! later so garbage between genuine records is skipped, not fatal.

use crate::config::ExtractionConfig;
use crate::record::RawRecord;
use tracing::{debug, trace};

/// Extract raw student records from assembled document text.
///
/// Deterministic: identical text always yields the identical record
/// sequence, in document order.
pub fn extract(text: &str, config: &ExtractionConfig) -> Vec<RawRecord> {
    let prefix = config.enrollment_prefix.as_str();
    let mut records = Vec::new();
    let mut pos = 0;

    while let Some(off) = text[pos..].find(prefix) {
        let anchor = pos + off;
        match parse_record(text, anchor, prefix.len()) {
            Some((record, end)) => {
                trace!(
                    enrollment = %record.enrollment_id,
                    token = %record.raw_token,
                    "matched record"
                );
                records.push(record);
                pos = end;
            }
            None => {
                // Malformed tail: emit nothing and retry just past this
                // anchor, in case a genuine record starts inside the noise.
                pos = anchor + next_char_len(text, anchor);
            }
        }
    }

    debug!(count = records.len(), "extraction finished");
    records
}

/// Try to parse one record starting at the prefix occurrence at `anchor`.
///
/// Returns the record and the byte offset just past its mark token.
fn parse_record(text: &str, anchor: usize, prefix_len: usize) -> Option<(RawRecord, usize)> {
    // Enrollment token: prefix plus the following alphanumeric run.
    let mut cur = anchor + prefix_len;
    while text.as_bytes().get(cur).is_some_and(u8::is_ascii_alphanumeric) {
        cur += 1;
    }
    let enrollment = &text[anchor..cur];

    // The name must be whitespace-separated from the enrollment token.
    let name_start = skip_whitespace(text, cur);
    if name_start == cur {
        return None;
    }

    let mut name_end = name_start;
    let mut have_name = false;
    let mut cursor = name_start;

    loop {
        if text[cursor..].starts_with('(') {
            // Parenthesized aside: allowed only after the name, discarded,
            // and the very next word must be the mark.
            if !have_name {
                return None;
            }
            let close = text[cursor..].find(')')?;
            let after_aside = skip_whitespace(text, cursor + close + 1);
            if after_aside == cursor + close + 1 {
                return None;
            }
            let (word, end) = next_word(text, after_aside)?;
            return is_mark_token(word)
                .then(|| (make_record(enrollment, &text[name_start..name_end], word), end));
        }

        let (word, end) = next_word(text, cursor)?;
        if have_name && is_mark_token(word) {
            return Some((make_record(enrollment, &text[name_start..name_end], word), end));
        }
        if !is_name_word(word) {
            return None;
        }
        have_name = true;
        name_end = end;
        cursor = skip_whitespace(text, end);
    }
}

fn make_record(enrollment: &str, name: &str, token: &str) -> RawRecord {
    RawRecord {
        enrollment_id: enrollment.trim().to_string(),
        name: name.trim().to_string(),
        raw_token: token.trim().to_string(),
    }
}

// ── Token predicates ─────────────────────────────────────────────────────

/// A name word consists of letters only.
fn is_name_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// A mark token is a non-negative numeral or a status literal,
/// case-insensitive, matched against the whole word.
fn is_mark_token(word: &str) -> bool {
    is_numeral(word) || is_status_literal(word)
}

fn is_status_literal(word: &str) -> bool {
    matches!(
        word.to_ascii_lowercase().as_str(),
        "a" | "none" | "absent" | "abs" | "d"
    )
}

/// Integer or decimal numeral: digits, optionally one dot with digits after.
fn is_numeral(word: &str) -> bool {
    let (int_part, frac_part) = match word.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (word, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.is_none_or(all_digits)
}

// ── Cursor helpers ───────────────────────────────────────────────────────

fn skip_whitespace(text: &str, mut pos: usize) -> usize {
    while let Some(c) = text[pos..].chars().next() {
        if !c.is_whitespace() {
            break;
        }
        pos += c.len_utf8();
    }
    pos
}

/// Maximal run of non-whitespace characters at `pos`, stopping before '('
/// so an aside glued to the last name word is still recognised.
fn next_word(text: &str, pos: usize) -> Option<(&str, usize)> {
    let mut end = pos;
    for c in text[pos..].chars() {
        if c.is_whitespace() || c == '(' {
            break;
        }
        end += c.len_utf8();
    }
    (end > pos).then(|| (&text[pos..end], end))
}

fn next_char_len(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(1, char::len_utf8)
}
