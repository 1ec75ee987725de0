//! Classification: layered status rules over the raw mark-or-status token.
//!
//! Rule precedence, first match wins, case-insensitive:
//!
//! 1. absence literal (`a`, `absent`, `none`, `abs`) → Absent, no mark;
//! 2. `d` → Detained, no mark, detained flag set;
//! 3. valid non-negative numeral → mark parsed at full precision, then
//!    Pass when mark ≥ threshold (inclusive), Fail below it;
//! 4. anything else → Unknown, no mark.
//!
//! A raw record missing its enrollment id or name after trimming is a local
//! anomaly: it is dropped here, logged at debug, and never surfaced — the
//! spec-distinct case from Unknown, which is a valid record whose token
//! simply matched no rule.

use crate::config::ExtractionConfig;
use crate::record::{ClassifiedRecord, RawRecord, Status};
use tracing::debug;

/// Classify one raw record, or drop it if malformed.
///
/// Returns `None` only for the missing-id/missing-name case; every token,
/// however garbled, classifies to some status (Unknown at worst).
pub fn classify(raw: &RawRecord, config: &ExtractionConfig) -> Option<ClassifiedRecord> {
    let enrollment_id = raw.enrollment_id.trim();
    let name = raw.name.trim();
    if enrollment_id.is_empty() || name.is_empty() {
        debug!(token = %raw.raw_token, "dropping record with empty id or name");
        return None;
    }

    let (status, mark) = classify_token(raw.raw_token.trim(), config.pass_threshold);
    Some(ClassifiedRecord {
        enrollment_id: enrollment_id.to_string(),
        name: name.to_string(),
        mark,
        status,
        detained: status == Status::Detained,
    })
}

/// Classify every raw record, absorbing drops; returns the survivors and
/// the number dropped.
pub fn classify_all(
    raws: &[RawRecord],
    config: &ExtractionConfig,
) -> (Vec<ClassifiedRecord>, usize) {
    let mut classified = Vec::with_capacity(raws.len());
    let mut dropped = 0;
    for raw in raws {
        match classify(raw, config) {
            Some(record) => classified.push(record),
            None => dropped += 1,
        }
    }
    (classified, dropped)
}

fn classify_token(token: &str, threshold: f64) -> (Status, Option<f64>) {
    let lowered = token.to_ascii_lowercase();
    match lowered.as_str() {
        "a" | "absent" | "none" | "abs" => (Status::Absent, None),
        "d" => (Status::Detained, None),
        _ => match parse_numeral(&lowered) {
            Some(mark) if mark >= threshold => (Status::Pass, Some(mark)),
            Some(mark) => (Status::Fail, Some(mark)),
            None => (Status::Unknown, None),
        },
    }
}

/// Parse a non-negative integer or decimal numeral.
///
/// Stricter than `f64::from_str`: no sign, no exponent, no `inf`/`nan`,
/// no leading or trailing dot — the same shape the extraction grammar
/// accepts, applied independently so the classifier stands alone.
fn parse_numeral(token: &str) -> Option<f64> {
    let (int_part, frac_part) = match token.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (token, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.is_none_or(all_digits) {
        return None;
    }
    token.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> ExtractionConfig {
        ExtractionConfig::default()
    }

    fn raw(token: &str) -> RawRecord {
        RawRecord {
            enrollment_id: "0801CS021".into(),
            name: "John Smith".into(),
            raw_token: token.into(),
        }
    }

    #[test]
    fn numeral_at_or_above_threshold_passes() {
        for token in ["22", "22.0", "25", "99.75"] {
            let r = classify(&raw(token), &cfg()).unwrap();
            assert_eq!(r.status, Status::Pass, "token {token:?}");
            assert!(r.mark.is_some());
            assert!(!r.detained);
        }
    }

    #[test]
    fn numeral_below_threshold_fails() {
        for token in ["0", "18", "21.99"] {
            let r = classify(&raw(token), &cfg()).unwrap();
            assert_eq!(r.status, Status::Fail, "token {token:?}");
        }
    }

    #[test]
    fn boundary_mark_is_a_pass_not_a_fail() {
        let r = classify(&raw("22"), &cfg()).unwrap();
        assert_eq!(r.status, Status::Pass);
        assert_eq!(r.mark, Some(22.0));
    }

    #[test]
    fn marks_keep_full_decimal_precision() {
        let r = classify(&raw("21.75"), &cfg()).unwrap();
        assert_eq!(r.mark, Some(21.75));
        assert_eq!(r.status, Status::Fail);
    }

    #[test]
    fn absence_literals_classify_absent_in_any_case() {
        for token in ["A", "a", "absent", "ABSENT", "None", "none", "ABS", "abs"] {
            let r = classify(&raw(token), &cfg()).unwrap();
            assert_eq!(r.status, Status::Absent, "token {token:?}");
            assert_eq!(r.mark, None);
            assert!(!r.detained);
        }
    }

    #[test]
    fn detained_literal_sets_the_flag() {
        for token in ["D", "d"] {
            let r = classify(&raw(token), &cfg()).unwrap();
            assert_eq!(r.status, Status::Detained);
            assert!(r.detained);
            assert_eq!(r.mark, None);
        }
    }

    #[test]
    fn unclassifiable_tokens_become_unknown_not_errors() {
        for token in ["??", "x9", "-5", "1e3", "inf", "nan", "25."] {
            let r = classify(&raw(token), &cfg()).unwrap();
            assert_eq!(r.status, Status::Unknown, "token {token:?}");
            assert_eq!(r.mark, None);
            assert!(!r.detained);
        }
    }

    #[test]
    fn mark_present_iff_pass_or_fail() {
        for token in ["25", "18", "A", "D", "??"] {
            let r = classify(&raw(token), &cfg()).unwrap();
            let numeric = matches!(r.status, Status::Pass | Status::Fail);
            assert_eq!(r.mark.is_some(), numeric, "token {token:?}");
        }
    }

    #[test]
    fn empty_id_or_name_is_dropped() {
        let no_name = RawRecord {
            enrollment_id: "0801CS021".into(),
            name: "   ".into(),
            raw_token: "25".into(),
        };
        assert!(classify(&no_name, &cfg()).is_none());

        let no_id = RawRecord {
            enrollment_id: "".into(),
            name: "John Smith".into(),
            raw_token: "25".into(),
        };
        assert!(classify(&no_id, &cfg()).is_none());
    }

    #[test]
    fn classify_all_counts_drops() {
        let raws = vec![
            raw("25"),
            RawRecord {
                enrollment_id: " ".into(),
                name: "Ghost".into(),
                raw_token: "25".into(),
            },
            raw("A"),
        ];
        let (classified, dropped) = classify_all(&raws, &cfg());
        assert_eq!(classified.len(), 2);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn custom_threshold_moves_the_boundary() {
        let config = ExtractionConfig::builder()
            .pass_threshold(40.0)
            .build()
            .unwrap();
        assert_eq!(
            classify(&raw("39.9"), &config).unwrap().status,
            Status::Fail
        );
        assert_eq!(classify(&raw("40"), &config).unwrap().status, Status::Pass);
    }
}
