//! Table splitting: stable partition of classified records by status.
//!
//! Every non-Unknown record lands in exactly one of the four export
//! categories, each preserving the classifier's output order. Unknown
//! records go to the `unknown` field of the [`ResultSet`] — excluded from
//! every export table, but kept so a caller can inspect what fell through.

use crate::record::{ClassifiedRecord, ResultSet, Status};
use tracing::debug;

/// Partition classified records into the export categories.
pub fn split(records: Vec<ClassifiedRecord>) -> ResultSet {
    let mut set = ResultSet::default();
    for record in records {
        match record.status {
            Status::Pass => set.passed.push(record),
            Status::Fail => set.failed.push(record),
            Status::Absent => set.absent.push(record),
            Status::Detained => set.detained.push(record),
            Status::Unknown => set.unknown.push(record),
        }
    }
    debug!(
        passed = set.passed.len(),
        failed = set.failed.len(),
        absent = set.absent.len(),
        detained = set.detained.len(),
        unknown = set.unknown.len(),
        "partitioned records"
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, status: Status) -> ClassifiedRecord {
        ClassifiedRecord {
            enrollment_id: id.into(),
            name: format!("Student {id}"),
            mark: matches!(status, Status::Pass | Status::Fail).then_some(30.0),
            status,
            detained: status == Status::Detained,
        }
    }

    #[test]
    fn partition_is_a_disjoint_cover() {
        let records = vec![
            rec("01", Status::Pass),
            rec("02", Status::Absent),
            rec("03", Status::Fail),
            rec("04", Status::Detained),
            rec("05", Status::Pass),
            rec("06", Status::Unknown),
        ];
        let set = split(records.clone());

        assert_eq!(set.len(), records.len());
        assert_eq!(set.exported_len(), 5);

        // Every record appears exactly once across all partitions.
        let mut seen: Vec<&str> = [
            &set.passed,
            &set.failed,
            &set.absent,
            &set.detained,
            &set.unknown,
        ]
        .iter()
        .flat_map(|group| group.iter().map(|r| r.enrollment_id.as_str()))
        .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["01", "02", "03", "04", "05", "06"]);
    }

    #[test]
    fn groups_preserve_input_order() {
        let set = split(vec![
            rec("10", Status::Pass),
            rec("11", Status::Fail),
            rec("12", Status::Pass),
            rec("13", Status::Pass),
        ]);
        let ids: Vec<&str> = set.passed.iter().map(|r| r.enrollment_id.as_str()).collect();
        assert_eq!(ids, vec!["10", "12", "13"]);
    }

    #[test]
    fn unknown_is_not_in_any_export_category() {
        let set = split(vec![rec("20", Status::Unknown)]);
        assert!(set.passed.is_empty());
        assert!(set.failed.is_empty());
        assert!(set.absent.is_empty());
        assert!(set.detained.is_empty());
        assert_eq!(set.unknown.len(), 1);
        assert!(set.export_tables().is_empty());
    }

    #[test]
    fn empty_input_yields_empty_set() {
        let set = split(Vec::new());
        assert!(set.is_empty());
    }
}
