//! Roster normalization.
//!
//! Turns the flat offering list delivered by the roster service into the
//! two groupings the engine consumes: subjects with their code lists (the
//! summary view) and cohorts with deduplicated curricula. Both functions
//! are pure; quarantining is the only step that logs.

use tracing::warn;

use crate::error::ScheduleError;
use crate::models::{Cohort, RawOffering, SubjectCode, SubjectRef, SubjectSummary, TermKey};
use crate::validation::validate_offering;

/// Boundary to the roster-retrieval service.
///
/// Implementations fetch the raw offering list for one term. A fetch
/// failure must surface as an error value; the engine constructs no
/// schedule state in that case.
pub trait RosterSource {
    /// Fetches the offering list for a term.
    fn fetch(&self, term: &TermKey) -> Result<Vec<RawOffering>, ScheduleError>;
}

/// Groups offerings by subject id, in first-seen order.
///
/// The first offering of a subject supplies its title; every offering
/// contributes a code entry.
pub fn group_by_subject(records: &[RawOffering]) -> Vec<SubjectSummary> {
    let mut grouped: Vec<SubjectSummary> = Vec::new();

    for item in records {
        let code = SubjectCode {
            code_no: item.code_no.clone(),
            course: item.course.clone(),
            year: item.year_level.clone(),
            dept: item.dept.clone(),
        };

        match grouped.iter().position(|s| s.subject_id == item.subject_id) {
            Some(i) => grouped[i].codes.push(code),
            None => grouped.push(SubjectSummary {
                subject_id: item.subject_id.clone(),
                subject_title: item.subject_title.clone(),
                codes: vec![code],
            }),
        }
    }

    grouped
}

/// Groups offerings into cohorts keyed by (course, year level).
///
/// Each cohort accumulates a curriculum deduplicated by subject id. The
/// result is sorted by program name, then numeric year ascending — a
/// presentation contract relied on by the display layer.
pub fn group_by_cohort(records: &[RawOffering]) -> Vec<Cohort> {
    let mut grouped: Vec<Cohort> = Vec::new();

    for item in records {
        let subject = SubjectRef {
            subject_id: item.subject_id.clone(),
            subject_title: item.subject_title.clone(),
            code_no: item.code_no.clone(),
        };

        match grouped
            .iter()
            .position(|c| c.program == item.course && c.year == item.year_level)
        {
            Some(i) => {
                if !grouped[i].contains_subject(&subject.subject_id) {
                    grouped[i].subjects.push(subject);
                }
            }
            None => {
                let mut cohort =
                    Cohort::new(item.course.clone(), item.year_level.clone(), item.dept.clone());
                cohort.subjects.push(subject);
                grouped.push(cohort);
            }
        }
    }

    grouped.sort_by(|a, b| {
        a.program
            .cmp(&b.program)
            .then(a.year_number().cmp(&b.year_number()))
    });

    grouped
}

/// Drops offerings that fail load-boundary validation, logging each one.
pub fn quarantine(records: Vec<RawOffering>) -> Vec<RawOffering> {
    records
        .into_iter()
        .filter(|record| match validate_offering(record) {
            Ok(()) => true,
            Err(err) => {
                warn!(reason = %err.message, "quarantined roster record");
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<RawOffering> {
        vec![
            RawOffering::new("S1", "Calculus", "C-101", "BSIT", "1", "COE"),
            RawOffering::new("S2", "Physics", "C-102", "BSIT", "1", "COE"),
            RawOffering::new("S1", "Calculus", "C-201", "BSCS", "1", "COE"),
            RawOffering::new("S3", "Ethics", "C-301", "BSCS", "2", "COE"),
        ]
    }

    #[test]
    fn test_group_by_subject_first_seen_order() {
        let subjects = group_by_subject(&sample_records());
        let ids: Vec<&str> = subjects.iter().map(|s| s.subject_id.as_str()).collect();
        assert_eq!(ids, ["S1", "S2", "S3"]);
    }

    #[test]
    fn test_group_by_subject_accumulates_codes() {
        let subjects = group_by_subject(&sample_records());
        let s1 = &subjects[0];
        assert_eq!(s1.subject_title, "Calculus");
        assert_eq!(s1.codes.len(), 2);
        assert_eq!(s1.codes[0].course, "BSIT");
        assert_eq!(s1.codes[1].course, "BSCS");
        assert_eq!(s1.codes[1].code_no, "C-201");
    }

    #[test]
    fn test_group_by_cohort_dedups_subjects() {
        let mut records = sample_records();
        // same subject offered under two codes in the same cohort
        records.push(RawOffering::new("S1", "Calculus", "C-103", "BSIT", "1", "COE"));

        let cohorts = group_by_cohort(&records);
        let bsit = cohorts.iter().find(|c| c.program == "BSIT").unwrap();
        assert_eq!(bsit.subjects.len(), 2); // S1 and S2, not S1 twice
    }

    #[test]
    fn test_group_by_cohort_sort_order() {
        let records = vec![
            RawOffering::new("S1", "Calculus", "C-1", "BSIT", "2", "COE"),
            RawOffering::new("S2", "Physics", "C-2", "BSIT", "10", "COE"),
            RawOffering::new("S3", "Ethics", "C-3", "BSCS", "1", "COE"),
            RawOffering::new("S4", "Algebra", "C-4", "BSIT", "1", "COE"),
        ];
        let cohorts = group_by_cohort(&records);
        let keys: Vec<(&str, &str)> = cohorts
            .iter()
            .map(|c| (c.program.as_str(), c.year.as_str()))
            .collect();
        // program lexicographic, then numeric year: "10" sorts after "2"
        assert_eq!(
            keys,
            [("BSCS", "1"), ("BSIT", "1"), ("BSIT", "2"), ("BSIT", "10")]
        );
    }

    #[test]
    fn test_new_cohort_is_empty() {
        let cohorts = group_by_cohort(&sample_records());
        for c in &cohorts {
            assert!(c.schedule.is_empty());
            assert_eq!(c.remaining_subjects, 0);
        }
    }

    #[test]
    fn test_quarantine_drops_invalid_records() {
        let mut records = sample_records();
        records.push(RawOffering::new("", "Ghost", "C-9", "BSIT", "1", "COE"));
        records.push(RawOffering::new("S9", "Nines", "C-10", "BSIT", "one", "COE"));

        let kept = quarantine(records);
        assert_eq!(kept.len(), 4);
        assert!(kept.iter().all(|r| r.subject_id != "S9"));
    }
}
