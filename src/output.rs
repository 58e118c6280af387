//! Day-grouped output projection.
//!
//! The output summary is a pure function of (active dates, display list,
//! schedule grids). It is rebuilt wholesale after every mutation rather
//! than maintained incrementally; at this scale a full rebuild is cheap
//! and cannot drift from the grids.
//!
//! # Ordering contract
//! Days follow the active-date insertion order, cohorts follow display
//! order, and slots follow the fixed grid order.

use serde::{Deserialize, Serialize};

use crate::models::{Cohort, SlotKey, TIME_SLOTS};

/// One assigned slot in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledSubject {
    pub subject_id: String,
    pub subject_title: String,
    pub code_no: String,
    /// Time-slot label (the key with its date stripped).
    #[serde(rename = "sched")]
    pub slot: String,
}

/// A cohort's assigned slots for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortDaySummary {
    pub program: String,
    pub year: String,
    pub subjects: Vec<ScheduledSubject>,
}

/// All displayed cohorts' assignments for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: String,
    #[serde(rename = "programs")]
    pub cohorts: Vec<CohortDaySummary>,
}

/// Builds the full summary for the given days and displayed cohorts.
///
/// Every displayed cohort appears under every day, even with no
/// assignments; only non-empty cells contribute subject entries. A cell
/// whose subject is missing from the cohort's curriculum yields blank
/// fields rather than failing.
pub fn build_summary(dates: &[String], display: &[&Cohort]) -> Vec<DaySummary> {
    dates
        .iter()
        .map(|day| DaySummary {
            date: day.clone(),
            cohorts: display
                .iter()
                .map(|cohort| CohortDaySummary {
                    program: cohort.program.clone(),
                    year: cohort.year.clone(),
                    subjects: day_subjects(cohort, day),
                })
                .collect(),
        })
        .collect()
}

fn day_subjects(cohort: &Cohort, day: &str) -> Vec<ScheduledSubject> {
    let mut subjects = Vec::new();
    for slot in TIME_SLOTS {
        let key = SlotKey::new(day, slot);
        let Some(subject_id) = cohort.assigned_at(&key) else {
            continue;
        };
        let entry = match cohort.subject(subject_id) {
            Some(subj) => ScheduledSubject {
                subject_id: subj.subject_id.clone(),
                subject_title: subj.subject_title.clone(),
                code_no: subj.code_no.clone(),
                slot: slot.to_string(),
            },
            None => ScheduledSubject {
                subject_id: String::new(),
                subject_title: String::new(),
                code_no: String::new(),
                slot: slot.to_string(),
            },
        };
        subjects.push(entry);
    }
    subjects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubjectRef;

    fn sample_cohort() -> Cohort {
        let mut c = Cohort::new("BSIT", "1", "COE");
        c.subjects.push(SubjectRef {
            subject_id: "S1".into(),
            subject_title: "Calculus".into(),
            code_no: "C-101".into(),
        });
        c.subjects.push(SubjectRef {
            subject_id: "S2".into(),
            subject_title: "Physics".into(),
            code_no: "C-102".into(),
        });
        c
    }

    #[test]
    fn test_summary_groups_by_day_then_cohort() {
        let mut cohort = sample_cohort();
        cohort.schedule.insert(
            SlotKey::new("2025-06-10", TIME_SLOTS[0]),
            Some("S1".into()),
        );
        let dates = vec!["2025-06-10".to_string(), "2025-06-11".to_string()];
        let summary = build_summary(&dates, &[&cohort]);

        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].date, "2025-06-10");
        assert_eq!(summary[0].cohorts.len(), 1);
        assert_eq!(summary[0].cohorts[0].subjects.len(), 1);
        assert_eq!(summary[0].cohorts[0].subjects[0].subject_title, "Calculus");
        // second day has the cohort entry but no assignments
        assert_eq!(summary[1].cohorts.len(), 1);
        assert!(summary[1].cohorts[0].subjects.is_empty());
    }

    #[test]
    fn test_summary_skips_empty_cells() {
        let mut cohort = sample_cohort();
        cohort
            .schedule
            .insert(SlotKey::new("2025-06-10", TIME_SLOTS[0]), None);
        cohort.schedule.insert(
            SlotKey::new("2025-06-10", TIME_SLOTS[3]),
            Some("S2".into()),
        );
        let dates = vec!["2025-06-10".to_string()];
        let summary = build_summary(&dates, &[&cohort]);

        let subjects = &summary[0].cohorts[0].subjects;
        assert_eq!(subjects.len(), 1);
        assert_eq!(subjects[0].slot, TIME_SLOTS[3]);
    }

    #[test]
    fn test_summary_slots_follow_grid_order() {
        let mut cohort = sample_cohort();
        cohort.schedule.insert(
            SlotKey::new("2025-06-10", TIME_SLOTS[5]),
            Some("S2".into()),
        );
        cohort.schedule.insert(
            SlotKey::new("2025-06-10", TIME_SLOTS[1]),
            Some("S1".into()),
        );
        let dates = vec!["2025-06-10".to_string()];
        let summary = build_summary(&dates, &[&cohort]);

        let slots: Vec<&str> = summary[0].cohorts[0]
            .subjects
            .iter()
            .map(|s| s.slot.as_str())
            .collect();
        assert_eq!(slots, [TIME_SLOTS[1], TIME_SLOTS[5]]);
    }

    #[test]
    fn test_unknown_subject_yields_blank_fields() {
        let mut cohort = sample_cohort();
        cohort.schedule.insert(
            SlotKey::new("2025-06-10", TIME_SLOTS[0]),
            Some("GHOST".into()),
        );
        let dates = vec!["2025-06-10".to_string()];
        let summary = build_summary(&dates, &[&cohort]);

        let entry = &summary[0].cohorts[0].subjects[0];
        assert!(entry.subject_id.is_empty());
        assert!(entry.subject_title.is_empty());
        assert_eq!(entry.slot, TIME_SLOTS[0]);
    }

    #[test]
    fn test_summary_wire_shape() {
        let mut cohort = sample_cohort();
        cohort.schedule.insert(
            SlotKey::new("2025-06-10", TIME_SLOTS[0]),
            Some("S1".into()),
        );
        let dates = vec!["2025-06-10".to_string()];
        let summary = build_summary(&dates, &[&cohort]);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"programs\""));
        assert!(json.contains("\"sched\":\"7:30 AM-9:00 AM\""));
        assert!(json.contains("\"subjectId\":\"S1\""));
    }
}
