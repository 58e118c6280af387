//! Program/year cohorts and their schedule grids.
//!
//! A cohort is one (program, year-level) group: a fixed curriculum of
//! subjects and a grid of slot cells. The grid is keyed lazily — a cell
//! exists iff its date is currently active.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{SlotKey, SubjectId, SubjectRef};

/// Department code hidden from the editing view, compared case-insensitively.
///
/// Hidden cohorts stay in the master list and participate in every global
/// uniqueness check; they are only dropped from the display list.
pub const HIDDEN_DEPT: &str = "SAS";

/// Identity of a cohort: program name plus year level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CohortKey {
    pub program: String,
    pub year: String,
}

impl CohortKey {
    /// Creates a new cohort key.
    pub fn new(program: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            year: year.into(),
        }
    }
}

/// One (program, year-level) cohort: its curriculum and schedule grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cohort {
    /// Program (course) name.
    pub program: String,
    /// Year level, as loaded from the roster.
    pub year: String,
    /// Department code; used only for display filtering.
    pub dept: String,
    /// Curriculum: unique by subject id, fixed at load time.
    pub subjects: Vec<SubjectRef>,
    /// Grid cells. `None` = seeded but unassigned; a key is present iff its
    /// date is currently in the active date set.
    pub schedule: HashMap<SlotKey, Option<SubjectId>>,
    /// Derived counter, refreshed after each mutation; never authoritative.
    pub remaining_subjects: usize,
}

impl Cohort {
    /// Creates an empty cohort with no curriculum and no grid cells.
    pub fn new(
        program: impl Into<String>,
        year: impl Into<String>,
        dept: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            year: year.into(),
            dept: dept.into(),
            subjects: Vec::new(),
            schedule: HashMap::new(),
            remaining_subjects: 0,
        }
    }

    /// This cohort's identity key.
    pub fn key(&self) -> CohortKey {
        CohortKey::new(self.program.clone(), self.year.clone())
    }

    /// Whether this cohort belongs to the hidden department.
    pub fn is_hidden(&self) -> bool {
        self.dept.eq_ignore_ascii_case(HIDDEN_DEPT)
    }

    /// Whether the curriculum contains the given subject.
    pub fn contains_subject(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s.subject_id == subject_id)
    }

    /// Looks up a curriculum subject by id.
    pub fn subject(&self, subject_id: &str) -> Option<&SubjectRef> {
        self.subjects.iter().find(|s| s.subject_id == subject_id)
    }

    /// The subject assigned at a key, if the cell exists and is non-empty.
    pub fn assigned_at(&self, key: &SlotKey) -> Option<&SubjectId> {
        self.schedule.get(key).and_then(|cell| cell.as_ref())
    }

    /// Year level as a number; non-numeric year levels order first.
    pub fn year_number(&self) -> u32 {
        self.year.trim().parse().unwrap_or(0)
    }
}
