//! The schedule board: active exam days, per-cohort grids, and the
//! assignment engine that keeps them globally consistent.
//!
//! # Consistency Model
//!
//! Several derived views hang off the master cohort list: the filtered
//! display list, the reverse subject index, per-day remaining counters,
//! and the day-grouped output summary. Every mutating operation reads the
//! shared state it needs before writing, and every mutation path ends by
//! refreshing the derived views, so the views cannot drift from the grids.
//! Mutation is only possible through `&mut ScheduleBoard`, which serializes
//! the check-then-write sequences.
//!
//! The display list is a set of indices into the master list, never a
//! copy: hidden cohorts are filtered from view but share the same records,
//! so they fully participate in uniqueness checks.
//!
//! # Reference
//! Qu et al. (2009), "A survey of search methodologies and automated
//! system development for examination timetabling", J. of Scheduling 12

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::ScheduleError;
use crate::models::{
    Cohort, CohortKey, ExamDay, RawOffering, SlotKey, SubjectId, SubjectRef, SubjectSummary,
    TermKey, MAX_EXAM_DAYS, TIME_SLOTS,
};
use crate::output::{build_summary, DaySummary};
use crate::roster::{group_by_cohort, group_by_subject, quarantine, RosterSource};

/// Acknowledgment message returned by a successful save.
pub const SAVE_ACK: &str = "Schedule saved successfully!";

/// In-memory schedule state for one editing session.
///
/// Owns the master cohort list; all other collections are derived from it
/// or are transactional side tables updated in lockstep with it.
#[derive(Debug, Clone)]
pub struct ScheduleBoard {
    /// Master cohort list, including hidden departments.
    cohorts: Vec<Cohort>,
    /// Indices into `cohorts` for the editing view; recomputed, never copied.
    display: Vec<usize>,
    /// Subject summary view from the same roster load.
    subjects: Vec<SubjectSummary>,
    /// Active exam dates, in insertion order.
    selected_dates: Vec<String>,
    /// Last captured cell value per slot, consulted when clearing. An empty
    /// string records "cell was empty when captured".
    previous: HashMap<SlotKey, SubjectId>,
    /// Reverse index: where each subject is currently scheduled. Updated
    /// transactionally with the forward grids; duplicate checks are O(1).
    assigned: HashMap<SubjectId, SlotKey>,
    /// Day-grouped summary, rebuilt wholesale after every mutation.
    output: Vec<DaySummary>,
}

impl ScheduleBoard {
    /// Loads a board from the roster service for the chosen term.
    ///
    /// `None` for the term fails with [`ScheduleError::MissingTerm`] before
    /// any retrieval. A fetch failure propagates as-is and constructs no
    /// schedule state.
    pub fn load(source: &dyn RosterSource, term: Option<&TermKey>) -> Result<Self, ScheduleError> {
        let term = term.ok_or(ScheduleError::MissingTerm)?;
        debug!(term = %term, "loading roster");
        let records = source.fetch(term)?;
        Ok(Self::from_offerings(records))
    }

    /// Builds a board from already-retrieved offering records.
    ///
    /// Records that fail load-boundary validation are quarantined with a
    /// warning rather than failing the load.
    pub fn from_offerings(records: Vec<RawOffering>) -> Self {
        let records = quarantine(records);
        let subjects = group_by_subject(&records);
        let mut cohorts = group_by_cohort(&records);
        for cohort in &mut cohorts {
            cohort.remaining_subjects = cohort.subjects.len();
        }

        let mut board = Self {
            cohorts,
            display: Vec::new(),
            subjects,
            selected_dates: Vec::new(),
            previous: HashMap::new(),
            assigned: HashMap::new(),
            output: Vec::new(),
        };
        board.refresh_display();
        board.rebuild_output();
        board
    }

    /// The master cohort list, hidden departments included.
    pub fn cohorts(&self) -> &[Cohort] {
        &self.cohorts
    }

    /// The displayed cohorts, in master-list order.
    pub fn display_cohorts(&self) -> impl Iterator<Item = &Cohort> {
        self.display.iter().map(|&i| &self.cohorts[i])
    }

    /// The subject summary view.
    pub fn subjects(&self) -> &[SubjectSummary] {
        &self.subjects
    }

    /// Active exam dates, in insertion order.
    pub fn selected_dates(&self) -> &[String] {
        &self.selected_dates
    }

    /// The fixed time-slot grid.
    pub fn time_slots(&self) -> &'static [&'static str] {
        &TIME_SLOTS
    }

    /// The current day-grouped output summary.
    pub fn output(&self) -> &[DaySummary] {
        &self.output
    }

    /// Looks up a cohort by identity.
    pub fn cohort(&self, key: &CohortKey) -> Option<&Cohort> {
        self.cohorts
            .iter()
            .find(|c| c.program == key.program && c.year == key.year)
    }

    /// Activates an exam date. No-op if already active.
    ///
    /// Seeds an empty cell for every time slot in every cohort's grid.
    /// Seeding is idempotent: existing cells, assigned or not, are never
    /// overwritten.
    pub fn add_date(&mut self, date: &str) {
        if self.selected_dates.iter().any(|d| d == date) {
            return;
        }
        self.selected_dates.push(date.to_string());
        for cohort in &mut self.cohorts {
            for slot in TIME_SLOTS {
                cohort.schedule.entry(SlotKey::new(date, slot)).or_insert(None);
            }
        }
        self.refresh_after(date);
        debug!(%date, "added exam date");
    }

    /// Deactivates an exam date, deleting every grid cell on it.
    ///
    /// Destructive: assignments on the date are lost in every cohort, with
    /// no confirmation at this layer. Reverse-index and capture entries for
    /// the date are dropped in the same step so they never outlive their
    /// forward keys.
    pub fn remove_date(&mut self, date: &str) {
        self.selected_dates.retain(|d| d != date);
        for cohort in &mut self.cohorts {
            cohort.schedule.retain(|key, _| !key.is_on(date));
        }
        self.assigned.retain(|_, key| !key.is_on(date));
        self.previous.retain(|key, _| !key.is_on(date));
        self.refresh_display();
        self.rebuild_output();
        debug!(%date, "removed exam date");
    }

    /// Applies a date-picker selection, activating at most
    /// [`MAX_EXAM_DAYS`] dates. Only the date value of each entry is
    /// consumed; half-day flags are picker state.
    pub fn apply_exam_days(&mut self, days: &[ExamDay]) {
        if days.len() > MAX_EXAM_DAYS {
            warn!(
                submitted = days.len(),
                kept = MAX_EXAM_DAYS,
                "date picker submitted too many days"
            );
        }
        for day in days.iter().take(MAX_EXAM_DAYS) {
            self.add_date(&day.date);
        }
    }

    /// Records the current value of a cell before it changes.
    ///
    /// A two-phase driver calls this when a cell gains focus; the engine
    /// also captures internally at the start of [`select_subject`]. The
    /// captured value is what [`select_subject`] clears on unassignment,
    /// even if no grid still holds it by then.
    ///
    /// [`select_subject`]: ScheduleBoard::select_subject
    pub fn capture_previous(&mut self, cohort_key: &CohortKey, key: &SlotKey) {
        let prev = self
            .cohort(cohort_key)
            .and_then(|c| c.assigned_at(key))
            .cloned()
            .unwrap_or_default();
        self.previous.insert(key.clone(), prev);
    }

    /// Every cohort currently holding an assignment at the given slot.
    ///
    /// Computed on demand by scanning the grids; the reverse index is the
    /// fast path for uniqueness, this is the ground truth.
    pub fn occupants_of(&self, key: &SlotKey) -> Vec<(CohortKey, SubjectId)> {
        self.cohorts
            .iter()
            .filter_map(|c| c.assigned_at(key).map(|id| (c.key(), id.clone())))
            .collect()
    }

    /// The cohort's subjects selectable at a slot: unassigned everywhere,
    /// or already assigned at exactly this slot (so the current selection
    /// stays selectable for a no-op re-save).
    pub fn available_subjects(&self, cohort_key: &CohortKey, key: &SlotKey) -> Vec<&SubjectRef> {
        let Some(cohort) = self.cohort(cohort_key) else {
            return Vec::new();
        };
        cohort
            .subjects
            .iter()
            .filter(|s| match self.assigned.get(&s.subject_id) {
                None => true,
                Some(occupied) => occupied == key,
            })
            .collect()
    }

    /// Assigns or clears a subject at `(day, slot)` for the given cohort.
    ///
    /// `Some(id)` places one scheduling event: the assignment lands in
    /// every cohort whose curriculum contains the subject. A subject
    /// already scheduled at a different slot is rejected with
    /// [`ScheduleError::DuplicateAssignment`] and nothing lands; re-saving
    /// the slot it already occupies is a no-op. If the target cell held a
    /// different subject, that subject is released everywhere at this slot
    /// before the new one lands, so all grids keep agreeing on the cell.
    ///
    /// `None` clears: the cell's captured (or scanned) occupant is removed
    /// at this slot from every cohort holding it.
    pub fn select_subject(
        &mut self,
        cohort_key: &CohortKey,
        slot: &str,
        day: &str,
        selection: Option<&str>,
    ) -> Result<(), ScheduleError> {
        let key = SlotKey::new(day, slot);
        self.capture_previous(cohort_key, &key);

        let selection = selection.filter(|s| !s.is_empty());
        match selection {
            None => {
                self.clear_slot(&key);
                self.previous.remove(&key);
                self.refresh_after(day);
                Ok(())
            }
            Some(id) => {
                if let Some(occupied) = self.assigned.get(id) {
                    if *occupied != key {
                        // reject: the attempted value never lands and no
                        // other state moves
                        return Err(ScheduleError::DuplicateAssignment {
                            subject_id: id.to_string(),
                            occupied: occupied.clone(),
                        });
                    }
                }

                // an overwrite releases the cell's previous occupant
                // everywhere before the new subject lands
                let prev = self
                    .cohort(cohort_key)
                    .and_then(|c| c.assigned_at(&key))
                    .cloned();
                if let Some(prev_id) = prev {
                    if prev_id != id {
                        self.clear_everywhere(&key, &prev_id);
                    }
                }

                let mut placed = false;
                for cohort in &mut self.cohorts {
                    if cohort.contains_subject(id) {
                        cohort.schedule.insert(key.clone(), Some(id.to_string()));
                        placed = true;
                    }
                }
                if placed {
                    self.assigned.insert(id.to_string(), key.clone());
                    debug!(slot = %key, subject = id, "assigned subject");
                }
                self.refresh_after(day);
                Ok(())
            }
        }
    }

    /// Subjects of the cohort still unscheduled on the given day.
    pub fn remaining_for_day(&self, cohort_key: &CohortKey, day: &str) -> usize {
        self.cohort(cohort_key)
            .map(|c| Self::remaining_in(c, day))
            .unwrap_or(0)
    }

    /// Subjects of the cohort unscheduled across the whole grid. Kept for
    /// contexts without a day, e.g. right after load.
    pub fn remaining_overall(&self, cohort_key: &CohortKey) -> usize {
        self.cohort(cohort_key)
            .map(|c| {
                let placed = c.schedule.values().filter(|cell| cell.is_some()).count();
                c.subjects.len().saturating_sub(placed)
            })
            .unwrap_or(0)
    }

    /// Logs the current output summary and acknowledges the save.
    ///
    /// No persistence is defined at this layer; the summary is emitted for
    /// the caller's log pipeline.
    pub fn save(&self) -> &'static str {
        if let Ok(json) = serde_json::to_string(&self.output) {
            info!(schedule = %json, "final schedule output");
        }
        SAVE_ACK
    }

    /// Clears whatever subject occupies `key`, resolved from the capture
    /// table first and by grid scan as fallback.
    fn clear_slot(&mut self, key: &SlotKey) {
        let resolved = self
            .previous
            .get(key)
            .filter(|id| !id.is_empty())
            .cloned()
            .or_else(|| self.cohorts.iter().find_map(|c| c.assigned_at(key).cloned()));

        if let Some(id) = resolved {
            self.clear_everywhere(key, &id);
        }
    }

    /// Removes `id` at `key` from every grid holding exactly it, and drops
    /// the reverse-index entry in the same step.
    fn clear_everywhere(&mut self, key: &SlotKey, id: &str) {
        for cohort in &mut self.cohorts {
            if let Some(cell) = cohort.schedule.get_mut(key) {
                if cell.as_deref() == Some(id) {
                    *cell = None;
                }
            }
        }
        self.assigned.remove(id);
        debug!(slot = %key, subject = id, "cleared assignment");
    }

    fn remaining_in(cohort: &Cohort, day: &str) -> usize {
        let placed = cohort
            .schedule
            .iter()
            .filter(|(key, cell)| key.is_on(day) && cell.is_some())
            .count();
        cohort.subjects.len().saturating_sub(placed)
    }

    fn refresh_display(&mut self) {
        self.display = self
            .cohorts
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_hidden())
            .map(|(i, _)| i)
            .collect();
    }

    fn update_remaining_for_day(&mut self, day: &str) {
        for &i in &self.display {
            let cohort = &mut self.cohorts[i];
            cohort.remaining_subjects = Self::remaining_in(cohort, day);
        }
    }

    fn rebuild_output(&mut self) {
        let display: Vec<&Cohort> = self.display.iter().map(|&i| &self.cohorts[i]).collect();
        let summary = build_summary(&self.selected_dates, &display);
        self.output = summary;
        debug!(days = self.output.len(), "rebuilt output summary");
    }

    fn refresh_after(&mut self, day: &str) {
        self.refresh_display();
        self.update_remaining_for_day(day);
        self.rebuild_output();
    }
}
