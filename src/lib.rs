//! Exam timetable assignment engine.
//!
//! Assigns academic subjects to time slots across multiple exam days for a
//! set of program/year cohorts. A subject is one physical exam event:
//! scheduling it in a slot makes that assignment visible to every cohort
//! whose curriculum contains it, and no subject may occupy two slots
//! system-wide.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Cohort`, `SubjectRef`, `SlotKey`,
//!   `TermKey`, `ExamDay`, the fixed time-slot grid
//! - **`roster`**: Normalizes raw roster offerings into cohorts and the
//!   subject summary; the `RosterSource` retrieval boundary
//! - **`validation`**: Load-boundary checks on raw offering records
//! - **`board`**: `ScheduleBoard` — exam-day registry, per-cohort grids,
//!   and the assignment engine with its global uniqueness checks
//! - **`output`**: The day-grouped summary projection
//! - **`error`**: The `ScheduleError` taxonomy
//!
//! # Architecture
//!
//! The master cohort list is the single source of truth. The display
//! list, the reverse subject index, the per-day remaining counters, and
//! the output summary are derived views, refreshed after every mutation.
//! Retrieval, dialog presentation, and layout live outside this crate;
//! they interact through `RosterSource`, plain snapshots, and
//! `ScheduleError` messages.
//!
//! # References
//!
//! - Qu et al. (2009), "A survey of search methodologies and automated
//!   system development for examination timetabling"
//! - Carter & Laporte (1996), "Recent developments in practical
//!   examination timetabling"

pub mod board;
pub mod error;
pub mod models;
pub mod output;
pub mod roster;
pub mod validation;
