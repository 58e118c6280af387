//! Exam scheduling domain models.
//!
//! Core data types tying programs, subjects, dates, and time slots
//! together. One subject is one physical exam event: assigning it to a
//! slot makes that assignment visible to every cohort whose curriculum
//! contains it.
//!
//! # Domain Mappings
//!
//! | exam-mapper | Registrar's office |
//! |-------------|--------------------|
//! | Cohort | Program + year level |
//! | SubjectRef | Curriculum entry |
//! | SlotKey | Exam date × time slot |
//! | TermKey | School-year term selector |

mod cohort;
mod slot;
mod subject;
mod term;

pub use cohort::{Cohort, CohortKey, HIDDEN_DEPT};
pub use slot::{ExamDay, InvalidSlotKey, SlotKey, KEY_SEPARATOR, MAX_EXAM_DAYS, TIME_SLOTS};
pub use subject::{RawOffering, SubjectCode, SubjectId, SubjectRef, SubjectSummary};
pub use term::{term_options, InvalidTermKey, Term, TermKey, TermOption};
