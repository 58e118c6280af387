//! Engine error types.

use crate::models::SlotKey;

/// Errors surfaced to the caller by the scheduling engine.
///
/// All variants are recoverable: the session keeps running and the
/// offending operation leaves the rest of the state untouched. Lookups
/// that find nothing are not errors; they return empty or zero defaults.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The subject already occupies a different slot somewhere in the grid.
    #[error("This subject is already assigned in another slot.")]
    DuplicateAssignment {
        /// The subject that was being placed.
        subject_id: String,
        /// The slot it already occupies.
        occupied: SlotKey,
    },

    /// A roster load was requested before a term was chosen.
    #[error("Please select term")]
    MissingTerm,

    /// The roster service failed; no schedule state was constructed.
    #[error("failed to load subject roster: {reason}")]
    Load { reason: String },
}
