//! Doctor-facing review workflow for citas.
//!
//! `pending` can be accepted or rejected; an accepted cita can be cancelled
//! only while its date/time is still in the future. `rejected` and
//! `cancelled` are terminal.

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{debug, warn};

use shared_models::ReviewStatus;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("No se puede cambiar la cita de {from} a {to}")]
    Invalid { from: ReviewStatus, to: ReviewStatus },

    #[error("No se puede cancelar una cita que ya pasó")]
    PastAppointment,
}

pub fn valid_transitions(current: ReviewStatus) -> &'static [ReviewStatus] {
    match current {
        ReviewStatus::Pending => &[ReviewStatus::Accepted, ReviewStatus::Rejected],
        ReviewStatus::Accepted => &[ReviewStatus::Cancelled],
        ReviewStatus::Rejected | ReviewStatus::Cancelled => &[],
    }
}

/// Validate a user-initiated transition. `scheduled` is the cita's date/time;
/// `now` is injected so callers and tests control the clock.
pub fn validate_transition(
    current: ReviewStatus,
    next: ReviewStatus,
    scheduled: NaiveDateTime,
    now: NaiveDateTime,
) -> Result<(), TransitionError> {
    debug!("Validating review transition {} -> {}", current, next);

    if !valid_transitions(current).contains(&next) {
        warn!("Invalid review transition attempted: {} -> {}", current, next);
        return Err(TransitionError::Invalid {
            from: current,
            to: next,
        });
    }

    if current == ReviewStatus::Accepted && next == ReviewStatus::Cancelled && scheduled <= now {
        return Err(TransitionError::PastAppointment);
    }

    Ok(())
}
