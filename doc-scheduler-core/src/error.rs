use thiserror::Error;

use crate::event::DoctorId;

/// Errors returned by [`crate::engine::Engine`] operations.
///
/// One enum covers both expected operational outcomes (`Collision`,
/// `CapacityExceeded`) and programmer-error preconditions (everything else).
/// The command shell only ever needs to render the first two variants to a
/// wire reply; the rest indicate a malformed request that should never have
/// reached the engine in the first place.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
  #[error("doctor id {0} out of range")]
  InvalidDoctor(DoctorId),

  #[error("duration must be positive")]
  InvalidDuration,

  #[error("start time must be non-negative")]
  InvalidStart,

  #[error("schedule not found")]
  ScheduleNotFound,

  /// Merges the "timeline at MAX_TOTAL" and "day at MAX_DAILY" cases; callers
  /// needing the distinction can match on [`CapacityKind`] reported alongside
  /// in logs, but the wire protocol has only one reply (`MAX_EVENTS`) for both.
  #[error("capacity exceeded ({0:?})")]
  CapacityExceeded(CapacityKind),

  #[error("time range [{existing_start}, {existing_end}) overlaps an existing event")]
  Collision {
    existing_start: i64,
    existing_end: i64,
  },
}

/// Which of the two capacity limits was hit. Not part of the external
/// protocol — both map to the same `MAX_EVENTS` reply — but useful for the
/// shell's diagnostic logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityKind {
  Total,
  Daily,
}
