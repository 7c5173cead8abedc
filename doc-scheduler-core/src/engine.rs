//! Top-level handle: one [`DoctorTimeline`] per doctor, a single
//! monotonically increasing event-id counter shared across all of them, and
//! the capacity limits that bound every timeline equally.
//!
//! Deliberately a plain value rather than a process-wide global: independent
//! tests — and, eventually, independent callers — get independent engines.

use crate::error::ScheduleError;
use crate::event::{BreakKind, DoctorId, Event, EventId, EventKind};
use crate::timeline::DoctorTimeline;

/// Limits enforced uniformly across every doctor's timeline.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
  pub max_total: usize,
  pub max_daily: usize,
}

impl Default for EngineConfig {
  fn default() -> Self {
    EngineConfig {
      max_total: 1000,
      max_daily: 7,
    }
  }
}

#[derive(Debug, Clone)]
pub struct Engine {
  timelines: Vec<DoctorTimeline>,
  next_id: EventId,
  config: EngineConfig,
}

impl Engine {
  /// Build an engine with `doctor_count` empty timelines, ids `[0,
  /// doctor_count)`.
  pub fn new(doctor_count: DoctorId, config: EngineConfig) -> Self {
    Engine {
      timelines: (0..doctor_count).map(|_| DoctorTimeline::new()).collect(),
      next_id: 1,
      config,
    }
  }

  pub fn doctor_count(&self) -> DoctorId {
    self.timelines.len() as DoctorId
  }

  fn timeline(&self, doctor_id: DoctorId) -> Result<&DoctorTimeline, ScheduleError> {
    self
      .timelines
      .get(doctor_id as usize)
      .ok_or(ScheduleError::InvalidDoctor(doctor_id))
  }

  fn timeline_mut(&mut self, doctor_id: DoctorId) -> Result<&mut DoctorTimeline, ScheduleError> {
    let bound = self.timelines.len() as DoctorId;
    if doctor_id >= bound {
      return Err(ScheduleError::InvalidDoctor(doctor_id));
    }
    Ok(&mut self.timelines[doctor_id as usize])
  }

  /// Bounds-check `doctor_id` without borrowing `self` mutably, so callers
  /// can run this ahead of further precondition checks that happen before
  /// any mutable borrow is needed.
  fn check_doctor(&self, doctor_id: DoctorId) -> Result<(), ScheduleError> {
    if doctor_id >= self.timelines.len() as DoctorId {
      return Err(ScheduleError::InvalidDoctor(doctor_id));
    }
    Ok(())
  }

  /// Validate and insert a new event on `doctor_id`'s timeline.
  /// On success, mints and returns the new event's id and advances the id
  /// counter; a rejected or failed call never touches the counter, so a
  /// retried request gets the same id it would have gotten the first time.
  /// Once an id has been minted, it is never reused, even after the event it
  /// names is undone.
  #[allow(clippy::too_many_arguments)]
  pub fn add_event(
    &mut self,
    doctor_id: DoctorId,
    start: i64,
    duration: i64,
    kind: EventKind,
    break_kind: BreakKind,
    description: &str,
  ) -> Result<EventId, ScheduleError> {
    // Check doctor range, then duration, then start — all checked before
    // any state is touched.
    self.check_doctor(doctor_id)?;
    if duration <= 0 {
      return Err(ScheduleError::InvalidDuration);
    }
    if start < 0 {
      return Err(ScheduleError::InvalidStart);
    }

    let id = self.next_id;
    let max_total = self.config.max_total;
    let max_daily = self.config.max_daily;
    let timeline = self.timeline_mut(doctor_id)?;
    let result = timeline.add_event(
      id,
      doctor_id,
      start,
      duration,
      kind,
      break_kind,
      description,
      max_total,
      max_daily,
    );
    if result.is_ok() {
      self.next_id += 1;
    }
    result
  }

  /// Undo the most recent successful insertion on `doctor_id`'s timeline. A
  /// harmless no-op if that timeline's undo log is empty.
  pub fn undo(&mut self, doctor_id: DoctorId) -> Result<(), ScheduleError> {
    self.timeline_mut(doctor_id)?.undo_last();
    Ok(())
  }

  /// The earliest free 15-minute-lattice slot of length `duration` within
  /// the `[08:00, 20:00]` window of the calendar day containing `day_start`,
  /// or `None` if the whole window is saturated.
  pub fn suggest_slot(
    &self,
    doctor_id: DoctorId,
    duration: i64,
    day_start: i64,
  ) -> Result<Option<i64>, ScheduleError> {
    if duration <= 0 {
      return Err(ScheduleError::InvalidDuration);
    }
    Ok(self.timeline(doctor_id)?.suggest_slot(duration, day_start))
  }

  /// Live events on `doctor_id`'s timeline, ascending by start time.
  pub fn events_ordered(&self, doctor_id: DoctorId) -> Result<Vec<Event>, ScheduleError> {
    Ok(self.timeline(doctor_id)?.events_ordered())
  }

  /// Minutes until the next event starting at or after `current`, or `None`
  /// if there isn't one.
  pub fn time_to_next_event(
    &self,
    doctor_id: DoctorId,
    current: i64,
  ) -> Result<Option<i64>, ScheduleError> {
    Ok(self.timeline(doctor_id)?.time_to_next_event(current))
  }
}
