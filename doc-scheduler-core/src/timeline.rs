//! One doctor's collision-free timeline: the event store, interval index,
//! ordered view, and undo log, plus the orchestration that keeps them in
//! lockstep.

use crate::error::{CapacityKind, ScheduleError};
use crate::event::{BreakKind, DoctorId, Event, EventId, EventKind};
use crate::interval_index::{Interval, IntervalIndex};
use crate::ordered_view::OrderedView;
use crate::store::EventStore;
use crate::undo_log::UndoLog;

const MINUTES_PER_DAY: i64 = 1440;

fn day_bounds(start_time: i64) -> (i64, i64) {
  let day = start_time.div_euclid(MINUTES_PER_DAY);
  (day * MINUTES_PER_DAY, day * MINUTES_PER_DAY + MINUTES_PER_DAY)
}

#[derive(Debug, Clone, Default)]
pub struct DoctorTimeline {
  store: EventStore,
  intervals: IntervalIndex,
  ordered: OrderedView,
  undo: UndoLog,
}

impl DoctorTimeline {
  pub fn new() -> Self {
    Self::default()
  }

  /// Attempt to add an event. The doctor-range precondition is checked by
  /// the caller ([`crate::engine::Engine`]); this is purely the per-timeline
  /// capacity/collision/insertion logic.
  #[allow(clippy::too_many_arguments)]
  pub(crate) fn add_event(
    &mut self,
    next_id: EventId,
    doctor_id: DoctorId,
    start: i64,
    duration: i64,
    kind: EventKind,
    break_kind: BreakKind,
    description: &str,
    max_total: usize,
    max_daily: usize,
  ) -> Result<EventId, ScheduleError> {
    if self.store.len() >= max_total {
      return Err(ScheduleError::CapacityExceeded(CapacityKind::Total));
    }

    let (day_start, day_end) = day_bounds(start);
    if self.ordered.count_in_range(day_start, day_end) >= max_daily {
      return Err(ScheduleError::CapacityExceeded(CapacityKind::Daily));
    }

    let end = start + duration;
    if let Some(existing) = self.intervals.find_first_overlap(start, end) {
      return Err(ScheduleError::Collision {
        existing_start: existing.start,
        existing_end: existing.end,
      });
    }

    self
      .store
      .create(next_id, doctor_id, start, duration, kind, break_kind, description);
    self.intervals.insert(Interval {
      start,
      end,
      event_id: next_id,
    });
    self.ordered.insert(start, next_id);
    self.undo.push(next_id);

    Ok(next_id)
  }

  /// Undo the most recent insertion. A harmless no-op if the undo log is
  /// empty.
  pub(crate) fn undo_last(&mut self) {
    let Some(id) = self.undo.pop() else {
      return;
    };
    // The id popped off the undo log must still resolve in the store; a
    // miss here would mean the indices have already drifted out of sync.
    let Some(event) = self.store.destroy(id) else {
      debug_assert!(false, "undo log referenced an id absent from the store");
      return;
    };
    self.ordered.remove_by_id(id);
    self.intervals.remove(&Interval {
      start: event.start_time,
      end: event.end_time,
      event_id: id,
    });
  }

  /// Smallest 15-minute-lattice slot in `[day_start+480, day_start+1200]`
  /// that doesn't collide with any stored event, or `None` if none exists.
  /// Read-only; never mutates state.
  pub(crate) fn suggest_slot(&self, duration: i64, day_start: i64) -> Option<i64> {
    let window_start = day_start + 480;
    let window_end = day_start + 1200;
    let mut t = window_start;
    while t <= window_end {
      if !self.intervals.has_overlap(t, t + duration) {
        return Some(t);
      }
      t += 15;
    }
    None
  }

  /// Snapshot of live events in ascending start-time order.
  pub(crate) fn events_ordered(&self) -> Vec<Event> {
    self
      .ordered
      .ids_in_order()
      .into_iter()
      .filter_map(|id| self.store.get(id).cloned())
      .collect()
  }

  pub(crate) fn time_to_next_event(&self, current: i64) -> Option<i64> {
    self.ordered.time_to_next(current)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn add(
    timeline: &mut DoctorTimeline,
    id: EventId,
    start: i64,
    duration: i64,
  ) -> Result<EventId, ScheduleError> {
    timeline.add_event(
      id,
      0,
      start,
      duration,
      EventKind::Patient,
      BreakKind::None,
      "x",
      1000,
      7,
    )
  }

  #[test]
  fn basic_add_and_get() {
    let mut t = DoctorTimeline::new();
    add(&mut t, 1, 600, 30).unwrap();
    let events = t.events_ordered();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start_time, 600);
    assert_eq!(events[0].end_time, 630);
  }

  #[test]
  fn collision_reports_existing_bounds() {
    let mut t = DoctorTimeline::new();
    add(&mut t, 1, 600, 30).unwrap();
    let err = add(&mut t, 2, 610, 30).unwrap_err();
    assert_eq!(
      err,
      ScheduleError::Collision {
        existing_start: 600,
        existing_end: 630
      }
    );
  }

  #[test]
  fn touching_boundary_is_allowed() {
    let mut t = DoctorTimeline::new();
    add(&mut t, 1, 600, 30).unwrap();
    assert!(add(&mut t, 2, 630, 30).is_ok());
  }

  #[test]
  fn daily_limit_enforced_per_calendar_day() {
    let mut t = DoctorTimeline::new();
    for i in 0..7 {
      add(&mut t, i + 1, i * 60, 30).unwrap();
    }
    let err = add(&mut t, 8, 7 * 60, 30).unwrap_err();
    assert_eq!(err, ScheduleError::CapacityExceeded(CapacityKind::Daily));
    // Next calendar day resets the count.
    assert!(add(&mut t, 9, 1440, 30).is_ok());
  }

  #[test]
  fn undo_restores_prior_state_and_ids_never_reuse() {
    let mut t = DoctorTimeline::new();
    add(&mut t, 1, 600, 30).unwrap();
    t.undo_last();
    assert!(t.events_ordered().is_empty());
    add(&mut t, 2, 600, 30).unwrap();
    assert_eq!(t.events_ordered()[0].id, 2);
  }

  #[test]
  fn undo_on_empty_log_is_a_harmless_no_op() {
    let mut t = DoctorTimeline::new();
    t.undo_last();
    assert!(t.events_ordered().is_empty());
  }

  #[test]
  fn suggest_returns_smallest_free_lattice_point() {
    let mut t = DoctorTimeline::new();
    add(&mut t, 1, 480, 30).unwrap();
    add(&mut t, 2, 540, 30).unwrap();
    let slot = t.suggest_slot(30, 0);
    assert_eq!(slot, Some(510));
  }

  #[test]
  fn suggest_returns_none_when_day_is_saturated() {
    let mut t = DoctorTimeline::new();
    let mut start = 480;
    let mut id = 1;
    while start + 30 <= 1200 {
      add(&mut t, id, start, 30).unwrap();
      start += 30;
      id += 1;
    }
    assert_eq!(t.suggest_slot(30, 0), None);
  }

  #[test]
  fn time_to_next_event_reports_minutes_until_the_nearest_future_event() {
    let mut t = DoctorTimeline::new();
    add(&mut t, 1, 1000, 30).unwrap();
    assert_eq!(t.time_to_next_event(950), Some(50));
    assert_eq!(t.time_to_next_event(1000), Some(0));

    let empty = DoctorTimeline::new();
    assert_eq!(empty.time_to_next_event(0), None);
  }
}
