//! Concrete worked scenarios, one per case enumerated for the external
//! protocol, exercised directly against the engine (bypassing the wire
//! format the CLI crate layers on top).

use doc_scheduler_core::{BreakKind, Engine, EngineConfig, EventKind, ScheduleError};

fn engine() -> Engine {
  Engine::new(1, EngineConfig::default())
}

#[test]
fn basic_add() {
  let mut e = engine();
  let id = e
    .add_event(0, 600, 30, EventKind::Patient, BreakKind::None, "checkup")
    .unwrap();
  assert_eq!(id, 1);

  let events = e.events_ordered(0).unwrap();
  assert_eq!(events.len(), 1);
  assert_eq!(events[0].id, 1);
  assert_eq!(events[0].start_time, 600);
  assert_eq!(events[0].duration(), 30);
  assert_eq!(events[0].kind, EventKind::Patient);
  assert_eq!(events[0].break_kind, BreakKind::None);
  assert_eq!(events[0].description, "checkup");
}

#[test]
fn collision_reports_the_colliding_events_bounds() {
  let mut e = engine();
  e.add_event(0, 600, 30, EventKind::Patient, BreakKind::None, "checkup")
    .unwrap();
  let err = e
    .add_event(0, 610, 30, EventKind::Patient, BreakKind::None, "other")
    .unwrap_err();
  assert_eq!(
    err,
    ScheduleError::Collision {
      existing_start: 600,
      existing_end: 630
    }
  );
}

#[test]
fn touch_at_boundary_is_allowed() {
  let mut e = engine();
  e.add_event(0, 600, 30, EventKind::Patient, BreakKind::None, "checkup")
    .unwrap();
  let id = e
    .add_event(0, 630, 30, EventKind::Patient, BreakKind::None, "next")
    .unwrap();
  assert_eq!(id, 2);
}

#[test]
fn daily_limit_then_next_day_resets() {
  let mut e = engine();
  for i in 0..7 {
    e.add_event(0, i * 60, 30, EventKind::Patient, BreakKind::None, "slot")
      .unwrap();
  }
  let err = e
    .add_event(0, 7 * 60, 30, EventKind::Patient, BreakKind::None, "eighth")
    .unwrap_err();
  assert_eq!(err, ScheduleError::CapacityExceeded(doc_scheduler_core::CapacityKind::Daily));

  let id = e
    .add_event(0, 1440, 30, EventKind::Patient, BreakKind::None, "day_two")
    .unwrap();
  assert_eq!(id, 8);
}

#[test]
fn undo_restores_empty_state_and_next_id_skips_the_undone_one() {
  let mut e = engine();
  e.add_event(0, 600, 30, EventKind::Patient, BreakKind::None, "checkup")
    .unwrap();
  e.undo(0).unwrap();
  assert!(e.events_ordered(0).unwrap().is_empty());

  let id = e
    .add_event(0, 600, 30, EventKind::Patient, BreakKind::None, "checkup")
    .unwrap();
  assert_eq!(id, 2);
}

#[test]
fn suggest_finds_the_gap_between_two_booked_slots() {
  let mut e = Engine::new(2, EngineConfig::default());
  e.add_event(1, 480, 30, EventKind::Patient, BreakKind::None, "a")
    .unwrap();
  e.add_event(1, 540, 30, EventKind::Patient, BreakKind::None, "b")
    .unwrap();

  let slot = e.suggest_slot(1, 30, 0).unwrap();
  assert_eq!(slot, Some(510));
}

#[test]
fn alert_reports_minutes_to_next_or_none() {
  let mut e = engine();
  e.add_event(0, 1000, 30, EventKind::Patient, BreakKind::None, "only")
    .unwrap();
  assert_eq!(e.time_to_next_event(0, 950).unwrap(), Some(50));

  let empty = engine();
  assert_eq!(empty.time_to_next_event(0, 0).unwrap(), None);
}
