//! Owning store of live events for one doctor.
//!
//! Also serves as the id→event map: the backing `HashMap` gives `O(1)`
//! lookup by id for free, so a second structure kept in sync with it would
//! only be duplicated state.

use std::collections::HashMap;

use crate::event::{BreakKind, DoctorId, Event, EventId, EventKind, truncate_description};

#[derive(Debug, Clone, Default)]
pub struct EventStore {
  events: HashMap<EventId, Event>,
}

impl EventStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.events.len()
  }

  pub fn is_empty(&self) -> bool {
    self.events.is_empty()
  }

  /// Mint and store a new event. The caller (the orchestrator) is
  /// responsible for having already validated preconditions and checked
  /// capacity/collision — this call never fails.
  #[allow(clippy::too_many_arguments)]
  pub fn create(
    &mut self,
    id: EventId,
    doctor_id: DoctorId,
    start_time: i64,
    duration: i64,
    kind: EventKind,
    break_kind: BreakKind,
    description: &str,
  ) -> &Event {
    let event = Event {
      id,
      doctor_id,
      start_time,
      end_time: start_time + duration,
      kind,
      break_kind,
      description: truncate_description(description),
    };
    self.events.insert(id, event);
    self.events.get(&id).expect("just inserted")
  }

  pub fn get(&self, id: EventId) -> Option<&Event> {
    self.events.get(&id)
  }

  /// Remove and return the event with `id`, if present. Only the undo path
  /// is permitted to call this: an event is destroyed exactly once, when it
  /// is undone, and never any other way.
  pub fn destroy(&mut self, id: EventId) -> Option<Event> {
    self.events.remove(&id)
  }
}
