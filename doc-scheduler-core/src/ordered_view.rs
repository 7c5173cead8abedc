//! Start-time-ordered view over a doctor's live events.
//!
//! An array-backed min-heap: an owned `Vec` of non-owning `(start_time,
//! event_id)` keys, manual sift-up/sift-down, and an `O(n)` linear scan for
//! `remove_by_id` (fine given the small bound on how many events a single
//! timeline can hold).

use crate::event::EventId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Key {
  start_time: i64,
  event_id: EventId,
}

impl Key {
  /// Ties on `start_time` break on ascending `event_id`, which is
  /// deterministic within a process run.
  fn less_than(&self, other: &Key) -> bool {
    (self.start_time, self.event_id) < (other.start_time, other.event_id)
  }
}

#[derive(Debug, Clone, Default)]
pub struct OrderedView {
  heap: Vec<Key>,
}

impl OrderedView {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.heap.len()
  }

  pub fn is_empty(&self) -> bool {
    self.heap.is_empty()
  }

  pub fn insert(&mut self, start_time: i64, event_id: EventId) {
    self.heap.push(Key {
      start_time,
      event_id,
    });
    let mut i = self.heap.len() - 1;
    while i != 0 {
      let parent = (i - 1) / 2;
      if self.heap[parent].less_than(&self.heap[i]) {
        break;
      }
      self.heap.swap(parent, i);
      i = parent;
    }
  }

  fn sift_down(&mut self, mut i: usize) {
    let n = self.heap.len();
    loop {
      let left = 2 * i + 1;
      let right = 2 * i + 2;
      let mut smallest = i;
      if left < n && self.heap[left].less_than(&self.heap[smallest]) {
        smallest = left;
      }
      if right < n && self.heap[right].less_than(&self.heap[smallest]) {
        smallest = right;
      }
      if smallest == i {
        break;
      }
      self.heap.swap(smallest, i);
      i = smallest;
    }
  }

  /// Remove the event with id `event_id`. Returns `true` if it was present.
  pub fn remove_by_id(&mut self, event_id: EventId) -> bool {
    let Some(i) = self.heap.iter().position(|k| k.event_id == event_id) else {
      return false;
    };
    let last = self.heap.len() - 1;
    self.heap.swap(i, last);
    self.heap.pop();
    if i < self.heap.len() {
      self.sift_down(i);
      // The replacement value may also need to move up if it's smaller
      // than its new parent (it came from the end of the array, so its
      // position relative to the heap order is otherwise unconstrained).
      let mut j = i;
      while j != 0 {
        let parent = (j - 1) / 2;
        if self.heap[parent].less_than(&self.heap[j]) {
          break;
        }
        self.heap.swap(parent, j);
        j = parent;
      }
    }
    true
  }

  /// Count of live events whose `start_time` falls in `[day_start,
  /// day_end)`. Used by `add_event`'s daily-capacity check.
  pub fn count_in_range(&self, day_start: i64, day_end: i64) -> usize {
    self
      .heap
      .iter()
      .filter(|k| k.start_time >= day_start && k.start_time < day_end)
      .count()
  }

  /// The minimum `start_time - current` over all events with `start_time >=
  /// current`, or `None` if there is no such event.
  pub fn time_to_next(&self, current: i64) -> Option<i64> {
    self
      .heap
      .iter()
      .filter(|k| k.start_time >= current)
      .map(|k| k.start_time - current)
      .min()
  }

  /// Snapshot event ids in ascending start-time order (ties by id). Cheap at
  /// `n <= MAX_TOTAL`; this clones and sorts rather than popping the heap.
  pub fn ids_in_order(&self) -> Vec<EventId> {
    let mut keys = self.heap.clone();
    keys.sort_by(|a, b| (a.start_time, a.event_id).cmp(&(b.start_time, b.event_id)));
    keys.into_iter().map(|k| k.event_id).collect()
  }
}
