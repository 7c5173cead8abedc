use serde::{Deserialize, Serialize};

/// Process-unique identifier minted by [`crate::engine::Engine`] in strictly
/// increasing order. Never reused, even after the event it names is undone.
pub type EventId = u64;

/// Small integer doctor identifier in `[0, D)`.
pub type DoctorId = u32;

/// Upper bound on a truncated [`Event::description`], in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 99;

/// The three kinds of calendar entry this engine schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventKind {
  Patient = 0,
  Break = 1,
  Meeting = 2,
}

/// Sub-kind of a [`EventKind::Break`] event. Meaningless (and always `None`)
/// for any other kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum BreakKind {
  Breakfast = 0,
  Lunch = 1,
  Dinner = 2,
  None = 3,
}

/// An immutable-after-creation calendar entry on one doctor's timeline.
///
/// `start_time`/`end_time` are integer minutes since a fixed epoch shared by
/// the whole engine; `end_time = start_time + duration` and `duration > 0`.
/// Intervals are half-open: `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub id: EventId,
  pub doctor_id: DoctorId,
  pub start_time: i64,
  pub end_time: i64,
  pub kind: EventKind,
  pub break_kind: BreakKind,
  pub description: String,
}

impl Event {
  pub fn duration(&self) -> i64 {
    self.end_time - self.start_time
  }

  /// The calendar day this event's `start_time` falls on, counting
  /// 1440-minute days from the epoch.
  pub fn day(&self) -> i64 {
    self.start_time.div_euclid(1440)
  }
}

/// Truncate `desc` to [`MAX_DESCRIPTION_LEN`] bytes at a char boundary.
pub fn truncate_description(desc: &str) -> String {
  if desc.len() <= MAX_DESCRIPTION_LEN {
    return desc.to_string();
  }
  let mut end = MAX_DESCRIPTION_LEN;
  while !desc.is_char_boundary(end) {
    end -= 1;
  }
  desc[..end].to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn day_floors_toward_negative_infinity() {
    let e = Event {
      id: 1,
      doctor_id: 0,
      start_time: -10,
      end_time: 10,
      kind: EventKind::Patient,
      break_kind: BreakKind::None,
      description: String::new(),
    };
    assert_eq!(e.day(), -1);
  }

  #[test]
  fn truncate_keeps_short_strings_intact() {
    assert_eq!(truncate_description("checkup"), "checkup");
  }

  #[test]
  fn truncate_clips_at_char_boundary() {
    let long: String = "a".repeat(150);
    let truncated = truncate_description(&long);
    assert_eq!(truncated.len(), MAX_DESCRIPTION_LEN);

    // A multi-byte char sitting right at the cut point should not be split.
    let mut mixed = "a".repeat(98);
    mixed.push('€'); // 3 bytes, would land at [98,101) if sliced blindly
    mixed.push_str(&"b".repeat(10));
    let truncated = truncate_description(&mixed);
    assert!(truncated.len() <= MAX_DESCRIPTION_LEN);
    assert!(String::from_utf8(truncated.into_bytes()).is_ok());
  }
}
