//! Parsing and rendering for the line-oriented request/response protocol.
//!
//! Kept as pure functions over `&str`/`String` so they can be unit-tested
//! without any stdin/stdout plumbing; `shell.rs` is the only place that
//! touches actual streams.

use serde::Serialize;

use doc_scheduler_core::{BreakKind, Event, EventId, EventKind, ScheduleError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Add {
    doctor: u32,
    start: i64,
    duration: i64,
    kind: EventKind,
    break_kind: BreakKind,
    desc: String,
  },
  Suggest {
    doctor: u32,
    duration: i64,
    day_start: i64,
  },
  Undo {
    doctor: u32,
  },
  Get {
    doctor: u32,
  },
  Alert {
    doctor: u32,
    current: i64,
  },
  Exit,
}

fn kind_from_u8(v: u8) -> Option<EventKind> {
  match v {
    0 => Some(EventKind::Patient),
    1 => Some(EventKind::Break),
    2 => Some(EventKind::Meeting),
    _ => None,
  }
}

fn break_kind_from_u8(v: u8) -> Option<BreakKind> {
  match v {
    0 => Some(BreakKind::Breakfast),
    1 => Some(BreakKind::Lunch),
    2 => Some(BreakKind::Dinner),
    3 => Some(BreakKind::None),
    _ => None,
  }
}

/// Parse one request line into a [`Command`]. Returns `None` for any
/// malformed line (unknown keyword, wrong token count, a non-integer where a
/// number is expected) — the shell logs these and moves on, per protocol.
pub fn parse_line(line: &str) -> Option<Command> {
  let mut tokens = line.split_whitespace();
  let keyword = tokens.next()?;

  match keyword {
    "ADD" => {
      let doctor = tokens.next()?.parse().ok()?;
      let start = tokens.next()?.parse().ok()?;
      let duration = tokens.next()?.parse().ok()?;
      let kind_raw: u8 = tokens.next()?.parse().ok()?;
      let break_raw: u8 = tokens.next()?.parse().ok()?;
      let desc = tokens.next()?.to_string();
      if tokens.next().is_some() {
        return None;
      }
      Some(Command::Add {
        doctor,
        start,
        duration,
        kind: kind_from_u8(kind_raw)?,
        break_kind: break_kind_from_u8(break_raw)?,
        desc,
      })
    }
    "SUGGEST" => {
      let doctor = tokens.next()?.parse().ok()?;
      let duration = tokens.next()?.parse().ok()?;
      let day_start = tokens.next()?.parse().ok()?;
      if tokens.next().is_some() {
        return None;
      }
      Some(Command::Suggest {
        doctor,
        duration,
        day_start,
      })
    }
    "UNDO" => {
      let doctor = tokens.next()?.parse().ok()?;
      if tokens.next().is_some() {
        return None;
      }
      Some(Command::Undo { doctor })
    }
    "GET" => {
      let doctor = tokens.next()?.parse().ok()?;
      if tokens.next().is_some() {
        return None;
      }
      Some(Command::Get { doctor })
    }
    "ALERT" => {
      let doctor = tokens.next()?.parse().ok()?;
      let current = tokens.next()?.parse().ok()?;
      if tokens.next().is_some() {
        return None;
      }
      Some(Command::Alert { doctor, current })
    }
    "EXIT" => {
      if tokens.next().is_some() {
        return None;
      }
      Some(Command::Exit)
    }
    _ => None,
  }
}

#[derive(Debug, Serialize)]
struct WireEvent {
  id: EventId,
  start: i64,
  duration: i64,
  #[serde(rename = "type")]
  kind: u8,
  #[serde(rename = "break")]
  break_kind: u8,
  desc: String,
}

impl From<&Event> for WireEvent {
  fn from(e: &Event) -> Self {
    WireEvent {
      id: e.id,
      start: e.start_time,
      duration: e.duration(),
      kind: e.kind as u8,
      break_kind: e.break_kind as u8,
      desc: e.description.clone(),
    }
  }
}

/// Render the result of an `ADD` command. `None` means the outcome has no
/// wire reply (a precondition violation the shell logs instead).
pub fn render_add_reply(result: Result<EventId, ScheduleError>) -> Option<String> {
  match result {
    Ok(_) => Some("OK".to_string()),
    Err(ScheduleError::Collision {
      existing_start,
      existing_end,
    }) => Some(format!("COLLISION {existing_start} {existing_end}")),
    Err(ScheduleError::CapacityExceeded(_)) => Some("MAX_EVENTS".to_string()),
    Err(_) => None,
  }
}

pub fn render_suggest_reply(result: Result<Option<i64>, ScheduleError>) -> Option<String> {
  match result {
    Ok(Some(t)) => Some(format!("SUGGESTION {t}")),
    Ok(None) => Some("SUGGESTION -1".to_string()),
    Err(_) => None,
  }
}

pub fn render_undo_reply(result: Result<(), ScheduleError>) -> Option<String> {
  match result {
    Ok(()) => Some("OK".to_string()),
    Err(_) => None,
  }
}

pub fn render_get_reply(result: Result<Vec<Event>, ScheduleError>) -> Option<String> {
  match result {
    Ok(events) => {
      let wire: Vec<WireEvent> = events.iter().map(WireEvent::from).collect();
      Some(serde_json::to_string(&wire).expect("wire events always serialize"))
    }
    Err(_) => None,
  }
}

pub fn render_alert_reply(result: Result<Option<i64>, ScheduleError>) -> Option<String> {
  match result {
    Ok(Some(mins)) => Some(mins.to_string()),
    Ok(None) => Some("-1".to_string()),
    Err(_) => None,
  }
}
