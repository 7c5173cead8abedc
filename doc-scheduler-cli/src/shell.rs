//! The request/response loop itself: one line in, at most one line out,
//! flushed immediately. Generic over `Read`/`Write` so it can be driven over
//! real stdio or an in-memory buffer in tests.

use std::io::{self, BufRead, Write};

use doc_scheduler_core::Engine;
use tracing::{debug, warn};

use crate::protocol::{
  Command, parse_line, render_add_reply, render_alert_reply, render_get_reply, render_suggest_reply,
  render_undo_reply,
};

/// Run the shell loop until `EXIT` is received or the input is exhausted.
pub fn run<R: BufRead, W: Write>(mut reader: R, mut writer: W, engine: &mut Engine) -> io::Result<()> {
  let mut line = String::new();
  loop {
    line.clear();
    let bytes_read = reader.read_line(&mut line)?;
    if bytes_read == 0 {
      return Ok(());
    }
    let trimmed = line.trim_end_matches(['\n', '\r']);
    if trimmed.is_empty() {
      continue;
    }

    let Some(command) = parse_line(trimmed) else {
      warn!(line = trimmed, "could not parse request line");
      continue;
    };

    if matches!(command, Command::Exit) {
      debug!(line = trimmed, "exiting");
      return Ok(());
    }

    let reply = dispatch(engine, command);
    debug!(line = trimmed, reply = reply.as_deref(), "handled request");

    match reply {
      Some(reply) => {
        writeln!(writer, "{reply}")?;
        writer.flush()?;
      }
      None => {
        // Precondition violation: no reply slot in the protocol for this.
        // Already logged at warn/error level by the caller as appropriate.
      }
    }
  }
}

fn dispatch(engine: &mut Engine, command: Command) -> Option<String> {
  match command {
    Command::Add {
      doctor,
      start,
      duration,
      kind,
      break_kind,
      desc,
    } => {
      let result = engine.add_event(doctor, start, duration, kind, break_kind, &desc);
      if let Err(err) = &result {
        log_precondition_violation(err);
      }
      render_add_reply(result)
    }
    Command::Suggest {
      doctor,
      duration,
      day_start,
    } => {
      let result = engine.suggest_slot(doctor, duration, day_start);
      if let Err(err) = &result {
        log_precondition_violation(err);
      }
      render_suggest_reply(result)
    }
    Command::Undo { doctor } => {
      let result = engine.undo(doctor);
      if let Err(err) = &result {
        log_precondition_violation(err);
      }
      render_undo_reply(result)
    }
    Command::Get { doctor } => {
      let result = engine.events_ordered(doctor);
      if let Err(err) = &result {
        log_precondition_violation(err);
      }
      render_get_reply(result)
    }
    Command::Alert { doctor, current } => {
      let result = engine.time_to_next_event(doctor, current);
      if let Err(err) = &result {
        log_precondition_violation(err);
      }
      render_alert_reply(result)
    }
    Command::Exit => unreachable!("handled by the caller before dispatch"),
  }
}

fn log_precondition_violation(err: &doc_scheduler_core::ScheduleError) {
  use doc_scheduler_core::ScheduleError::*;
  if matches!(err, Collision { .. } | CapacityExceeded(_)) {
    return;
  }
  tracing::error!(error = %err, "request reached the core with an invalid precondition");
}
