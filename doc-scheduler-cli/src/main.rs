use std::io::{BufReader, stdin, stdout};

use clap::Parser;
use doc_scheduler_core::{Engine, EngineConfig};
use tracing::info;

mod cli;
mod logging;
mod protocol;
mod shell;

use cli::Args;

fn main() -> std::io::Result<()> {
  let args = Args::parse();
  logging::setup_logging(&args.log_level);

  info!(
    doctors = args.doctors,
    max_total = args.max_total,
    max_daily = args.max_daily,
    "starting scheduling shell"
  );

  let mut engine = Engine::new(
    args.doctors,
    EngineConfig {
      max_total: args.max_total,
      max_daily: args.max_daily,
    },
  );

  shell::run(BufReader::new(stdin()), stdout(), &mut engine)
}
