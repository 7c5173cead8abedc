use clap::Parser;

/// Line-oriented scheduling shell: reads commands from stdin, writes replies
/// to stdout, one line at a time.
#[derive(Debug, Parser)]
#[command(name = "doc-scheduler", version, about)]
pub struct Args {
  /// Number of doctor timelines to allocate, indexed [0, doctors).
  #[arg(long, default_value_t = 100)]
  pub doctors: u32,

  /// Maximum live events per doctor timeline.
  #[arg(long = "max-total", default_value_t = 1000)]
  pub max_total: usize,

  /// Maximum live events per doctor per calendar day.
  #[arg(long = "max-daily", default_value_t = 7)]
  pub max_daily: usize,

  /// Log verbosity, overridden by RUST_LOG if set.
  #[arg(long = "log-level", default_value = "info")]
  pub log_level: String,
}
