use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::Subscriber;

/// Configure and install the global `tracing` subscriber.
///
/// `RUST_LOG` always wins if set; otherwise the shell's own target runs at
/// `log_level` and every other target is capped at `warn`.
pub fn setup_logging(log_level: &str) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(format!("warn,doc_scheduler_cli={log_level}")));

  let subscriber = Subscriber::builder().with_target(true).with_env_filter(filter).finish();

  tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}
