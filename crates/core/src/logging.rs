use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where and how verbosely a component logs.
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// File prefix for the rolling log, e.g. `closure` gives `closure.log.2024-01-21`
    pub component: String,
    /// Mirror records to stderr in addition to the log file
    pub to_stderr: bool,
    /// Filter used when `RUST_LOG` is not set
    pub default_level: String,
}

impl LogOptions {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            to_stderr: true,
            default_level: "info".to_string(),
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.default_level = "debug".to_string();
        }
        self
    }

    pub fn to_stderr(mut self, to_stderr: bool) -> Self {
        self.to_stderr = to_stderr;
        self
    }
}

/// Directory holding the rolling log files (`~/.reflscope/logs`).
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".reflscope")
        .join("logs")
}

/// Installs the global subscriber. The returned guard flushes the file writer on drop.
pub fn init_logging(options: &LogOptions) -> WorkerGuard {
    let dir = log_dir();
    let _ = std::fs::create_dir_all(&dir);

    let file_appender = tracing_appender::rolling::daily(&dir, &options.component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&options.default_level));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    if options.to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}
