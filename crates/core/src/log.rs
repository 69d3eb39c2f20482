//! Leveled, prefixed console output for the plugin.
//!
//! Every component receives a [`Logger`] handle at initialization; clones
//! share one threshold, so raising verbosity on the host's handle raises it
//! everywhere. Lines go through a [`LogSink`], which lets hosts keep the
//! default console output, bridge into their own `tracing` subscriber, or
//! capture lines in memory for assertions.

use serde::{Deserialize, Serialize};
use std::{
  fmt::Display,
  sync::{
    Arc, Mutex,
    atomic::{AtomicU8, Ordering},
  },
};

/// Tag carried by every emitted line.
pub const LOG_PREFIX: &str = "[In-Memoria]";

/// Severity of a log line, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  Debug = 0,
  Info = 1,
  Warn = 2,
  Error = 3,
}

impl LogLevel {
  fn from_u8(raw: u8) -> Self {
    match raw {
      0 => LogLevel::Debug,
      1 => LogLevel::Info,
      2 => LogLevel::Warn,
      _ => LogLevel::Error,
    }
  }

  // Trailing spacing is part of the icon; info and warn carry two spaces.
  fn icon(self) -> &'static str {
    match self {
      LogLevel::Debug => "🔍 ",
      LogLevel::Info => "ℹ️  ",
      LogLevel::Warn => "⚠️  ",
      LogLevel::Error => "❌ ",
    }
  }
}

/// Destination for formatted log lines.
pub trait LogSink: Send + Sync {
  fn write_line(&self, level: LogLevel, line: &str);
}

/// Default sink: debug/info on stdout, warn/error on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
  fn write_line(&self, level: LogLevel, line: &str) {
    if level >= LogLevel::Warn {
      eprintln!("{line}");
    } else {
      println!("{line}");
    }
  }
}

/// Forwards lines as `tracing` events for hosts that run a subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
  fn write_line(&self, level: LogLevel, line: &str) {
    match level {
      LogLevel::Debug => tracing::debug!("{line}"),
      LogLevel::Info => tracing::info!("{line}"),
      LogLevel::Warn => tracing::warn!("{line}"),
      LogLevel::Error => tracing::error!("{line}"),
    }
  }
}

/// Captures lines in memory. Assertion target for tests.
#[derive(Debug, Default)]
pub struct BufferSink {
  lines: Mutex<Vec<(LogLevel, String)>>,
}

impl BufferSink {
  /// Snapshot of everything written so far.
  pub fn lines(&self) -> Vec<(LogLevel, String)> {
    self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
  }

  /// Whether any captured line contains `needle`.
  pub fn contains(&self, needle: &str) -> bool {
    self.lines().iter().any(|(_, line)| line.contains(needle))
  }
}

impl LogSink for BufferSink {
  fn write_line(&self, level: LogLevel, line: &str) {
    if let Ok(mut lines) = self.lines.lock() {
      lines.push((level, line.to_string()));
    }
  }
}

/// Handle for plugin log output.
///
/// Cheap to clone; clones share the threshold and the sink. Emission never
/// fails and never blocks on anything but the sink itself.
#[derive(Clone)]
pub struct Logger {
  level: Arc<AtomicU8>,
  sink: Arc<dyn LogSink>,
}

impl Default for Logger {
  fn default() -> Self {
    Self::new(LogLevel::Info)
  }
}

impl Logger {
  /// Console logger with the given threshold.
  pub fn new(level: LogLevel) -> Self {
    Self::with_sink(level, Arc::new(ConsoleSink))
  }

  /// Logger writing to a custom sink.
  pub fn with_sink(level: LogLevel, sink: Arc<dyn LogSink>) -> Self {
    Self {
      level: Arc::new(AtomicU8::new(level as u8)),
      sink,
    }
  }

  pub fn level(&self) -> LogLevel {
    LogLevel::from_u8(self.level.load(Ordering::Relaxed))
  }

  /// Raise or lower the threshold for this handle and all of its clones.
  pub fn set_level(&self, level: LogLevel) {
    self.level.store(level as u8, Ordering::Relaxed);
  }

  pub fn debug(&self, message: impl Display) {
    self.emit(LogLevel::Debug, LogLevel::Debug.icon(), message);
  }

  pub fn info(&self, message: impl Display) {
    self.emit(LogLevel::Info, LogLevel::Info.icon(), message);
  }

  pub fn warn(&self, message: impl Display) {
    self.emit(LogLevel::Warn, LogLevel::Warn.icon(), message);
  }

  pub fn error(&self, message: impl Display) {
    self.emit(LogLevel::Error, LogLevel::Error.icon(), message);
  }

  /// Info-level emission with a success marker instead of the info icon.
  pub fn success(&self, message: impl Display) {
    self.emit(LogLevel::Info, "✅ ", message);
  }

  fn emit(&self, level: LogLevel, icon: &str, message: impl Display) {
    if level < self.level() {
      return;
    }
    self.sink.write_line(level, &format!("{LOG_PREFIX} {icon}{message}"));
  }
}
