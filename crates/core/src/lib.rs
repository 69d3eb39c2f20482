mod log;

pub use log::{BufferSink, ConsoleSink, LOG_PREFIX, LogLevel, LogSink, Logger, TracingSink};
