use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Severity of a message reported through a [`Logger`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
        })
    }
}

/// Destination for engine messages.
///
/// Implemented for any `Fn(LogLevel, &str) + Send + Sync`, so a closure is
/// usually enough.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

impl<F> LogSink for F
where
    F: Fn(LogLevel, &str) + Send + Sync,
{
    fn log(&self, level: LogLevel, message: &str) {
        self(level, message)
    }
}

/// Writes errors to stderr and everything else to stdout.
#[derive(Debug, Default, Copy, Clone)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn log(&self, level: LogLevel, message: &str) {
        // A closed stdio stream is not worth failing over.
        let _ = match level {
            LogLevel::Error => writeln!(std::io::stderr().lock(), "{message}"),
            LogLevel::Warning | LogLevel::Info => writeln!(std::io::stdout().lock(), "{message}"),
        };
    }
}

/// Forwards to the `log` facade under the `ember` target.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogFacadeSink;

impl LogSink for LogFacadeSink {
    fn log(&self, level: LogLevel, message: &str) {
        log::log!(target: "ember", log::Level::from(level), "{message}");
    }
}

/// Handle to a log sink, handed to every component that reports messages.
///
/// Clones share the same sink. A disabled logger drops everything.
#[derive(Clone)]
pub struct Logger {
    sink: Option<Arc<dyn LogSink>>,
}

impl Logger {
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            sink: Some(Arc::new(sink)),
        }
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(LogLevel, &str) + Send + Sync + 'static,
    {
        Self::new(f)
    }

    /// A logger that discards every message.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Errors to stderr, warnings and info to stdout.
    pub fn console() -> Self {
        Self::new(ConsoleSink)
    }

    /// Routes messages through whatever logger backs the `log` facade.
    pub fn log_facade() -> Self {
        Self::new(LogFacadeSink)
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        if let Some(sink) = &self.sink {
            sink.log(level, message.as_ref());
        }
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message);
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message);
    }
}

/// Sink behind `Logger::default()`. Browsers have no stdout/stderr, so
/// wasm32 goes through the `log` facade (and `console_log`).
#[cfg(not(target_arch = "wasm32"))]
type DefaultSink = ConsoleSink;
#[cfg(target_arch = "wasm32")]
type DefaultSink = LogFacadeSink;

impl Default for Logger {
    fn default() -> Self {
        Self::new(DefaultSink::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
