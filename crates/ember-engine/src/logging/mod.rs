//! Logging utilities.
//!
//! Two layers:
//! - [`init_logging`] installs the process logger backing the `log` facade
//!   (`env_logger` natively, the browser console on wasm32).
//! - [`Logger`] is the sink engine components report through. It is passed
//!   explicitly to whoever needs it instead of living in a global.

mod init;
mod sink;

pub use init::{init_logging, LoggingConfig, WriteStyle};
pub use sink::{ConsoleSink, LogFacadeSink, LogLevel, LogSink, Logger};
