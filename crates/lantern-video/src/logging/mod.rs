//! Logging utilities.
//!
//! Library code only uses the `log` facade. Binaries call [`init_logging`]
//! once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
