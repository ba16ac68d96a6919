//! Logging setup.
//!
//! The parser and interpreter only talk to the `log` facade; this module wires
//! that facade to `env_logger` for binaries that want console output.

mod init;

pub use init::{LoggingConfig, init_logging};
