//! Tracing initialization
//!
//! Installs a global `tracing` subscriber filtered by `RUST_LOG` and formatted according to
//! the configured `LogFormat`.

mod init_basic;

pub use init_basic::{default_filter, init_telemetry, shutdown_telemetry};
