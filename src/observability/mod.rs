//! OpenTelemetry-based observability with file-based trace export.
//!
//! `tracing` spans are bridged into OpenTelemetry and exported as OTLP JSON
//! lines to a rotating file under the data directory:
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - **File**: `~/.local/share/fridgechef/fridgechef-otlp.json`
//! - **Rotation**: 10 MB per file, 3 backups
//! - **Level**: `RUST_LOG`, then the `trace_level` config key, then `info`
//!
//! # Usage
//!
//! ```rust,no_run
//! use fridgechef::observability::init_tracing;
//! use fridgechef::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("session started");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, init_tracing_in, DEFAULT_TRACE_LEVEL, SERVICE_NAME, TRACE_FILE_NAME};
