//! Structured logging and OpenTelemetry span export.
//!
//! Every controller handler and pipeline pass runs inside a `tracing` span.
//! This module wires those spans to an output: either a stderr formatter, or
//! an OpenTelemetry tracer whose spans are written to a file as JSON lines.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → file
//! ```
//!
//! # Configuration
//!
//! Trace level is controlled via `trace_level` in [`Config`](crate::Config),
//! which accepts any `EnvFilter` directive (`"debug"`,
//! `"datagrid::pipeline=trace"`). Default: `"info"`
//!
//! The export file is set with `trace_file`. Without it, output goes to stderr.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: JSON-lines span exporter and tracer provider

pub mod exporter;
mod init;

pub use init::init_tracing;
