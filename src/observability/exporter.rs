//! OpenTelemetry span exporter writing one JSON object per line.
//!
//! Each finished span becomes a single line in the trace file, with
//! RFC 3339 timestamps and flattened attributes, so traces can be inspected
//! with `jq` or any line-oriented tool.

use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::SystemTime;

/// Span exporter appending JSON lines to a file.
///
/// The file is opened lazily on the first export and kept open afterwards.
pub struct JsonLinesExporter {
    path: PathBuf,
    file: Mutex<Option<File>>,
    is_shutdown: AtomicBool,
}

impl JsonLinesExporter {
    /// Creates an exporter for `path`. Nothing is opened until the first export.
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            file: Mutex::new(None),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_lines(&self, batch: &[SpanData]) -> std::io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }

        let file = guard
            .as_mut()
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "trace file unavailable"))?;

        for span in batch {
            writeln!(file, "{}", span_to_json(span))?;
        }
        file.flush()
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let result = self
            .write_lines(&batch)
            .map_err(|e| TraceError::from(e.to_string()));
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("path", &self.path)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Builds a tracer provider that exports every span as soon as it ends.
pub fn build_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(JsonLinesExporter::new(path))
        .build()
}

fn span_to_json(span: &SpanData) -> JsonValue {
    let duration_us = span
        .end_time
        .duration_since(span.start_time)
        .map_or(0, |elapsed| elapsed.as_micros());

    let parent = if span.parent_span_id == SpanId::INVALID {
        JsonValue::Null
    } else {
        json!(format!("{:016x}", span.parent_span_id))
    };

    let (status, message) = match &span.status {
        Status::Unset => ("unset", String::new()),
        Status::Ok => ("ok", String::new()),
        Status::Error { description } => ("error", description.to_string()),
    };

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "name": event.name,
                "time": rfc3339(event.timestamp),
                "attributes": attributes_to_json(&event.attributes),
            })
        })
        .collect();

    json!({
        "name": span.name,
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "start": rfc3339(span.start_time),
        "end": rfc3339(span.end_time),
        "durationUs": u64::try_from(duration_us).unwrap_or(u64::MAX),
        "attributes": attributes_to_json(&span.attributes),
        "events": events,
        "status": status,
        "statusMessage": message,
    })
}

fn attributes_to_json(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), value_to_json(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        Value::Array(_) => json!(value.to_string()),
    }
}

fn rfc3339(time: SystemTime) -> String {
    chrono::DateTime::<chrono::Utc>::from(time).to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}
