//! OTLP JSON span formatter.
//!
//! Converts OpenTelemetry span data into OTLP/JSON documents, one document per
//! exported batch. The output can be replayed into any collector that accepts
//! the OTLP JSON encoding.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Formats span batches as OTLP JSON documents.
pub struct SpanFormatter {
    resource: Resource,
    scope_name: &'static str,
}

impl SpanFormatter {
    pub const fn new(resource: Resource, scope_name: &'static str) -> Self {
        Self { resource, scope_name }
    }

    /// Formats a batch of spans as one OTLP document:
    ///
    /// ```json
    /// {
    ///   "resourceSpans": [{
    ///     "resource": { "attributes": [...] },
    ///     "scopeSpans": [{ "scope": { "name": "FridgeChef" }, "spans": [...] }]
    ///   }]
    /// }
    /// ```
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attributes: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.as_str(), value))
            .collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attributes },
                "scopeSpans": [{
                    "scope": { "name": self.scope_name },
                    "spans": batch.iter().map(format_span).collect::<Vec<_>>()
                }]
            }]
        })
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("scope_name", &self.scope_name)
            .finish_non_exhaustive()
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (status_code, status_message) = status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent_span_id,
        "name": span.name,
        "kind": span_kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(event).collect::<Vec<_>>(),
        "links": span.links.iter().map(link).collect::<Vec<_>>(),
        "status": { "code": status_code, "message": status_message },
    })
}

/// OTLP encodes 64-bit timestamps as decimal strings.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default()
        .to_string()
}

const fn span_kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

fn attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| attribute(kv.key.as_str(), &kv.value))
        .collect()
}

fn attribute(key: &str, value: &Value) -> JsonValue {
    json!({ "key": key, "value": attribute_value(value) })
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    }
}

fn event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn attribute_values_use_otlp_encoding() {
        assert_eq!(attribute_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(attribute_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(
            attribute_value(&Value::String("egg".into())),
            json!({ "stringValue": "egg" })
        );
    }

    #[test]
    fn timestamps_are_decimal_strings() {
        let time = UNIX_EPOCH + Duration::from_nanos(1_500);
        assert_eq!(unix_nanos(time), "1500");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }

    #[test]
    fn empty_batch_carries_resource_and_scope() {
        let formatter = SpanFormatter::new(
            Resource::new(vec![KeyValue::new("service.name", "FridgeChef")]),
            "FridgeChef",
        );
        let document = formatter.format_batch(&[]);
        let resource_spans = &document["resourceSpans"][0];
        assert!(resource_spans["resource"]["attributes"]
            .as_array()
            .unwrap()
            .contains(&json!({ "key": "service.name", "value": { "stringValue": "FridgeChef" } })));
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], "FridgeChef");
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], json!([]));
    }
}
