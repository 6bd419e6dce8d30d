// crates/logging/src/json_format.rs
#![allow(missing_docs)]

use serde_json::{Map, Value};
use std::fmt;
use time::OffsetDateTime;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_serde::AsSerde;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// One JSON object per event:
/// `{"timestamp", "level", "target", "message", "fields": {..}}`.
#[derive(Default)]
pub struct JsonFormatter;

#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl JsonVisitor {
    fn insert(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, Value::from(value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.insert(field, Value::from(format!("{value:?}")));
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let mut obj = Map::new();
        let timestamp = OffsetDateTime::now_utc()
            .format(&time::macros::format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second]Z"
            ))
            .map_err(|_| fmt::Error)?;
        obj.insert("timestamp".into(), Value::String(timestamp));
        obj.insert(
            "level".into(),
            serde_json::to_value(event.metadata().level().as_serde()).map_err(|_| fmt::Error)?,
        );
        obj.insert(
            "target".into(),
            Value::String(event.metadata().target().to_string()),
        );
        if let Some(message) = visitor.message {
            obj.insert("message".into(), Value::String(message));
        }
        obj.insert("fields".into(), Value::Object(visitor.fields));

        let data = serde_json::to_string(&Value::Object(obj)).map_err(|_| fmt::Error)?;
        writer.write_str(&data)?;
        writer.write_char('\n')
    }
}
