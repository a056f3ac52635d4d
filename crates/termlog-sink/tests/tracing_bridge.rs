//! Integration tests for the tracing bridge.
//!
//! A collecting layer is installed as the thread-default subscriber so each
//! test observes exactly the events its own records produced.

#![cfg(feature = "tracing")]

use std::sync::{Arc, Mutex};

use termlog_sink::{Record, Severity, TRACING_TARGET, Template, TracingWriter, Writer};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

#[derive(Clone, Debug)]
struct Seen {
    level: Level,
    target: String,
    message: String,
    tag: String,
}

#[derive(Clone, Default)]
struct Collect(Arc<Mutex<Vec<Seen>>>);

#[derive(Default)]
struct Fields {
    message: String,
    tag: String,
}

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_owned(),
            "tag" => self.tag = value.to_owned(),
            _ => {}
        }
    }
}

impl<S> Layer<S> for Collect
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        self.0.lock().unwrap().push(Seen {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            message: fields.message,
            tag: fields.tag,
        });
    }
}

fn forward(severity: Severity, text: &str) {
    let template = Template::new("", format!("\n[{}] ", severity.tag()));
    TracingWriter.write_record(&Record::new(severity, &template, format_args!("{text}")));
}

// ============================================================================
// Level Mapping
// ============================================================================

/// Verifies each message severity arrives at the matching tracing level.
#[test]
fn records_become_events_at_matching_levels() {
    let collect = Collect::default();
    let subscriber = tracing_subscriber::registry().with(collect.clone());

    tracing::subscriber::with_default(subscriber, || {
        forward(Severity::Error, "e");
        forward(Severity::Warn, "w");
        forward(Severity::Info, "i");
        forward(Severity::Debug, "d");
    });

    let seen = collect.0.lock().unwrap().clone();
    let levels: Vec<Level> = seen.iter().map(|s| s.level).collect();
    assert_eq!(
        levels,
        vec![Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG]
    );
    assert!(seen.iter().all(|s| s.target == TRACING_TARGET));
    assert_eq!(seen[1].message, "w");
    assert_eq!(seen[1].tag, "warn");
}

/// Verifies silent records are never forwarded.
#[test]
fn silent_records_produce_no_event() {
    let collect = Collect::default();
    let subscriber = tracing_subscriber::registry().with(collect.clone());

    tracing::subscriber::with_default(subscriber, || {
        forward(Severity::Silent, "hidden");
    });

    assert!(collect.0.lock().unwrap().is_empty());
}
