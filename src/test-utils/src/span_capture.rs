// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Record the spans created while a test runs.
//!
//! ```
//! let (_guard, spans) = google_cloud_test_utils::span_capture::capture();
//! tracing::info_span!("my_span", answer = 42).in_scope(|| {});
//! let got = spans.names();
//! assert_eq!(got, vec!["my_span".to_string()]);
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tracing::{Subscriber, field, span};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// A span observed by [capture].
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedSpan {
    pub name: String,
    pub target: String,
    /// The span fields, formatted as strings.
    pub fields: BTreeMap<String, String>,
}

/// The spans recorded since [capture] was called.
#[derive(Clone, Debug, Default)]
pub struct SpanLog {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

impl SpanLog {
    /// Returns a copy of all the spans, in creation order.
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.lock().clone()
    }

    /// Returns the names of all the spans, in creation order.
    pub fn names(&self) -> Vec<String> {
        self.lock().iter().map(|s| s.name.clone()).collect()
    }

    /// Finds the first span with the given name.
    pub fn find(&self, name: &str) -> Option<CapturedSpan> {
        self.lock().iter().find(|s| s.name == name).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CapturedSpan>> {
        self.spans.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Starts capturing spans on the current thread.
///
/// Capture stops when the returned guard is dropped. Use a single-threaded
/// runtime (the `#[tokio::test]` default) when the code under test is async.
pub fn capture() -> (tracing::subscriber::DefaultGuard, SpanLog) {
    let log = SpanLog::default();
    let layer = CaptureLayer { log: log.clone() };
    let subscriber = tracing_subscriber::registry().with(layer);
    (tracing::subscriber::set_default(subscriber), log)
}

struct CaptureLayer {
    log: SpanLog,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        attrs.record(&mut FieldVisitor(&mut fields));
        let metadata = attrs.metadata();
        self.log.lock().push(CapturedSpan {
            name: metadata.name().to_string(),
            target: metadata.target().to_string(),
            fields,
        });
    }
}

struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

impl field::Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{value:?}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn records_names_and_fields() {
        let (_guard, log) = capture();
        let outer = tracing::info_span!("outer", project = "p", count = 3);
        outer.in_scope(|| {
            let _inner = tracing::debug_span!("inner").entered();
        });
        assert_eq!(log.names(), vec!["outer".to_string(), "inner".to_string()]);
        let got = log.find("outer").expect("outer span is captured");
        assert_eq!(got.fields.get("project").map(String::as_str), Some("p"));
        assert_eq!(got.fields.get("count").map(String::as_str), Some("3"));
        assert!(got.target.contains("span_capture"), "{got:?}");
    }

    #[test]
    fn stops_after_guard_drops() {
        let (guard, log) = capture();
        drop(guard);
        let _span = tracing::info_span!("ignored").entered();
        assert!(log.spans().is_empty(), "{:?}", log.spans());
    }

    #[tokio::test]
    async fn captures_instrumented_futures() {
        #[tracing::instrument]
        async fn work(id: u32) -> u32 {
            id + 1
        }
        let (_guard, log) = capture();
        assert_eq!(work(41).await, 42);
        let got = log.find("work").expect("work span is captured");
        assert_eq!(got.fields.get("id").map(String::as_str), Some("41"));
    }
}
