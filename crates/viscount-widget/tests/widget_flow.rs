//! Widget behavior against scripted counter sources.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use viscount_core::error::{CounterError, ErrorKind, Result};
use viscount_core::WidgetPolicy;
use viscount_widget::{CounterSource, FetchedResponse, Page, RunOutcome, VisitorCounterWidget};

const ID: &str = "visitor-count";

/// Replays canned answers in order and counts requests.
#[derive(Default)]
struct Scripted {
    answers: Mutex<VecDeque<Result<FetchedResponse>>>,
    calls: AtomicUsize,
}

impl Scripted {
    fn new(answers: Vec<Result<FetchedResponse>>) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(answers.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn ok(status: u16, body: &'static str) -> Result<FetchedResponse> {
        Ok(FetchedResponse::new(status, body))
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CounterSource for Scripted {
    async fn fetch(&self) -> Result<FetchedResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected extra fetch")
    }
}

fn widget(source: Arc<Scripted>, page: Arc<Page>, policy: WidgetPolicy) -> VisitorCounterWidget {
    VisitorCounterWidget::new(source, page, ID, policy)
}

#[tokio::test]
async fn views_value_is_displayed() {
    let src = Scripted::new(vec![Scripted::ok(200, r#"{"views": 42}"#)]);
    let page = Arc::new(Page::with_element(ID, "..."));

    let out = widget(src.clone(), page.clone(), WidgetPolicy::views_variant()).run().await;

    assert_eq!(out, RunOutcome::Displayed("42".into()));
    assert_eq!(page.text_content(ID).as_deref(), Some("42"));
    assert_eq!(src.calls(), 1);
}

#[tokio::test]
async fn count_value_is_displayed() {
    let src = Scripted::new(vec![Scripted::ok(200, r#"{"count": 42}"#)]);
    let page = Arc::new(Page::with_element(ID, ""));

    widget(src, page.clone(), WidgetPolicy::count_variant()).run().await;

    assert_eq!(page.text_content(ID).as_deref(), Some("42"));
}

#[tokio::test]
async fn server_error_leaves_element_untouched() {
    let src = Scripted::new(vec![Scripted::ok(500, "Internal Server Error")]);
    let page = Arc::new(Page::with_element(ID, "..."));

    let out = widget(src, page.clone(), WidgetPolicy::views_variant()).run().await;

    assert_eq!(
        out,
        RunOutcome::Failed { kind: ErrorKind::HttpStatus, placeholder_written: false }
    );
    assert_eq!(page.text_content(ID).as_deref(), Some("..."));
}

#[tokio::test]
async fn server_error_writes_placeholder() {
    let src = Scripted::new(vec![Scripted::ok(500, r#"{"count": 9}"#)]);
    let page = Arc::new(Page::with_element(ID, "..."));

    let out = widget(src, page.clone(), WidgetPolicy::count_variant()).run().await;

    assert_eq!(
        out,
        RunOutcome::Failed { kind: ErrorKind::HttpStatus, placeholder_written: true }
    );
    assert_eq!(page.text_content(ID).as_deref(), Some("—"));
}

#[tokio::test]
async fn malformed_body_fails_like_http_error() {
    for (policy, expected) in [
        (WidgetPolicy::views_variant(), "..."),
        (WidgetPolicy::count_variant(), "—"),
    ] {
        let src = Scripted::new(vec![Scripted::ok(200, "<html>oops</html>")]);
        let page = Arc::new(Page::with_element(ID, "..."));

        let out = widget(src, page.clone(), policy).run().await;

        assert!(matches!(out, RunOutcome::Failed { kind: ErrorKind::InvalidJson, .. }));
        assert_eq!(page.text_content(ID).as_deref(), Some(expected));
    }
}

#[tokio::test]
async fn missing_field_is_a_failure() {
    let src = Scripted::new(vec![Scripted::ok(200, r#"{"count": 42}"#)]);
    let page = Arc::new(Page::with_element(ID, "..."));

    let out = widget(src, page.clone(), WidgetPolicy::views_variant()).run().await;

    assert!(matches!(out, RunOutcome::Failed { kind: ErrorKind::MissingField, .. }));
    assert_eq!(page.text_content(ID).as_deref(), Some("..."));
}

#[tokio::test]
async fn transport_error_is_caught() {
    let src = Scripted::new(vec![Err(CounterError::Transport("connection refused".into()))]);
    let page = Arc::new(Page::with_element(ID, "..."));

    let out = widget(src, page.clone(), WidgetPolicy::count_variant()).run().await;

    assert_eq!(
        out,
        RunOutcome::Failed { kind: ErrorKind::Transport, placeholder_written: true }
    );
}

#[tokio::test]
async fn before_fetch_without_element_makes_no_request() {
    let src = Scripted::new(vec![]);
    let page = Arc::new(Page::new());

    let out = widget(src.clone(), page, WidgetPolicy::count_variant()).run().await;

    assert_eq!(out, RunOutcome::SkippedNoElement);
    assert_eq!(src.calls(), 0);
}

#[tokio::test]
async fn after_fetch_without_element_discards_result() {
    let src = Scripted::new(vec![Scripted::ok(200, r#"{"views": 5}"#)]);
    let page = Arc::new(Page::new());

    let out = widget(src.clone(), page.clone(), WidgetPolicy::views_variant()).run().await;

    assert_eq!(out, RunOutcome::Discarded("5".into()));
    assert_eq!(src.calls(), 1);
    assert_eq!(page.text_content(ID), None);
}

#[tokio::test]
async fn placeholder_needs_an_element() {
    let mut policy = WidgetPolicy::count_variant();
    policy.lookup = viscount_core::ElementLookup::AfterFetch;
    let src = Scripted::new(vec![Scripted::ok(503, "")]);
    let page = Arc::new(Page::new());

    let out = widget(src, page.clone(), policy).run().await;

    assert_eq!(
        out,
        RunOutcome::Failed { kind: ErrorKind::HttpStatus, placeholder_written: false }
    );
    assert_eq!(page.text_content(ID), None);
}

#[tokio::test]
async fn two_runs_show_latest_value() {
    let src = Scripted::new(vec![
        Scripted::ok(200, r#"{"views": 1}"#),
        Scripted::ok(200, r#"{"views": 2}"#),
    ]);
    let page = Arc::new(Page::with_element(ID, ""));
    let w = widget(src.clone(), page.clone(), WidgetPolicy::views_variant());

    w.run().await;
    w.run().await;

    assert_eq!(src.calls(), 2);
    assert_eq!(page.text_content(ID).as_deref(), Some("2"));
}

#[tokio::test]
async fn failure_after_success_keeps_last_value() {
    let src = Scripted::new(vec![
        Scripted::ok(200, r#"{"views": 10}"#),
        Scripted::ok(502, "bad gateway"),
    ]);
    let page = Arc::new(Page::with_element(ID, ""));
    let w = widget(src, page.clone(), WidgetPolicy::views_variant());

    w.run().await;
    w.run().await;

    assert_eq!(page.text_content(ID).as_deref(), Some("10"));
}

#[tokio::test]
async fn fetch_reading_does_not_touch_page() {
    let src = Scripted::new(vec![Scripted::ok(200, r#"{"views": 3}"#)]);
    let page = Arc::new(Page::with_element(ID, "..."));
    let w = widget(src, page.clone(), WidgetPolicy::views_variant());

    let reading = w.fetch_reading().await.unwrap();

    assert_eq!(reading.as_u64(), Some(3));
    assert_eq!(page.text_content(ID).as_deref(), Some("..."));
}

#[tokio::test]
async fn element_removed_between_runs() {
    let src = Scripted::new(vec![Scripted::ok(200, r#"{"count": 1}"#)]);
    let page = Arc::new(Page::with_element(ID, ""));
    let w = widget(src.clone(), page.clone(), WidgetPolicy::count_variant());

    assert_eq!(page.remove_element(ID).as_deref(), Some(""));
    assert_eq!(w.run().await, RunOutcome::SkippedNoElement);

    page.insert_element(ID, "");
    assert_eq!(w.run().await, RunOutcome::Displayed("1".into()));
    assert_eq!(src.calls(), 1);
}
