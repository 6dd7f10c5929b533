//! Integration test: drive the select -> upload -> render lifecycle the
//! way the browser front end does, with channels standing in for
//! `fetch` and the deadline timer.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::{Cell, RefCell};
use std::future::Future;

use csvscope_core::deadline;
use csvscope_core::{ClientError, PageView, SelectedFile, Session, response, validate};
use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::future::{lazy, pending, ready};

const BODY: &str = r#"{
    "preview": [{"a": 1, "b": "x"}, {"a": 2, "b": null}],
    "schema": {
        "columns": ["a", "b"],
        "types": {"a": "int64", "b": "object"},
        "null_counts": {"a": 0, "b": 1}
    }
}"#;

/// What a simulated `fetch` resolves to: status code, reason phrase and
/// body, or a transport failure.
type Wire = Result<(u16, String, String), ClientError>;

/// Mirror of the front end's upload handler: begin, race the transport
/// against the deadline, then finish with whatever won.
///
/// Returns `None` without touching the transport if the session refused
/// to start an upload.
fn trigger_upload<T, D>(
    session: &RefCell<Session>,
    requests: &Cell<usize>,
    transport: T,
    timer: D,
) -> Option<impl Future<Output = ()>>
where
    T: Future<Output = Wire>,
    D: Future<Output = ()>,
{
    let (ticket, _file) = session.borrow_mut().begin_upload().ok()?;
    requests.set(requests.get() + 1);
    Some(async move {
        let exchange = async {
            let (code, text, body) = transport.await?;
            response::from_reply(code, &text, &body)
        };
        let outcome = deadline::race(exchange, timer)
            .await
            .or_elapsed(|| Err(ClientError::TimedOut));
        session.borrow_mut().finish(ticket, outcome);
    })
}

/// A transport that answers immediately.
fn respond(code: u16, text: &str, body: &str) -> impl Future<Output = Wire> + use<> {
    ready(Ok((code, text.to_owned(), body.to_owned())))
}

/// A transport that fails the test if it is ever awaited.
fn must_not_send() -> impl Future<Output = Wire> {
    lazy(|_| -> Wire { panic!("no request may be sent") })
}

fn select(session: &RefCell<Session>, name: &str) {
    match validate(Some(name)) {
        Ok(name) => session
            .borrow_mut()
            .select(SelectedFile::new(name, b"a,b\n1,x\n2,\n".to_vec())),
        Err(e) => session.borrow_mut().reject(e),
    }
}

fn view(session: &RefCell<Session>) -> PageView {
    PageView::from_session(&session.borrow())
}

#[test]
fn upload_without_file_never_reaches_network() {
    let session = RefCell::new(Session::new());
    let requests = Cell::new(0);

    let started = trigger_upload(&session, &requests, must_not_send(), pending());

    assert!(started.is_none());
    assert_eq!(requests.get(), 0);
    assert_eq!(
        view(&session).error.as_deref(),
        Some("Please select a CSV file first")
    );
}

#[test]
fn invalid_drop_keeps_earlier_selection() {
    let session = RefCell::new(Session::new());
    select(&session, "good.csv");
    select(&session, "bad.xlsx");

    let page = view(&session);
    assert_eq!(page.prompt.text(), "Selected: good.csv");
    assert_eq!(page.error.as_deref(), Some("Only .csv files are supported."));
}

#[test]
fn successful_upload_renders_schema_and_table() {
    let session = RefCell::new(Session::new());
    let requests = Cell::new(0);
    let mut pool = LocalPool::new();

    select(&session, "data.csv");
    let (wire_tx, wire_rx) = oneshot::channel::<Wire>();
    let transport = async { wire_rx.await.expect("sender kept alive") };
    let upload = trigger_upload(&session, &requests, transport, pending()).unwrap();

    assert!(view(&session).busy);
    wire_tx.send(Ok((200, "OK".to_owned(), BODY.to_owned()))).unwrap();
    pool.run_until(upload);

    let page = view(&session);
    assert!(!page.busy);
    assert!(page.error.is_none());
    assert_eq!(page.summary.unwrap().columns, "a, b");
    let table = page.table.unwrap();
    assert_eq!(table.header, ["a", "b"]);
    assert_eq!(table.rows.len(), 2);
    assert!(table.rows[1][1].is_null());
}

#[test]
fn second_trigger_while_in_flight_issues_no_request() {
    let session = RefCell::new(Session::new());
    let requests = Cell::new(0);

    select(&session, "data.csv");
    let first = trigger_upload(&session, &requests, pending(), pending());
    let second = trigger_upload(&session, &requests, must_not_send(), pending());

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(requests.get(), 1);
}

#[test]
fn deadline_beats_late_response() {
    let session = RefCell::new(Session::new());
    let requests = Cell::new(0);
    let mut pool = LocalPool::new();

    select(&session, "data.csv");
    let (wire_tx, wire_rx) = oneshot::channel::<Wire>();
    let (timer_tx, timer_rx) = oneshot::channel::<()>();

    let upload = trigger_upload(
        &session,
        &requests,
        async {
            match wire_rx.await {
                Ok(wire) => wire,
                Err(_) => Err(ClientError::Network("aborted".to_owned())),
            }
        },
        async {
            timer_rx.await.unwrap();
        },
    )
    .unwrap();

    timer_tx.send(()).unwrap();
    pool.run_until(upload);

    // The response turns up after the deadline: nothing is listening.
    assert!(wire_tx.send(Ok((200, "OK".to_owned(), BODY.to_owned()))).is_err());

    let page = view(&session);
    assert!(!page.busy);
    assert_eq!(page.error.as_deref(), Some("Upload timed out"));
    assert!(page.summary.is_none());
    assert!(page.table.is_none());
}

#[test]
fn server_error_then_retry_then_reselect() {
    let session = RefCell::new(Session::new());
    let requests = Cell::new(0);
    let mut pool = LocalPool::new();

    select(&session, "data.csv");

    // First attempt succeeds.
    let upload = trigger_upload(&session, &requests, respond(200, "OK", BODY), pending()).unwrap();
    pool.run_until(upload);
    assert!(view(&session).table.is_some());

    // Retry fails with a 500: the earlier preview stays, the error shows.
    let transport = respond(500, "Internal Server Error", "");
    let upload = trigger_upload(&session, &requests, transport, pending()).unwrap();
    pool.run_until(upload);
    let page = view(&session);
    assert_eq!(page.error.as_deref(), Some("Error: 500 Internal Server Error"));
    assert!(page.table.is_some(), "failed retry keeps the earlier preview");

    // Picking a new file clears everything before any upload starts.
    select(&session, "next.csv");
    let page = view(&session);
    assert_eq!(page.prompt.text(), "Selected: next.csv");
    assert!(page.error.is_none());
    assert!(page.summary.is_none());
    assert!(page.table.is_none());
    assert_eq!(requests.get(), 2);
}

#[test]
fn malformed_success_body_is_a_failure() {
    let session = RefCell::new(Session::new());
    let requests = Cell::new(0);
    let mut pool = LocalPool::new();

    select(&session, "data.csv");
    let transport = respond(200, "OK", r#"{"detail": "ok"}"#);
    let upload = trigger_upload(&session, &requests, transport, pending()).unwrap();
    pool.run_until(upload);

    let page = view(&session);
    assert!(!page.busy);
    assert!(
        page.error
            .as_deref()
            .is_some_and(|e| e.starts_with("Unexpected response from server")),
        "unexpected error: {:?}",
        page.error
    );
}

#[test]
fn uploading_twice_sends_two_requests() {
    let session = RefCell::new(Session::new());
    let requests = Cell::new(0);
    let mut pool = LocalPool::new();

    select(&session, "data.csv");
    for _ in 0..2 {
        let upload = trigger_upload(&session, &requests, respond(200, "OK", BODY), pending()).unwrap();
        pool.run_until(upload);
    }
    assert_eq!(requests.get(), 2);
    assert!(view(&session).table.is_some());
}

#[test]
fn reselect_mid_upload_starts_no_second_request() {
    let session = RefCell::new(Session::new());
    let requests = Cell::new(0);
    let mut pool = LocalPool::new();

    select(&session, "a.csv");
    let (wire_tx, wire_rx) = oneshot::channel::<Wire>();
    let transport = async { wire_rx.await.expect("sender kept alive") };
    let first = trigger_upload(&session, &requests, transport, pending()).unwrap();

    select(&session, "b.csv");
    let page = view(&session);
    assert!(page.busy, "first request is still outstanding");
    assert_eq!(page.prompt.text(), "Selected: b.csv");
    assert!(trigger_upload(&session, &requests, must_not_send(), pending()).is_none());
    assert_eq!(requests.get(), 1);

    // The first request settles; its result belongs to a.csv and is dropped.
    wire_tx.send(Ok((200, "OK".to_owned(), BODY.to_owned()))).unwrap();
    pool.run_until(first);
    let page = view(&session);
    assert!(!page.busy);
    assert!(page.table.is_none());

    let second = trigger_upload(&session, &requests, respond(200, "OK", BODY), pending()).unwrap();
    pool.run_until(second);
    assert_eq!(requests.get(), 2);
    assert!(view(&session).table.is_some());
}

#[test]
fn not_found_without_reason_phrase_shows_code() {
    let session = RefCell::new(Session::new());
    let requests = Cell::new(0);
    let mut pool = LocalPool::new();

    select(&session, "data.csv");
    let upload = trigger_upload(&session, &requests, respond(404, "", ""), pending()).unwrap();
    pool.run_until(upload);

    assert_eq!(view(&session).error.as_deref(), Some("Error: 404"));
}
