// tests/runner.rs
//
// Full monitoring passes with a canned fetcher, in-memory store and a notifier
// that keeps what it was asked to send.
//
mod common;

use std::cell::RefCell;

use common::{holding, page};
use stalker::core::net::Fetch;
use stalker::diagnostics::Recorder;
use stalker::error::{FetchError, NotifyError};
use stalker::notify::{Message, Notifier};
use stalker::runner::{Monitor, RunRequest, RunSummary};
use stalker::specs::GridSpec;
use stalker::store::{MemoryStore, WalletStore};
use stalker::{Error, Timestamp};

struct Canned(RefCell<Vec<String>>);

impl Canned {
    fn new(pages: Vec<String>) -> Self {
        let mut pages = pages;
        pages.reverse();
        Canned(RefCell::new(pages))
    }
}

impl Fetch for Canned {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.0
            .borrow_mut()
            .pop()
            .ok_or(FetchError::Status { status: 404, url: url.to_string() })
    }
}

#[derive(Default)]
struct Outbox(Vec<Message>);

impl Notifier for Outbox {
    fn send(&mut self, msg: &Message) -> Result<(), NotifyError> {
        self.0.push(msg.clone());
        Ok(())
    }
}

struct Broken;

impl Notifier for Broken {
    fn send(&mut self, _msg: &Message) -> Result<(), NotifyError> {
        Err(NotifyError::Io(std::io::Error::other("smtp down")))
    }
}

fn ts(s: &str) -> Timestamp {
    Timestamp::parse(s).unwrap()
}

fn run(
    fetcher: &Canned,
    store: &mut MemoryStore,
    notifier: &mut dyn Notifier,
    url: &str,
    at: &str,
) -> Result<RunSummary, Error> {
    let grid = GridSpec::default();
    let mut diag = Recorder::default();
    let mut m = Monitor { grid: &grid, fetcher, store, notifier, diag: &mut diag };
    m.run(&RunRequest { wallet: "ike", url, csv_dir: None }, ts(at))
}

#[test]
fn records_only_on_holding_changes() {
    let fetcher = Canned::new(vec![
        page(&[holding("CDRCDR", "2", "100,0")]),
        page(&[holding("CDRCDR", "2", "120,0")]), // price only
        page(&[holding("CDRCDR", "3", "120,0")]), // bought one
    ]);
    let mut store = MemoryStore::default();
    let mut outbox = Outbox::default();

    let first = run(&fetcher, &mut store, &mut outbox, "https://b/w", "2024-01-01 09:00:00").unwrap();
    assert!(first.created && first.changed && first.notified);
    assert!(first.changes.is_none());

    let second = run(&fetcher, &mut store, &mut outbox, "https://b/w", "2024-01-02 09:00:00").unwrap();
    assert!(!second.created && !second.changed && !second.notified);
    assert!(second.changes.unwrap().is_empty());

    let third = run(&fetcher, &mut store, &mut outbox, "https://b/w", "2024-01-03 09:00:00").unwrap();
    assert!(third.changed && third.notified);
    assert_eq!(third.changes.unwrap().resized.len(), 1);

    let w = store.load("ike").unwrap().unwrap();
    assert_eq!(w.snapshots().len(), 2);
    assert_eq!(w.created_at, ts("2024-01-01 09:00:00"));
    assert_eq!(w.last_updated, ts("2024-01-03 09:00:00"));

    assert_eq!(outbox.0.len(), 2);
    assert!(outbox.0[0].subject.contains("tracking started"));
    assert!(outbox.0[1].subject.contains("holdings changed"));
    assert!(outbox.0[1].body.contains("~ CDR: 2 -> 3"));
}

#[test]
fn failed_capture_leaves_store_untouched() {
    let fetcher = Canned::new(vec![
        page(&[holding("CDRCDR", "2", "100,0")]),
        String::from("<html>maintenance</html>"),
        page(&[holding("CDRCDR", "x", "100,0")]),
    ]);
    let mut store = MemoryStore::default();
    let mut outbox = Outbox::default();

    run(&fetcher, &mut store, &mut outbox, "u", "2024-01-01 09:00:00").unwrap();

    let err = run(&fetcher, &mut store, &mut outbox, "u", "2024-01-02 09:00:00").err().unwrap();
    assert!(matches!(err, Error::Capture(stalker::CaptureError::GridNotFound { .. })));

    let err = run(&fetcher, &mut store, &mut outbox, "u", "2024-01-03 09:00:00").err().unwrap();
    assert!(matches!(err, Error::Capture(stalker::CaptureError::AssetMapping(_))));

    let w = store.load("ike").unwrap().unwrap();
    assert_eq!(w.snapshots().len(), 1);
    assert_eq!(w.last_updated, ts("2024-01-01 09:00:00"));
    assert_eq!(outbox.0.len(), 1);
}

#[test]
fn fetch_failure_is_reported() {
    let fetcher = Canned::new(Vec::new());
    let mut store = MemoryStore::default();
    let err = run(&fetcher, &mut store, &mut Outbox::default(), "u", "2024-01-01 09:00:00").err().unwrap();
    assert!(matches!(err, Error::Fetch(FetchError::Status { status: 404, .. })));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn notifier_failure_is_not_fatal() {
    let fetcher = Canned::new(vec![page(&[holding("CDRCDR", "2", "100,0")])]);
    let mut store = MemoryStore::default();
    let s = run(&fetcher, &mut store, &mut Broken, "u", "2024-01-01 09:00:00").unwrap();
    assert!(s.changed && !s.notified);
    assert_eq!(store.load("ike").unwrap().unwrap().snapshots().len(), 1);
}

#[test]
fn moved_url_is_saved_without_new_snapshot() {
    let fetcher = Canned::new(vec![
        page(&[holding("CDRCDR", "2", "100,0")]),
        page(&[holding("CDRCDR", "2", "100,0")]),
    ]);
    let mut store = MemoryStore::default();
    let mut outbox = Outbox::default();
    run(&fetcher, &mut store, &mut outbox, "old", "2024-01-01 09:00:00").unwrap();
    let s = run(&fetcher, &mut store, &mut outbox, "new", "2024-01-02 09:00:00").unwrap();
    assert!(!s.changed);

    let w = store.load("ike").unwrap().unwrap();
    assert_eq!(w.url, "new");
    assert_eq!(w.snapshots().len(), 1);
}

#[test]
fn csv_dump_written_next_to_run() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = Canned::new(vec![page(&[holding("CDRCDR", "2,5", "100,0")])]);
    let mut store = MemoryStore::default();
    let mut outbox = Outbox::default();
    let grid = GridSpec::default();
    let mut diag = Recorder::default();

    let mut m = Monitor { grid: &grid, fetcher: &fetcher, store: &mut store, notifier: &mut outbox, diag: &mut diag };
    let s = m
        .run(&RunRequest { wallet: "ike", url: "u", csv_dir: Some(dir.path()) }, ts("2024-01-01 09:00:00"))
        .unwrap();

    let path = s.csv.unwrap();
    assert!(path.ends_with("ike_20240101_090000.csv"));
    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("Asset,Daily Change [%],Units"));
    assert!(text.contains("CDRCDR,\"0,0\",\"2,5\""));
}
