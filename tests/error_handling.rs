//! Stale identifiers, illegal transitions and fetch failures.

use record_browser::{
    spawn_fetch, Browser, BrowserConfig, BrowserError, BrowserEvent, Field, JsonSource,
    PageRequest, Record, RecordFields, RecordId,
};
use std::collections::HashSet;
use std::io::Write;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn test_browser() -> Browser {
    init_tracing();
    let mut browser = Browser::new(BrowserConfig::default()).unwrap();
    browser.load(vec![
        Record::new(1, "Alice", "a@x", "Admin"),
        Record::new(2, "Bob", "b@x", "User"),
    ]);
    browser
}

// --- Stale Identifiers ---

#[test]
fn test_stale_ids_are_noops() {
    let mut browser = test_browser();
    let ghost = RecordId::from(99);

    assert!(browser
        .update(&ghost, RecordFields::new("x", "y", "z"))
        .is_none());
    assert!(browser.remove(&ghost).is_none());
    assert!(!browser.toggle(&ghost));
    assert!(!browser.is_selected(&ghost));
    assert!(!browser.begin_edit(&ghost));
    assert!(!browser.edit_session().is_open());
    assert_eq!(browser.len(), 2);
}

#[test]
fn test_stale_begin_keeps_open_session() {
    let mut browser = test_browser();
    browser.begin_edit(&RecordId::from(1));
    assert!(!browser.begin_edit(&RecordId::from(99)));
    assert!(browser.edit_session().is_editing(&RecordId::from(1)));
}

#[test]
fn test_remove_many_with_unknown_ids() {
    let mut browser = test_browser();
    let handle = browser.subscribe_all();
    let ids: HashSet<RecordId> = [RecordId::from(98), RecordId::from(99)].into_iter().collect();

    assert!(browser.remove_many(&ids).is_empty());
    assert!(browser.delete_selected().is_empty());
    assert_eq!(browser.len(), 2);
    assert!(handle.drain().is_empty());
}

// --- Illegal Transitions ---

#[test]
fn test_closed_session_operations_are_noops() {
    let mut browser = test_browser();
    assert!(!browser.edit_field(Field::Name, "x"));
    assert!(!browser.cancel_edit());
    assert!(browser.save_edit().is_none());
    assert_eq!(browser.get(&RecordId::from(1)).unwrap().name, "Alice");
}

#[test]
fn test_save_after_reload_without_target() {
    let mut browser = test_browser();
    browser.begin_edit(&RecordId::from(2));
    browser.load(vec![Record::new(1, "Alice", "a@x", "Admin")]);
    assert!(browser.save_edit().is_none());
    assert_eq!(browser.len(), 1);
}

// --- Pagination Out Of Range ---

#[test]
fn test_out_of_range_pages_are_empty() {
    let mut browser = test_browser();

    browser.navigate(PageRequest::Previous);
    assert_eq!(browser.current_page(), 0);
    assert!(browser.page().is_empty());

    browser.navigate(PageRequest::GoTo(50));
    assert!(browser.rows().is_empty());

    browser.set_search_term("nobody");
    browser.navigate(PageRequest::Last);
    assert_eq!(browser.current_page(), 0);
    assert!(browser.page().is_empty());
}

// --- Fetch Failures ---

#[test]
fn test_malformed_feed_leaves_store_empty() {
    init_tracing();
    let mut browser = Browser::new(BrowserConfig::default()).unwrap();
    let handle = browser.subscribe_all();

    let loaded = browser.load_from(&JsonSource::from_json("<html>502</html>"));

    assert_eq!(loaded, 0);
    assert!(browser.is_empty());
    assert!(matches!(
        handle.try_recv().unwrap(),
        BrowserEvent::LoadFailed { .. }
    ));
}

#[test]
fn test_missing_file_source() {
    init_tracing();
    let mut browser = Browser::new(BrowserConfig::default()).unwrap();
    let loaded = browser.load_from(&JsonSource::from_path("/nonexistent/members.json"));
    assert_eq!(loaded, 0);
    assert!(browser.is_empty());
}

#[test]
fn test_failing_closure_source() {
    init_tracing();
    let mut browser = Browser::new(BrowserConfig::default()).unwrap();
    let offline = || -> record_browser::Result<Vec<Record>> {
        Err(BrowserError::SourceUnavailable("connection refused".to_string()))
    };
    assert_eq!(browser.load_from(&offline), 0);
}

#[test]
fn test_file_source_through_background_fetch() {
    init_tracing();
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id":"7","name":"Grace","email":"g@x","role":"admin"}}]"#
    )
    .unwrap();

    let mut browser = Browser::new(BrowserConfig::default()).unwrap();
    let mut handle = spawn_fetch(JsonSource::from_path(file.path())).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while !browser.apply_fetch(&mut handle) {
        assert!(Instant::now() < deadline, "fetch did not finish");
        std::thread::sleep(Duration::from_millis(5));
    }

    assert_eq!(browser.get(&RecordId::from(7)).unwrap().name, "Grace");
    assert!(!browser.apply_fetch(&mut handle));
}

// --- Configuration ---

#[test]
fn test_invalid_config() {
    let result = Browser::new(BrowserConfig {
        event_buffer_size: 0,
        ..Default::default()
    });
    assert!(matches!(result, Err(BrowserError::InvalidConfig(_))));
}
