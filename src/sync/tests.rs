//! Tests for traversal state and advance logic

use super::*;
use crate::types::HeadersPage;
use pretty_assertions::assert_eq;

fn page(records: &[(u64, &str)]) -> HeadersPage {
    HeadersPage {
        data: records
            .iter()
            .map(|(height, hash)| crate::types::BlockHeader {
                height: *height,
                hash: (*hash).to_string(),
            })
            .collect(),
    }
}

#[test]
fn test_next_page_from_non_empty_page() {
    let next = NextPage::from_page(&page(&[(0, "h0"), (1, "h1")]));
    assert!(next.is_continue());
    assert_eq!(
        next,
        NextPage::Continue {
            last_seen_hash: "h1".to_string(),
            last_height: 1,
        }
    );
}

#[test]
fn test_next_page_from_empty_page() {
    let next = NextPage::from_page(&page(&[]));
    assert!(next.is_done());
    assert!(!next.is_continue());
}

#[test]
fn test_state_starts_at_sentinel() {
    let state = SyncState::new();
    assert!(state.cursor.is_none());
    assert_eq!(state.trace_label(), CURSOR_SENTINEL);
    assert_eq!(state.pages, 0);
    assert_eq!(state.headers, 0);
    assert!(!state.done);
}

#[test]
fn test_state_advances_cursor() {
    let mut state = SyncState::new();
    let p = page(&[(0, "h0"), (1, "h1")]);
    let next = NextPage::from_page(&p);
    state.apply(&p, next);

    assert_eq!(state.cursor.as_deref(), Some("h1"));
    assert_eq!(state.trace_label(), "1");
    assert_eq!(state.pages, 1);
    assert_eq!(state.headers, 2);
    assert!(!state.done);
}

#[test]
fn test_state_terminates_on_empty_page() {
    let mut state = SyncState::new();
    let p1 = page(&[(0, "h0")]);
    state.apply(&p1, NextPage::from_page(&p1));

    let p2 = page(&[]);
    state.apply(&p2, NextPage::from_page(&p2));

    assert!(state.done);
    assert_eq!(state.pages, 2);
    assert_eq!(state.headers, 1);
    // The terminal page leaves the cursor where the last data page put it.
    assert_eq!(state.cursor.as_deref(), Some("h0"));
    assert_eq!(state.last_height, Some(0));
}

#[test]
fn test_empty_first_page_terminates_immediately() {
    let mut state = SyncState::new();
    let p = page(&[]);
    state.apply(&p, NextPage::from_page(&p));

    assert!(state.done);
    assert_eq!(state.pages, 1);
    assert_eq!(state.headers, 0);
    assert!(state.cursor.is_none());
    assert!(state.last_height.is_none());
}
