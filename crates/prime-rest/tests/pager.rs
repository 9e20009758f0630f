//! Pager traversal tests against a synthetic paginated source
//!
//! Pages are served by an injected fetch closure, so every test can count
//! exactly how many fetches a traversal issued.

use futures::future::BoxFuture;
use prime_rest::{Paginated, Pagination, PaginationConfig, Pager, RestError, RestResult};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct NumbersPage {
    numbers: Vec<u32>,
    pagination: Pagination,
}

impl Paginated for NumbersPage {
    fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

/// Build `page_count` pages of `page_size` consecutive numbers starting at 1
///
/// Page i links to page i+1 through cursor "c{i+1}"; the last page has
/// `has_next = false` and an empty cursor.
fn make_pages(page_count: usize, page_size: u32) -> Vec<NumbersPage> {
    (0..page_count)
        .map(|i| {
            let start = i as u32 * page_size + 1;
            let last = i + 1 == page_count;
            NumbersPage {
                numbers: (start..start + page_size).collect(),
                pagination: Pagination {
                    next_cursor: if last { String::new() } else { format!("c{}", i + 1) },
                    has_next: !last,
                    sort_direction: None,
                },
            }
        })
        .collect()
}

/// Fetch closure serving pages 1.. by cursor, counting every invocation
fn fetcher(
    pages: &[NumbersPage],
    calls: Arc<AtomicUsize>,
) -> impl Fn(String) -> BoxFuture<'static, RestResult<NumbersPage>> + Send + Sync {
    let by_cursor: HashMap<String, NumbersPage> = pages
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, page)| (format!("c{}", i), page.clone()))
        .collect();

    move |cursor: String| {
        calls.fetch_add(1, Ordering::SeqCst);
        let page = by_cursor.get(&cursor).cloned();
        Box::pin(async move {
            page.ok_or_else(|| RestError::Api {
                status: 404,
                status_text: "Not Found".to_string(),
                url: format!("mock://pages?cursor={}", cursor),
                message: "no such page".to_string(),
            })
        })
    }
}

fn pager_with(
    pages: &[NumbersPage],
    config: PaginationConfig,
    calls: Arc<AtomicUsize>,
) -> Pager<'static, NumbersPage, u32> {
    Pager::new(
        pages[0].clone(),
        |page| page.numbers.as_slice(),
        config,
        fetcher(pages, calls),
    )
}

fn unbounded() -> PaginationConfig {
    PaginationConfig {
        max_pages: 0,
        max_items: 0,
        default_limit: 0,
    }
}

#[tokio::test]
async fn fetch_all_walks_every_page_in_order() {
    // 3 pages of 2 items: 6 items, 1 initial page + exactly 2 fetches.
    let pages = make_pages(3, 2);
    let calls = Arc::new(AtomicUsize::new(0));
    let mut pager = pager_with(&pages, unbounded(), calls.clone());

    let (items, err) = pager.fetch_all().await;
    assert!(err.is_none());
    assert_eq!(items, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn fetch_all_respects_max_pages() {
    // max_pages = 2 consumes the starting page plus one more, and never
    // requests page 3.
    let pages = make_pages(5, 2);
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PaginationConfig {
        max_pages: 2,
        ..unbounded()
    };
    let mut pager = pager_with(&pages, config, calls.clone());

    let (items, err) = pager.fetch_all().await;
    assert!(err.is_none());
    assert_eq!(items, vec![1, 2, 3, 4]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fetch_all_truncates_to_max_items() {
    // Pages hold 2 items; max_items = 3 needs the second page but must
    // trim its overshoot and never fetch a third.
    let pages = make_pages(5, 2);
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PaginationConfig {
        max_items: 3,
        ..unbounded()
    };
    let mut pager = pager_with(&pages, config, calls.clone());

    let (items, err) = pager.fetch_all().await;
    assert!(err.is_none());
    assert_eq!(items, vec![1, 2, 3]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fetch_all_max_items_spanning_three_pages() {
    let pages = make_pages(5, 2);
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PaginationConfig {
        max_items: 5,
        ..unbounded()
    };
    let mut pager = pager_with(&pages, config, calls.clone());

    let (items, err) = pager.fetch_all().await;
    assert!(err.is_none());
    assert_eq!(items, vec![1, 2, 3, 4, 5]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn next_on_exhausted_pager_is_not_a_fetch() {
    let pages = make_pages(1, 2);
    let calls = Arc::new(AtomicUsize::new(0));
    let mut pager = pager_with(&pages, unbounded(), calls.clone());

    assert!(!pager.has_next());
    let page = pager.next().await.unwrap();
    assert!(page.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    // The pager stays usable at its last page.
    assert_eq!(pager.items(), &[1, 2]);
}

#[tokio::test]
async fn empty_cursor_with_has_next_flag_is_treated_as_exhausted() {
    // A server response violating "has_next implies non-empty cursor"
    // must not trigger a fetch with an empty cursor.
    let mut pages = make_pages(1, 2);
    pages[0].pagination.has_next = true;
    pages[0].pagination.next_cursor = String::new();

    let calls = Arc::new(AtomicUsize::new(0));
    let mut pager = pager_with(&pages, unbounded(), calls.clone());

    assert!(!pager.has_next());
    let (items, err) = pager.fetch_all().await;
    assert!(err.is_none());
    assert_eq!(items, vec![1, 2]);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fetch_all_returns_partial_items_alongside_error() {
    // Break the chain after page 2 by pointing it at a missing cursor.
    let mut pages = make_pages(3, 2);
    pages[1].pagination.next_cursor = "missing".to_string();

    let calls = Arc::new(AtomicUsize::new(0));
    let mut pager = pager_with(&pages, unbounded(), calls.clone());

    let (items, err) = pager.fetch_all().await;
    assert_eq!(items, vec![1, 2, 3, 4]);
    match err {
        Some(RestError::Api { status, .. }) => assert_eq!(status, 404),
        other => panic!("Expected Api error, got {:?}", other),
    }
    // Failed fetch still counts as an issued request.
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    // The pager remains at its last successfully fetched page.
    assert_eq!(pager.items(), &[3, 4]);
}

#[tokio::test]
async fn for_each_visits_every_page_once() {
    let pages = make_pages(3, 2);
    let calls = Arc::new(AtomicUsize::new(0));
    let mut pager = pager_with(&pages, unbounded(), calls.clone());

    let mut seen: Vec<Vec<u32>> = Vec::new();
    pager
        .for_each(|page| {
            seen.push(page.numbers.clone());
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(seen, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn for_each_respects_max_pages() {
    let pages = make_pages(5, 2);
    let calls = Arc::new(AtomicUsize::new(0));
    let config = PaginationConfig {
        max_pages: 3,
        ..unbounded()
    };
    let mut pager = pager_with(&pages, config, calls.clone());

    let mut visited = 0;
    pager
        .for_each(|_| {
            visited += 1;
            Ok(())
        })
        .await
        .unwrap();

    assert_eq!(visited, 3);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn for_each_callback_error_stops_traversal() {
    let pages = make_pages(4, 2);
    let calls = Arc::new(AtomicUsize::new(0));
    let mut pager = pager_with(&pages, unbounded(), calls.clone());

    let mut visited = 0;
    let result = pager
        .for_each(|_| {
            visited += 1;
            if visited == 2 {
                return Err(RestError::Api {
                    status: 500,
                    status_text: "Internal Server Error".to_string(),
                    url: "mock://callback".to_string(),
                    message: "stop here".to_string(),
                });
            }
            Ok(())
        })
        .await;

    assert!(matches!(result, Err(RestError::Api { status: 500, .. })));
    assert_eq!(visited, 2);
    // Page 2 was fetched, page 3 never requested.
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn next_advances_one_page_at_a_time() {
    let pages = make_pages(3, 2);
    let calls = Arc::new(AtomicUsize::new(0));
    let mut pager = pager_with(&pages, unbounded(), calls.clone());

    assert_eq!(pager.items(), &[1, 2]);
    assert!(pager.has_next());

    pager.next().await.unwrap();
    assert_eq!(pager.items(), &[3, 4]);
    assert!(pager.has_next());

    pager.next().await.unwrap();
    assert_eq!(pager.items(), &[5, 6]);
    assert!(!pager.has_next());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
