//! Cursor-based pagination engine
//!
//! Prime list endpoints return a bounded slice of a larger result set plus
//! pagination metadata: an opaque server-issued cursor and a has-next flag.
//! [`Pager`] wraps one such response together with an item-extraction
//! function and a fetch-next function, so individual endpoints never
//! re-implement cursor bookkeeping.
//!
//! # Example
//!
//! ```no_run
//! use prime_rest::PrimeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PrimeClient::from_env()?;
//!     let mut pager = client.orders().list_open_orders_paged("pf-1", None).await?;
//!
//!     let (orders, err) = pager.fetch_all().await;
//!     println!("Fetched {} open orders", orders.len());
//!     if let Some(err) = err {
//!         eprintln!("Stopped early: {}", err);
//!     }
//!     Ok(())
//! }
//! ```

use futures::future::BoxFuture;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::error::{RestError, RestResult};

/// Characters that would corrupt a query string if left unescaped
const QUERY_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

/// Append one `key=value` pair to a query string under construction
///
/// The first pair is prefixed with `?`, subsequent ones joined with `&`.
/// Values are percent-encoded; cursors are server-issued and may carry
/// reserved characters.
pub(crate) fn append_query_param(query: &mut String, key: &str, value: &str) {
    query.push(if query.is_empty() { '?' } else { '&' });
    query.push_str(key);
    query.push('=');
    query.extend(utf8_percent_encode(value, QUERY_ESCAPE));
}

// ============================================================================
// Page request / page metadata
// ============================================================================

/// Sort direction for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending
    #[serde(rename = "ASC")]
    Asc,
    /// Descending
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    /// Wire form of the direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied page request
///
/// Zero/empty fields are "unset" and omitted from the query string.
/// Values are copied, never mutated in place, when advancing to the next
/// page; the caller may reuse the original after the call returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationParams {
    /// Opaque server-issued cursor; empty means "first page"
    pub cursor: String,
    /// Page size; zero means "server default"
    pub limit: u32,
    /// Sort direction
    pub sort_direction: Option<SortDirection>,
}

impl PaginationParams {
    /// Create empty params (first page, server-chosen limit)
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy these params with only the cursor replaced
    pub fn with_cursor(&self, cursor: impl Into<String>) -> Self {
        Self {
            cursor: cursor.into(),
            limit: self.limit,
            sort_direction: self.sort_direction,
        }
    }

    /// Resolve caller params against the configured default limit
    ///
    /// Absent params, or params with a zero limit, get the configured
    /// default; an already-set limit passes through unchanged, so applying
    /// this twice yields the same result as applying it once.
    pub fn or_default_limit(
        params: Option<&PaginationParams>,
        config: &PaginationConfig,
    ) -> PaginationParams {
        let mut resolved = params.cloned().unwrap_or_default();
        if resolved.limit == 0 {
            resolved.limit = config.default_limit;
        }
        resolved
    }

    /// Serialize to a query string
    ///
    /// Field order is fixed as cursor, limit, sort_direction; empty/zero
    /// fields are omitted. Returns an empty string when nothing is set.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        if !self.cursor.is_empty() {
            append_query_param(&mut query, "cursor", &self.cursor);
        }
        if self.limit > 0 {
            append_query_param(&mut query, "limit", &self.limit.to_string());
        }
        if let Some(direction) = self.sort_direction {
            append_query_param(&mut query, "sort_direction", direction.as_str());
        }
        query
    }
}

/// Page metadata embedded in every list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Cursor for the next page; empty means no more pages
    #[serde(default)]
    pub next_cursor: String,
    /// Whether the server reports more pages
    #[serde(default)]
    pub has_next: bool,
    /// Sort direction echoed back by the server
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,
}

/// A list response that carries pagination metadata
pub trait Paginated {
    /// The page metadata embedded in this response
    fn pagination(&self) -> &Pagination;

    /// Whether another page exists
    ///
    /// An empty cursor is treated as exhausted regardless of the has-next
    /// flag; advancing with an empty cursor would silently restart from
    /// the first page.
    fn has_next(&self) -> bool {
        let meta = self.pagination();
        meta.has_next && !meta.next_cursor.is_empty()
    }

    /// Cursor for the next page
    fn next_cursor(&self) -> &str {
        &self.pagination().next_cursor
    }
}

/// Traversal bounds shared by every pager a client creates
///
/// An immutable value: each [`Pager`] takes its own copy at construction,
/// so iterators never read through a shared mutable reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Maximum pages a bounded traversal will consume (0 = unbounded)
    pub max_pages: u32,
    /// Maximum items `fetch_all` will return (0 = unbounded)
    pub max_items: usize,
    /// Limit applied when the caller doesn't set one (0 = server default)
    pub default_limit: u32,
}

// ============================================================================
// Page iterator engine
// ============================================================================

/// Fetch-next function injected into a pager
///
/// Takes the cursor of the page to fetch and resolves to that page.
pub type FetchPageFn<'a, T> = Box<dyn Fn(String) -> BoxFuture<'a, RestResult<T>> + Send + Sync + 'a>;

/// Generic page-by-page iterator over a cursor-paginated list endpoint
///
/// Holds the current page, an item-extraction function, and a fetch-next
/// function supplied at construction; there is no back-reference to the
/// originating client inside the response values.
///
/// Pages are fetched strictly in cursor order, one at a time, with no
/// prefetching. A failed fetch leaves the pager at its last successfully
/// fetched page. Not safe for concurrent use; each task wanting
/// independent pagination holds its own pager.
pub struct Pager<'a, T, I> {
    current: T,
    extract: fn(&T) -> &[I],
    config: PaginationConfig,
    fetch: FetchPageFn<'a, T>,
}

impl<'a, T, I> Pager<'a, T, I>
where
    T: Paginated,
    I: Clone,
{
    /// Create a pager from an already-fetched first page
    ///
    /// # Arguments
    /// * `first_page` - the initial response to iterate from
    /// * `extract` - pulls the items out of one page
    /// * `config` - traversal bounds (copied, not shared)
    /// * `fetch` - issues the request for a given cursor
    pub fn new<F>(first_page: T, extract: fn(&T) -> &[I], config: PaginationConfig, fetch: F) -> Self
    where
        F: Fn(String) -> BoxFuture<'a, RestResult<T>> + Send + Sync + 'a,
    {
        Self {
            current: first_page,
            extract,
            config,
            fetch: Box::new(fetch),
        }
    }

    /// Borrow the current page
    pub fn page(&self) -> &T {
        &self.current
    }

    /// Items embedded in the current page; never triggers I/O
    pub fn items(&self) -> &[I] {
        (self.extract)(&self.current)
    }

    /// Whether the current page reports another page
    pub fn has_next(&self) -> bool {
        self.current.has_next()
    }

    /// Fetch the next page and make it current
    ///
    /// Returns `Ok(None)` without issuing a request when already
    /// exhausted. On error the pager stays at its current page.
    pub async fn next(&mut self) -> RestResult<Option<&T>> {
        if !self.has_next() {
            return Ok(None);
        }
        let cursor = self.current.next_cursor().to_owned();
        self.current = (self.fetch)(cursor).await?;
        Ok(Some(&self.current))
    }

    /// Accumulate items from the current page onward
    ///
    /// Stops at natural exhaustion or at the configured max-pages /
    /// max-items bound, whichever comes first. Both bounds are checked
    /// before the fetch that would exceed them, so no wasted request is
    /// issued; because page sizes are server-determined, the last page
    /// may overshoot max-items and the result is truncated from the tail
    /// to exactly that bound, preserving page order and within-page order.
    ///
    /// A failed fetch returns the items accumulated so far alongside the
    /// error; callers wanting all-or-nothing semantics must check it.
    pub async fn fetch_all(&mut self) -> (Vec<I>, Option<RestError>) {
        let mut items: Vec<I> = self.items().to_vec();
        let mut pages_seen: u32 = 1;

        loop {
            if !self.has_next() {
                break;
            }
            if self.config.max_pages > 0 && pages_seen >= self.config.max_pages {
                break;
            }
            if self.config.max_items > 0 && items.len() >= self.config.max_items {
                break;
            }
            match self.next().await {
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(err) => return (items, Some(err)),
            }
            items.extend_from_slice(self.items());
            pages_seen += 1;
        }

        if self.config.max_items > 0 && items.len() > self.config.max_items {
            items.truncate(self.config.max_items);
        }
        (items, None)
    }

    /// Invoke a callback once per page, from the current page onward
    ///
    /// Honors the max-pages bound; max-items does not apply because
    /// per-page processing has no notion of a partial page. A callback
    /// error aborts traversal immediately and propagates.
    pub async fn for_each<F>(&mut self, mut callback: F) -> RestResult<()>
    where
        F: FnMut(&T) -> RestResult<()>,
    {
        callback(&self.current)?;
        let mut pages_seen: u32 = 1;

        while self.has_next() {
            if self.config.max_pages > 0 && pages_seen >= self.config.max_pages {
                break;
            }
            if self.next().await?.is_none() {
                break;
            }
            callback(&self.current)?;
            pages_seen += 1;
        }
        Ok(())
    }
}

impl<'a, T: std::fmt::Debug, I> std::fmt::Debug for Pager<'a, T, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("current", &self.current)
            .field("config", &self.config)
            .finish()
    }
}
