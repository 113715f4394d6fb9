//! Pagination over list-style API calls
//!
//! Every list operation on the service returns one bounded page of items
//! plus an opaque continuation token. The pagers in this module wrap an
//! already-fetched first page and an invoker bound to the list method, and
//! expose the whole multi-page result as a lazy sequence of pages or items.
//!
//! Traversal is strictly forward: the continuation token of the most recent
//! page is written into the pager's owned request before each follow-up
//! call, no page is re-fetched or skipped, and an empty token ends the
//! sequence. A pager is a single-owner, single-consumer object; to restart
//! a traversal, construct a new pager.

mod stream;
mod sync;

pub use stream::AsyncPager;
pub use sync::{Items, Pager, Pages};

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CallOptions, OptionStringExt};

/// A list request carrying a mutable continuation token
pub trait PageableRequest: Clone + Send {
    /// Replace the request's page token
    fn set_page_token(&mut self, token: String);
}

/// One page of a list response
pub trait PageableResponse: Send {
    /// Element type of the paginated collection
    type Item: Send;

    /// Continuation token; empty means this is the final page
    fn next_page_token(&self) -> &str;

    /// The page's items, in response order
    fn items(&self) -> &[Self::Item];

    /// Consume the page, returning its items
    fn into_items(self) -> Vec<Self::Item>;
}

/// Synchronous list invoker: one call, one page.
///
/// The options bundle is forwarded verbatim from the pager; retry and
/// timeout semantics live entirely behind this capability.
pub trait PageFetcher<R, P> {
    /// Execute the bound list call
    fn fetch(&mut self, request: &R, options: &CallOptions) -> Result<P>;
}

/// Asynchronous list invoker: one call, one future of a page.
#[async_trait]
pub trait AsyncPageFetcher<R, P>: Send {
    /// Execute the bound list call
    async fn fetch(&mut self, request: &R, options: &CallOptions) -> Result<P>;
}

/// Position of a page traversal between pulls.
///
/// `First` holds the constructor-supplied response, yielded without any
/// invocation. `Pending` holds the token for a page not yet fetched.
pub(crate) enum PageState<P> {
    First(P),
    Pending(String),
    Done,
}

impl<P: PageableResponse> PageState<P> {
    /// State following a yielded page: pending on its token, or done
    pub(crate) fn after(page: &P) -> Self {
        match page.next_page_token().to_owned().none_if_empty() {
            Some(token) => Self::Pending(token),
            None => Self::Done,
        }
    }
}
