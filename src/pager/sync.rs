//! Blocking pager
//!
//! Drives a list operation on the calling thread. Each follow-up page costs
//! one blocking invoker call at the moment the consumer asks for it.

use std::iter::FusedIterator;
use std::mem;

use tracing::debug;

use super::{PageFetcher, PageState, PageableRequest, PageableResponse};
use crate::error::Result;
use crate::types::{CallOptions, OptionStringExt};

/// Blocking pager over a list operation.
///
/// Wraps the initial request/response pair obtained by the caller together
/// with the invoker bound to the list method. The request is copied at
/// construction, so later mutation of the caller's value never leaks into
/// the traversal. Only the most recent response is retained; response-level
/// fields are reached through [`current_page`](Pager::current_page).
pub struct Pager<R, P, F> {
    fetcher: F,
    request: R,
    response: P,
    options: CallOptions,
}

impl<R, P, F> Pager<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: PageFetcher<R, P>,
{
    /// Create a pager from an already-fetched first page.
    ///
    /// Performs no I/O; the first page is assumed fetched by the caller.
    pub fn new(fetcher: F, request: &R, response: P, options: CallOptions) -> Self {
        Self {
            fetcher,
            request: request.clone(),
            response,
            options,
        }
    }

    /// The most recently fetched page
    pub fn current_page(&self) -> &P {
        &self.response
    }

    /// Whether the current page carries a continuation token
    pub fn has_next_page(&self) -> bool {
        !self.response.next_page_token().is_empty()
    }

    /// Fetch the next page in place, replacing the current one.
    ///
    /// Returns `Ok(None)` once the current page's token is empty. An
    /// invoker error leaves the current page untouched.
    pub fn next_page(&mut self) -> Result<Option<&P>> {
        let Some(token) = self.response.next_page_token().to_owned().none_if_empty() else {
            return Ok(None);
        };
        debug!(%token, "fetching next page");
        self.request.set_page_token(token);
        self.response = self.fetcher.fetch(&self.request, &self.options)?;
        Ok(Some(&self.response))
    }

    /// Consume the pager into a lazy iterator of pages.
    ///
    /// The first yielded page is the stored initial response, with zero
    /// invocations.
    pub fn pages(self) -> Pages<R, P, F> {
        Pages {
            fetcher: self.fetcher,
            request: self.request,
            options: self.options,
            state: PageState::First(self.response),
        }
    }

    /// Consume the pager into a lazy iterator of items.
    ///
    /// Flattens [`pages`](Pager::pages) in page order, preserving each
    /// page's item order. At most one page's items are buffered.
    pub fn items(self) -> Items<R, P, F> {
        Items {
            pages: self.pages(),
            current: Vec::new().into_iter(),
        }
    }
}

impl<R, P, F> std::fmt::Debug for Pager<R, P, F>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("response", &self.response)
            .finish_non_exhaustive()
    }
}

/// Lazy, forward-only iterator of response pages.
///
/// Each pull past the initial page writes the prior page's token into the
/// owned request and performs exactly one invoker call. An invoker error is
/// yielded at the position of the failing page; the iterator is fused
/// afterwards, and pages already yielded stay valid.
pub struct Pages<R, P, F> {
    fetcher: F,
    request: R,
    options: CallOptions,
    state: PageState<P>,
}

impl<R, P, F> Iterator for Pages<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: PageFetcher<R, P>,
{
    type Item = Result<P>;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::replace(&mut self.state, PageState::Done) {
            PageState::First(page) => {
                self.state = PageState::after(&page);
                Some(Ok(page))
            }
            PageState::Pending(token) => {
                debug!(%token, "fetching next page");
                self.request.set_page_token(token);
                match self.fetcher.fetch(&self.request, &self.options) {
                    Ok(page) => {
                        self.state = PageState::after(&page);
                        Some(Ok(page))
                    }
                    // State is already Done: the sequence ends at the failing call.
                    Err(e) => Some(Err(e)),
                }
            }
            PageState::Done => None,
        }
    }
}

impl<R, P, F> FusedIterator for Pages<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: PageFetcher<R, P>,
{
}

/// Lazy iterator of items across all pages
pub struct Items<R, P, F>
where
    P: PageableResponse,
{
    pages: Pages<R, P, F>,
    current: std::vec::IntoIter<P::Item>,
}

impl<R, P, F> Iterator for Items<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: PageFetcher<R, P>,
{
    type Item = Result<P::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.current.next() {
                return Some(Ok(item));
            }
            match self.pages.next() {
                Some(Ok(page)) => self.current = page.into_items().into_iter(),
                Some(Err(e)) => return Some(Err(e)),
                None => return None,
            }
        }
    }
}

impl<R, P, F> FusedIterator for Items<R, P, F>
where
    R: PageableRequest,
    P: PageableResponse,
    F: PageFetcher<R, P>,
{
}
