//! Asynchronous pager
//!
//! Same traversal contract as the blocking [`Pager`](super::Pager), with
//! each follow-up fetch suspending the consumer instead of blocking a
//! thread. Page N+1 is never requested before the consumer has pulled past
//! page N; dropping the stream simply stops further invocations.

use std::mem;

use futures::stream::{self, Stream, TryStreamExt};
use tracing::debug;

use super::{AsyncPageFetcher, PageState, PageableRequest, PageableResponse};
use crate::error::{Error, Result};
use crate::types::{CallOptions, OptionStringExt};

/// Asynchronous pager over a list operation.
///
/// Construction, request copying, and retention semantics are identical to
/// the blocking [`Pager`](super::Pager); only the concurrency contract of
/// each step differs.
pub struct AsyncPager<R, P, F> {
    fetcher: F,
    request: R,
    response: P,
    options: CallOptions,
}

impl<R, P, F> AsyncPager<R, P, F>
where
    R: PageableRequest + Sync,
    P: PageableResponse,
    F: AsyncPageFetcher<R, P>,
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
    /// Returns `Ok(None)` once the current page's token is empty.
    pub async fn next_page(&mut self) -> Result<Option<&P>> {
        let Some(token) = self.response.next_page_token().to_owned().none_if_empty() else {
            return Ok(None);
        };
        debug!(%token, "fetching next page");
        self.request.set_page_token(token);
        self.response = self.fetcher.fetch(&self.request, &self.options).await?;
        Ok(Some(&self.response))
    }

    /// Consume the pager into a lazy stream of pages.
    ///
    /// The first yielded page is the stored initial response, with zero
    /// invocations. An invoker error is yielded at the position of the
    /// failing page and ends the stream.
    pub fn pages(self) -> impl Stream<Item = Result<P>> + Send {
        let state = PagesState {
            fetcher: self.fetcher,
            request: self.request,
            options: self.options,
            page: PageState::First(self.response),
        };
        stream::try_unfold(state, |mut st| async move {
            match mem::replace(&mut st.page, PageState::Done) {
                PageState::First(page) => {
                    st.page = PageState::after(&page);
                    Ok(Some((page, st)))
                }
                PageState::Pending(token) => {
                    debug!(%token, "fetching next page");
                    st.request.set_page_token(token);
                    let page = st.fetcher.fetch(&st.request, &st.options).await?;
                    st.page = PageState::after(&page);
                    Ok(Some((page, st)))
                }
                PageState::Done => Ok(None),
            }
        })
    }

    /// Consume the pager into a lazy stream of items.
    ///
    /// Flattens [`pages`](AsyncPager::pages) in page order, preserving each
    /// page's item order. At most one page's items are buffered.
    pub fn items(self) -> impl Stream<Item = Result<P::Item>> + Send {
        self.pages()
            .map_ok(|page| stream::iter(page.into_items().into_iter().map(Ok::<_, Error>)))
            .try_flatten()
    }
}

impl<R, P, F> std::fmt::Debug for AsyncPager<R, P, F>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncPager")
            .field("response", &self.response)
            .finish_non_exhaustive()
    }
}

/// Unfold state for [`AsyncPager::pages`]
struct PagesState<R, P, F> {
    fetcher: F,
    request: R,
    options: CallOptions,
    page: PageState<P>,
}
