// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Streams over the pages, or the items, returned by list RPCs.
//!
//! List RPCs, as defined by [AIP-4233], return a page of results and a token
//! to fetch the next page. The types in this module convert these RPCs into
//! a [futures::Stream].
//!
//! [AIP-4233]: https://google.aip.dev/client-libraries/4233

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

/// Describes a response that can be iterated over with [Paginator].
pub trait PageableResponse {
    /// The type of the items in each page.
    type PageItem: Send;

    /// Consumes the page, returning its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to fetch the next page. Empty on the last page.
    fn next_page_token(&self) -> String;
}

/// A stream over the pages of a list RPC.
///
/// The stream ends after the page with an empty `next_page_token`, or after
/// the first error.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch each page.
    pub fn new<F, X>(seed_token: String, execute: X) -> Self
    where
        X: Fn(String) -> F + Clone + Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let next = page.next_page_token();
                        let state = if next.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(next)
                        };
                        Some((Ok(page), state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the page stream into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream over the items of a list RPC.
///
/// Fetches pages as needed. The stream ends after the last item of the last
/// page, or after the first error.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    pages: Paginator<T, E>,
    current: Option<std::vec::IntoIter<T::PageItem>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        Self {
            pages,
            current: None,
        }
    }

    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();
        loop {
            if let Some(item) = this.current.as_mut().and_then(|items| items.next()) {
                return Poll::Ready(Some(Ok(item)));
            }
            match ready!(this.pages.as_mut().poll_next(cx)) {
                None => return Poll::Ready(None),
                Some(Err(e)) => return Poll::Ready(Some(Err(e))),
                Some(Ok(page)) => *this.current = Some(page.items().into_iter()),
            }
        }
    }
}

#[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.

    /// Implemented by the request messages of list RPCs.
    pub trait PageableRequest {
        fn set_page_token<T: Into<String>>(&mut self, token: T);
        fn page_token(&self) -> &str;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn page(items: &[&str], token: &str) -> TestResponse {
        TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        }
    }

    type Pages = Arc<Mutex<VecDeque<(String, Result<TestResponse, String>)>>>;

    // Returns the canned responses in order, verifying the page token.
    fn fake_execute(
        pages: Pages,
    ) -> impl Fn(String) -> std::future::Ready<Result<TestResponse, String>> + Clone {
        move |token: String| {
            let (want, response) = pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| (token.clone(), Err("no more pages".to_string())));
            assert_eq!(token, want);
            std::future::ready(response)
        }
    }

    #[tokio::test]
    async fn pages() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            ("seed".to_string(), Ok(page(&["a", "b"], "t2"))),
            ("t2".to_string(), Ok(page(&[], "t3"))),
            ("t3".to_string(), Ok(page(&["c"], ""))),
        ])));
        let mut paginator = Paginator::new("seed".to_string(), fake_execute(pages.clone()));
        let mut got = Vec::new();
        while let Some(p) = paginator.next().await {
            got.push(p.unwrap());
        }
        assert_eq!(
            got,
            vec![page(&["a", "b"], "t2"), page(&[], "t3"), page(&["c"], "")]
        );
        assert!(pages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn pages_stop_on_error() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            (String::new(), Ok(page(&["a"], "t2"))),
            ("t2".to_string(), Err("uh-oh".to_string())),
            ("t3".to_string(), Ok(page(&["c"], ""))),
        ])));
        let mut paginator = Paginator::new(String::new(), fake_execute(pages.clone()));
        assert_eq!(paginator.next().await, Some(Ok(page(&["a"], "t2"))));
        assert_eq!(paginator.next().await, Some(Err("uh-oh".to_string())));
        assert_eq!(paginator.next().await, None);
        assert_eq!(pages.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn items() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            (String::new(), Ok(page(&["a", "b"], "t2"))),
            ("t2".to_string(), Ok(page(&[], "t3"))),
            ("t3".to_string(), Ok(page(&["c"], ""))),
        ])));
        let mut items = Paginator::new(String::new(), fake_execute(pages)).items();
        let mut got = Vec::new();
        while let Some(item) = items.next().await {
            got.push(item.unwrap());
        }
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn items_error() {
        let pages: Pages = Arc::new(Mutex::new(VecDeque::from([
            (String::new(), Ok(page(&["a"], "t2"))),
            ("t2".to_string(), Err("uh-oh".to_string())),
        ])));
        let mut items = Paginator::new(String::new(), fake_execute(pages)).items();
        assert_eq!(items.next().await, Some(Ok("a".to_string())));
        assert_eq!(items.next().await, Some(Err("uh-oh".to_string())));
        assert_eq!(items.next().await, None);
    }
}
