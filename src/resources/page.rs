//! Pagination primitives for listed resources.
//!
//! A single-page fetch returns [`Page`], an explicit "more data vs. end of
//! data" variant, so running out of pages never travels through the error
//! channel. [`fetch_all_pages`] is the generic accumulation loop built on
//! top of it.

use std::future::Future;

use crate::clients::ClientError;

/// The outcome of fetching one page of a listed resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page<T> {
    /// The page's items, possibly empty, in service order.
    Items(Vec<T>),
    /// The service signaled there is no more data.
    End,
}

impl<T> Page<T> {
    /// Returns `true` for the end-of-data variant.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    /// Unwraps the page into its items; the end variant yields none.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Items(items) => items,
            Self::End => Vec::new(),
        }
    }
}

/// Fetches pages starting at 1 and accumulates their items in order.
///
/// Stops when a page after the first comes back empty, when the fetch
/// signals [`Page::End`], or when `ceiling` pages have been fetched —
/// whichever comes first. An empty first page does not stop the loop; the
/// service has been seen to return data on later pages regardless.
///
/// # Errors
///
/// A genuine transport or service error from any page fetch fails the
/// whole operation; only the end-of-data signal is absorbed.
pub async fn fetch_all_pages<T, F, Fut>(ceiling: u32, mut fetch: F) -> Result<Vec<T>, ClientError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, ClientError>>,
{
    let mut all = Vec::new();
    for page in 1..=ceiling {
        match fetch(page).await? {
            Page::End => break,
            Page::Items(items) => {
                if items.is_empty() && page > 1 {
                    break;
                }
                all.extend(items);
            }
        }
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_collects_pages_until_empty_page() {
        let calls = Cell::new(0u32);
        let result = fetch_all_pages(25, |page| {
            calls.set(calls.get() + 1);
            async move {
                Ok::<_, ClientError>(match page {
                    1..=3 => Page::Items(vec![page * 10, page * 10 + 1]),
                    _ => Page::Items(Vec::new()),
                })
            }
        })
        .await
        .unwrap();

        assert_eq!(result, vec![10, 11, 20, 21, 30, 31]);
        // the empty fourth page is fetched, a fifth never is
        assert_eq!(calls.get(), 4);
    }

    #[tokio::test]
    async fn test_ceiling_stops_regardless_of_data() {
        let calls = Cell::new(0u32);
        let result = fetch_all_pages(2, |page| {
            calls.set(calls.get() + 1);
            async move { Ok::<_, ClientError>(Page::Items(vec![page])) }
        })
        .await
        .unwrap();

        assert_eq!(result, vec![1, 2]);
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_end_signal_is_a_benign_stop() {
        let result = fetch_all_pages(25, |page| async move {
            Ok::<_, ClientError>(if page == 1 {
                Page::Items(vec!["only".to_string()])
            } else {
                Page::End
            })
        })
        .await
        .unwrap();

        assert_eq!(result, vec!["only".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_first_page_does_not_stop() {
        let result = fetch_all_pages(25, |page| async move {
            Ok::<_, ClientError>(match page {
                1 => Page::Items(Vec::new()),
                2 => Page::Items(vec![42]),
                _ => Page::End,
            })
        })
        .await
        .unwrap();

        assert_eq!(result, vec![42]);
    }

    #[tokio::test]
    async fn test_mid_pagination_error_fails_the_operation() {
        let result: Result<Vec<u32>, _> = fetch_all_pages(25, |page| async move {
            if page == 2 {
                Err(ClientError::Status {
                    code: 500,
                    resource: "requests.xml".to_string(),
                })
            } else {
                Ok(Page::Items(vec![page]))
            }
        })
        .await;

        assert!(matches!(result, Err(ClientError::Status { code: 500, .. })));
    }

    #[test]
    fn test_page_into_items() {
        assert_eq!(Page::Items(vec![1, 2]).into_items(), vec![1, 2]);
        assert_eq!(Page::<u32>::End.into_items(), Vec::<u32>::new());
        assert!(Page::<u32>::End.is_end());
    }
}
