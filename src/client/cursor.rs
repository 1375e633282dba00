use serde_json::Value;
use tracing::trace;

use super::{HttpMethod, TelerivetClient, TelerivetError};
use crate::domain::{Params, ValidationError};

/// Largest page the server hands out.
const MAX_PAGE_SIZE: usize = 200;

const COUNT_PARAM: &str = "count";
const MARKER_PARAM: &str = "marker";
const PAGE_SIZE_PARAM: &str = "page_size";

#[derive(Debug)]
enum CursorState {
    NotStarted,
    InPage {
        items: std::vec::IntoIter<Params>,
        truncated: bool,
        next_marker: Option<String>,
    },
    Exhausted,
}

enum Step {
    Fetch(Option<String>),
    Finish,
}

/// Lazy, forward-only iterator over a paginated list endpoint.
///
/// Pages are requested on demand, following the server's continuation marker, and items
/// are yielded in server order. Each item is built with the factory given at construction
/// and is fully loaded.
///
/// A cursor is single-pass: to iterate again, build a new one.
///
/// ```rust,no_run
/// use telerivet::{ApiKey, Params, TelerivetClient};
///
/// fn main() -> Result<(), telerivet::TelerivetError> {
///     let client = TelerivetClient::new(ApiKey::new("...")?)?;
///     let project = client.init_project_by_id("PJ...");
///     let contacts = project.query_contacts(Params::new())?.limit(50).all()?;
///     println!("{} contacts", contacts.len());
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct ApiCursor<T> {
    client: TelerivetClient,
    path: String,
    params: Params,
    factory: fn(TelerivetClient, Params) -> T,
    limit: Option<usize>,
    yielded: usize,
    state: CursorState,
    count: Option<u64>,
    failed: bool,
}

impl<T> ApiCursor<T> {
    /// Create a cursor over `path` filtered by `params`.
    ///
    /// `params` may not contain `count`; use [`ApiCursor::total_count`] instead.
    pub fn new(
        client: TelerivetClient,
        path: impl Into<String>,
        params: Params,
        factory: fn(TelerivetClient, Params) -> T,
    ) -> Result<Self, TelerivetError> {
        if params.contains_key(COUNT_PARAM) {
            return Err(ValidationError::CountParam.into());
        }
        Ok(Self {
            client,
            path: path.into(),
            params,
            factory,
            limit: None,
            yielded: 0,
            state: CursorState::NotStarted,
            count: None,
            failed: false,
        })
    }

    /// Yield at most `limit` items.
    ///
    /// Unless `page_size` was given explicitly, pages of `min(limit, 200)` items are
    /// requested.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of items yielded so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    /// Total number of items matching the filter, as reported by the server.
    ///
    /// Issues one request the first time and caches the answer. Iteration is unaffected.
    pub fn total_count(&mut self) -> Result<u64, TelerivetError> {
        if let Some(count) = self.count {
            return Ok(count);
        }
        let mut params = self.params.clone();
        params.insert(COUNT_PARAM.to_owned(), Value::from(1));
        let response = self
            .client
            .do_request(HttpMethod::Get, &self.path, Some(&params))?;
        let count = crate::transport::decode_count(response)
            .map_err(|err| TelerivetError::Parse(Box::new(err)))?;
        self.count = Some(count);
        Ok(count)
    }

    /// Whether another item is available, fetching the next page if needed.
    pub fn has_next(&mut self) -> Result<bool, TelerivetError> {
        if self.limit_reached() {
            return Ok(false);
        }
        self.fill()?;
        Ok(matches!(self.state, CursorState::InPage { .. }))
    }

    /// Return the next item, fetching the next page if needed.
    ///
    /// Fails with [`TelerivetError::CursorExhausted`] when nothing is left.
    pub fn next_item(&mut self) -> Result<T, TelerivetError> {
        if self.limit_reached() {
            return Err(TelerivetError::CursorExhausted);
        }
        self.fill()?;
        let CursorState::InPage { items, .. } = &mut self.state else {
            return Err(TelerivetError::CursorExhausted);
        };
        let fields = items.next().ok_or(TelerivetError::CursorExhausted)?;
        self.yielded += 1;
        Ok((self.factory)(self.client.clone(), fields))
    }

    /// Drain the remaining items into a vector.
    ///
    /// Without a [`limit`](ApiCursor::limit) this holds the entire result set in memory.
    pub fn all(&mut self) -> Result<Vec<T>, TelerivetError> {
        self.by_ref().collect()
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.yielded >= limit)
    }

    /// Leave the cursor either on a page with items remaining or exhausted.
    fn fill(&mut self) -> Result<(), TelerivetError> {
        loop {
            let step = match &self.state {
                CursorState::NotStarted => Step::Fetch(None),
                CursorState::InPage {
                    items,
                    truncated,
                    next_marker,
                } if items.as_slice().is_empty() => match next_marker {
                    // Without a marker the next request would repeat the first page.
                    Some(marker) if *truncated => Step::Fetch(Some(marker.clone())),
                    _ => Step::Finish,
                },
                CursorState::InPage { .. } | CursorState::Exhausted => return Ok(()),
            };

            match step {
                Step::Fetch(marker) => self.fetch_page(marker)?,
                Step::Finish => self.state = CursorState::Exhausted,
            }
        }
    }

    fn fetch_page(&mut self, marker: Option<String>) -> Result<(), TelerivetError> {
        let mut params = self.params.clone();
        if let Some(marker) = &marker {
            params.insert(MARKER_PARAM.to_owned(), Value::from(marker.as_str()));
        }
        if let Some(limit) = self.limit {
            if !params.contains_key(PAGE_SIZE_PARAM) {
                params.insert(
                    PAGE_SIZE_PARAM.to_owned(),
                    Value::from(limit.min(MAX_PAGE_SIZE)),
                );
            }
        }

        let response = self
            .client
            .do_request(HttpMethod::Get, &self.path, Some(&params))?;
        let page = crate::transport::decode_page(response)
            .map_err(|err| TelerivetError::Parse(Box::new(err)))?;

        trace!(
            path = %self.path,
            marker = marker.as_deref().unwrap_or(""),
            items = page.items.len(),
            truncated = page.truncated,
            "fetched cursor page"
        );

        // An empty page ends iteration even if the server claims more.
        self.state = if page.items.is_empty() {
            CursorState::Exhausted
        } else {
            CursorState::InPage {
                items: page.items.into_iter(),
                truncated: page.truncated,
                next_marker: page.next_marker,
            }
        };
        Ok(())
    }
}

impl<T> Iterator for ApiCursor<T> {
    type Item = Result<T, TelerivetError>;

    /// Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_item() {
            Ok(item) => Some(Ok(item)),
            Err(TelerivetError::CursorExhausted) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
