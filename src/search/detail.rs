//! On-demand detail lookup.
//!
//! Independent of the search pipeline: fetching a detail never touches the
//! result list. The selected record lives in the store's detail view.

use super::sequence::RequestSequencer;
use crate::api::MovieApi;
use crate::app::Store;
use std::sync::Arc;
use tracing::instrument;

/// Fetches full movie records into the store's detail view.
#[derive(Debug)]
pub struct DetailFetcher {
    store: Arc<Store>,
    api: Arc<dyn MovieApi>,
    sequencer: RequestSequencer,
}

impl DetailFetcher {
    #[must_use]
    pub fn new(store: Arc<Store>, api: Arc<dyn MovieApi>) -> Self {
        Self {
            store,
            api,
            sequencer: RequestSequencer::default(),
        }
    }

    /// Fetches `id` and opens the detail view on it.
    ///
    /// Returns whether the detail view was opened. Failures (unknown id, network,
    /// malformed payload) are logged and leave the selection as it was; the
    /// loading flag is cleared either way. When fetches overlap, only the most
    /// recent one is applied.
    #[instrument(skip(self))]
    pub async fn fetch_detail(&self, id: &str) -> bool {
        let ticket = self.sequencer.issue_with(|| self.store.set_loading(true));

        let outcome = self.api.detail(id).await;

        let applied = self.sequencer.if_current(ticket, || {
            let opened = match outcome {
                Ok(detail) => {
                    self.store.select_detail(detail);
                    true
                }
                Err(e) => {
                    tracing::warn!(error = %e, "detail lookup failed");
                    false
                }
            };
            self.store.set_loading(false);
            opened
        });

        applied.unwrap_or_else(|| {
            tracing::debug!(ticket = ticket.number(), "discarding stale detail response");
            false
        })
    }

    /// Closes the detail view.
    pub fn close_detail(&self) {
        self.store.close_detail();
    }
}
