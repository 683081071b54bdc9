//! Transfer feed view-model.
//!
//! The feed owns the load lifecycle of the live transfer list:
//! `Idle -> Loading -> Success | Error`, re-entered on every retry.
//! Fetches run as spawned tasks against a [`TransferSource`]; at most one is
//! outstanding at a time.

use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info, warn};

use crate::model::Transfer;

mod error;
pub use error::TransferFeedLoadFailure;

mod source;
pub use source::{SimulatedSource, TransferSource};

mod state;
pub use state::LoadState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    /// Created but not yet mounted.
    Detached,
    Mounted,
    /// Unmounted. Final: results arriving now are dropped.
    TornDown,
}

/// Load state and lifecycle share one cell so the "still mounted" check and
/// the result write happen under the same lock.
#[derive(Debug, Clone)]
struct Cell {
    state: LoadState,
    lifecycle: Lifecycle,
}

/// What a load, retry or refresh request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRequest {
    /// A new fetch was started.
    Started,
    /// A fetch is already outstanding; the request was ignored.
    AlreadyLoading,
    /// The feed is not mounted; the request was ignored.
    Detached,
}

/// The transfer feed view-model.
pub struct TransferFeed<S> {
    source: Arc<S>,
    cell: Arc<watch::Sender<Cell>>,
    in_flight: Option<JoinHandle<()>>,
}

/// Public API
impl<S: TransferSource> TransferFeed<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            cell: Arc::new(watch::Sender::new(Cell {
                state: LoadState::Idle,
                lifecycle: Lifecycle::Detached,
            })),
            in_flight: None,
        }
    }

    /// Mount hook. The first mount starts the initial load.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(&mut self) {
        let mut lifecycle = Lifecycle::Mounted;
        self.cell.send_if_modified(|cell| {
            if cell.lifecycle == Lifecycle::Detached {
                cell.lifecycle = Lifecycle::Mounted;
            } else {
                lifecycle = cell.lifecycle;
            }
            false
        });

        match lifecycle {
            Lifecycle::Mounted if self.state() == LoadState::Idle => {
                debug!("transfer feed mounted");
                self.request("initial load");
            }
            Lifecycle::Mounted => debug!("transfer feed already mounted"),
            Lifecycle::TornDown => warn!("cannot remount a torn down transfer feed"),
            Lifecycle::Detached => {}
        }
    }

    /// Start a fetch unless one is already outstanding.
    pub fn load(&mut self) -> LoadRequest {
        self.request("load")
    }

    /// Retry button of the error state. Same as [`TransferFeed::load`].
    pub fn retry(&mut self) -> LoadRequest {
        self.request("retry")
    }

    /// Refresh button of the success state. Same as [`TransferFeed::load`].
    pub fn refresh(&mut self) -> LoadRequest {
        self.request("refresh")
    }

    /// Current load state.
    pub fn state(&self) -> LoadState {
        self.cell.borrow().state.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.cell.borrow().lifecycle == Lifecycle::Mounted
    }

    /// Stream of load states, starting with the current one.
    ///
    /// Intermediate states may be skipped if the stream is polled slower than
    /// the feed changes.
    pub fn states(&self) -> impl Stream<Item = LoadState> + Unpin + use<S> {
        WatchStream::new(self.cell.subscribe()).map(|cell| cell.state)
    }

    /// Wait until the outstanding request resolves and return the resulting
    /// state. Returns immediately when the feed is not mounted.
    pub async fn settled(&self) -> LoadState {
        let mut receiver = self.cell.subscribe();
        let result = receiver
            .wait_for(|cell| cell.lifecycle != Lifecycle::Mounted || cell.state.is_settled())
            .await
            .map(|cell| cell.state.clone());
        // the sender lives in `self`, so the wait cannot observe a closed channel
        result.unwrap_or_else(|_| self.state())
    }
}

/// Private API
impl<S: TransferSource> TransferFeed<S> {
    fn request(&mut self, trigger: &'static str) -> LoadRequest {
        let mut request = LoadRequest::Started;
        self.cell.send_if_modified(|cell| {
            if cell.lifecycle != Lifecycle::Mounted {
                request = LoadRequest::Detached;
                false
            } else if cell.state.is_loading() {
                request = LoadRequest::AlreadyLoading;
                false
            } else {
                cell.state = LoadState::Loading;
                true
            }
        });

        match request {
            LoadRequest::Started => {
                info!(trigger, state = "loading", "transfer feed loading");
                let source = Arc::clone(&self.source);
                let cell = Arc::clone(&self.cell);
                self.in_flight = Some(tokio::spawn(async move {
                    let result = source.fetch().await;
                    deliver(&cell, result);
                }));
            }
            LoadRequest::AlreadyLoading => {
                debug!(trigger, "transfer feed already loading, request ignored");
            }
            LoadRequest::Detached => {
                debug!(trigger, "transfer feed not mounted, request ignored");
            }
        }
        request
    }
}

impl<S> TransferFeed<S> {
    /// Unmount hook. Any outstanding fetch is aborted and its result, should it
    /// still arrive, is discarded.
    pub fn unmount(&mut self) {
        let was_mounted = self.cell.send_if_modified(|cell| {
            let was_mounted = cell.lifecycle == Lifecycle::Mounted;
            cell.lifecycle = Lifecycle::TornDown;
            was_mounted
        });
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
        if was_mounted {
            debug!("transfer feed unmounted");
        }
    }
}

impl<S> Drop for TransferFeed<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Write a fetch result into the cell, unless the feed was torn down or is no
/// longer waiting for it. Returns whether the result was applied.
fn deliver(
    cell: &watch::Sender<Cell>,
    result: Result<Vec<Transfer>, TransferFeedLoadFailure>,
) -> bool {
    let outcome = match &result {
        Ok(transfers) => format!("{} transfers", transfers.len()),
        Err(failure) => failure.to_string(),
    };

    let applied = cell.send_if_modified(|cell| {
        if cell.lifecycle != Lifecycle::Mounted || !cell.state.is_loading() {
            return false;
        }
        cell.state = match result {
            Ok(transfers) => LoadState::Success(transfers),
            Err(failure) => LoadState::Error(failure.into_message()),
        };
        true
    });

    if applied {
        let state = cell.borrow().state.name();
        info!(state, outcome = %outcome, "transfer feed settled");
    } else {
        debug!(outcome = %outcome, "transfer feed result discarded");
    }
    applied
}
