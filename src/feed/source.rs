//! Where the transfer feed gets its data from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

use super::TransferFeedLoadFailure;
use crate::config::{ConfigError, FeedConfig, validate_probability};
use crate::model::Transfer;

/// Asynchronous provider of transfers.
///
/// A real network client would implement this; the feed only relies on one
/// fetch resolving to either the full collection or a failure.
pub trait TransferSource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Transfer>, TransferFeedLoadFailure>> + Send;
}

/// Failure probability together with the generator that rolls against it.
struct Dice {
    failure_probability: f64,
    rng: StdRng,
}

/// Stub backend: answers with a fixed collection after an artificial delay,
/// failing at random with the configured probability.
pub struct SimulatedSource {
    transfers: Vec<Transfer>,
    simulated_delay: Duration,
    dice: Mutex<Dice>,
    fetches: AtomicU64,
}

impl SimulatedSource {
    pub fn new(transfers: Vec<Transfer>, config: FeedConfig) -> Result<Self, ConfigError> {
        Self::with_rng(transfers, config, StdRng::from_entropy())
    }

    /// Like [`SimulatedSource::new`] with a caller-provided generator, e.g. a
    /// seeded one for reproducible failure sequences.
    pub fn with_rng(
        transfers: Vec<Transfer>,
        config: FeedConfig,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        validate_probability(config.failure_probability)?;
        Ok(Self {
            transfers,
            simulated_delay: config.simulated_delay,
            dice: Mutex::new(Dice {
                failure_probability: config.failure_probability,
                rng,
            }),
            fetches: AtomicU64::new(0),
        })
    }

    pub fn failure_probability(&self) -> f64 {
        self.dice
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .failure_probability
    }

    /// Change the failure probability for subsequent fetches.
    pub fn set_failure_probability(&self, probability: f64) -> Result<(), ConfigError> {
        validate_probability(probability)?;
        self.dice
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .failure_probability = probability;
        Ok(())
    }

    /// Number of fetches started so far.
    pub fn fetch_count(&self) -> u64 {
        self.fetches.load(Ordering::Relaxed)
    }

    fn roll_failure(&self) -> bool {
        let mut dice = self.dice.lock().unwrap_or_else(PoisonError::into_inner);
        let probability = dice.failure_probability;
        dice.rng.gen_bool(probability)
    }
}

impl TransferSource for SimulatedSource {
    async fn fetch(&self) -> Result<Vec<Transfer>, TransferFeedLoadFailure> {
        let fetch = self.fetches.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(fetch, delay_ms = self.simulated_delay.as_millis() as u64, "simulated fetch started");

        tokio::time::sleep(self.simulated_delay).await;

        if self.roll_failure() {
            let failure = TransferFeedLoadFailure::network();
            warn!(fetch, reason = %failure, "simulated fetch failed");
            return Err(failure);
        }

        debug!(fetch, transfers = self.transfers.len(), "simulated fetch succeeded");
        Ok(self.transfers.clone())
    }
}
