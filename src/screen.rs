//! The transfer screen: transaction history, live transfer feed and the
//! static recommendations, composed into one surface.

use std::fmt;
use std::sync::Arc;

use crate::config::{ConfigError, FeedConfig};
use crate::feed::{SimulatedSource, TransferFeed, TransferSource};
use crate::fixtures;
use crate::list::TransactionList;
use crate::model::Transaction;
use crate::render;

pub struct Screen<S> {
    transactions: TransactionList,
    feed: TransferFeed<S>,
}

impl Screen<SimulatedSource> {
    /// Screen over the given history and the default transfer fixture, served
    /// by a simulated source.
    pub fn simulated(
        transactions: Vec<Transaction>,
        config: FeedConfig,
    ) -> Result<Self, ConfigError> {
        let source = SimulatedSource::new(fixtures::transfers(), config)?;
        Ok(Self::new(
            TransactionList::new(transactions),
            TransferFeed::new(Arc::new(source)),
        ))
    }
}

impl<S: TransferSource> Screen<S> {
    pub fn new(transactions: TransactionList, feed: TransferFeed<S>) -> Self {
        Self { transactions, feed }
    }

    /// Mount both view-models. Only the feed has work to do: it starts loading.
    pub fn mount(&mut self) {
        self.feed.mount();
    }

    pub fn unmount(&mut self) {
        self.feed.unmount();
    }

    pub fn transactions(&self) -> &TransactionList {
        &self.transactions
    }

    pub fn transactions_mut(&mut self) -> &mut TransactionList {
        &mut self.transactions
    }

    pub fn feed(&self) -> &TransferFeed<S> {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut TransferFeed<S> {
        &mut self.feed
    }
}

impl<S: TransferSource> fmt::Display for Screen<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_header(f)?;
        writeln!(f)?;
        render::write_transactions(f, &self.transactions)?;
        writeln!(f)?;
        render::write_feed(f, &self.feed.state())?;
        writeln!(f)?;
        render::write_advice(f)
    }
}
