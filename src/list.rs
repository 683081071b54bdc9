//! Transaction history view-model.
//!
//! Holds a fixed collection of transactions and a filter, and derives the
//! subset the screen should show.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

use crate::model::{Transaction, TransactionStatus, TxId};

/// Which transactions the history shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Success,
    Pending,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Success, Filter::Pending];

    pub fn matches(self, status: &TransactionStatus) -> bool {
        match self {
            Filter::All => true,
            Filter::Success => *status == TransactionStatus::Success,
            Filter::Pending => *status == TransactionStatus::Pending,
        }
    }

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Success => "Successful",
            Filter::Pending => "In progress",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Success => "success",
            Filter::Pending => "pending",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown filter '{0}', expected one of: all, success, pending")]
pub struct ParseFilterError(String);

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

/// Visual treatment of a transaction status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
}

const COMPLETED: StatusBadge = StatusBadge {
    label: "Completed",
    background: "#d1fae5",
    foreground: "#065f46",
};

const PENDING: StatusBadge = StatusBadge {
    label: "Pending",
    background: "#fef3c7",
    foreground: "#92400e",
};

const FAILED: StatusBadge = StatusBadge {
    label: "Failed",
    background: "#fee2e2",
    foreground: "#991b1b",
};

/// Map a status to its badge. Anything unrecognized gets the failed badge.
pub fn status_badge(status: &TransactionStatus) -> StatusBadge {
    match status {
        TransactionStatus::Success => COMPLETED,
        TransactionStatus::Pending => PENDING,
        TransactionStatus::Failed | TransactionStatus::Other(_) => FAILED,
    }
}

/// Accessible name of a transaction card.
pub fn aria_label(transaction: &Transaction) -> String {
    format!("Transfer to {}", transaction.recipient)
}

/// Buttons shown on a transaction card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionAction {
    Details,
    CancelPending,
}

impl TransactionAction {
    pub fn label(self) -> &'static str {
        match self {
            TransactionAction::Details => "Details",
            TransactionAction::CancelPending => "Cancel",
        }
    }
}

/// Actions offered for a transaction. Only pending transactions can be cancelled.
pub fn actions(transaction: &Transaction) -> Vec<TransactionAction> {
    let mut actions = vec![TransactionAction::Details];
    if transaction.status == TransactionStatus::Pending {
        actions.push(TransactionAction::CancelPending);
    }
    actions
}

/// The transaction history view-model.
#[derive(Debug)]
pub struct TransactionList {
    transactions: Vec<Transaction>,
    filter: Filter,
    /// Indices into `transactions` matching `filter`, in insertion order.
    visible: Vec<usize>,
}

impl TransactionList {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let visible = (0..transactions.len()).collect();
        Self {
            transactions,
            filter: Filter::All,
            visible,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Select a filter. The visible subset is recomputed only on change.
    pub fn set_filter(&mut self, filter: Filter) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.visible = Self::compute_visible(&self.transactions, filter);
        debug!(filter = %filter, visible = self.visible.len(), "filter changed");
    }

    /// Transactions matching the current filter, in insertion order.
    pub fn visible_transactions(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.visible.iter().map(|&idx| &self.transactions[idx])
    }

    /// The whole collection regardless of filter.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TxId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Card button handler. Neither details nor cancellation is backed by any
    /// operation yet, so this only records the request.
    pub fn trigger(&self, id: TxId, action: TransactionAction) {
        match self.get(id) {
            Some(transaction) if actions(transaction).contains(&action) => {
                info!(tx = id, action = ?action, "action requested, not wired");
            }
            Some(_) => {
                debug!(tx = id, action = ?action, "action not offered for transaction");
            }
            None => {
                debug!(tx = id, action = ?action, "action requested for unknown transaction");
            }
        }
    }

    fn compute_visible(transactions: &[Transaction], filter: Filter) -> Vec<usize> {
        transactions
            .iter()
            .enumerate()
            .filter(|(_, t)| filter.matches(&t.status))
            .map(|(idx, _)| idx)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn visible_ids(list: &TransactionList) -> Vec<TxId> {
        list.visible_transactions().map(|t| t.id).collect()
    }

    fn with_status(id: TxId, status: &str) -> Transaction {
        let mut transaction = fixtures::transactions().remove(0);
        transaction.id = id;
        transaction.status = TransactionStatus::from(status);
        transaction
    }

    #[test]
    fn new_list_shows_everything() {
        let list = TransactionList::new(fixtures::transactions());
        assert_eq!(list.filter(), Filter::All);
        assert_eq!(visible_ids(&list), vec![1, 2, 3, 4]);
    }

    #[test]
    fn success_filter_preserves_order() {
        let mut list = TransactionList::new(fixtures::transactions());
        list.set_filter(Filter::Success);
        assert_eq!(visible_ids(&list), vec![1, 4]);
    }

    #[test]
    fn pending_filter() {
        let mut list = TransactionList::new(fixtures::transactions());
        list.set_filter(Filter::Pending);
        assert_eq!(visible_ids(&list), vec![2]);
    }

    #[test]
    fn each_filter_yields_exactly_matching_subset() {
        let mut list = TransactionList::new(fixtures::transactions());
        for filter in Filter::ALL {
            list.set_filter(filter);
            let expected: Vec<TxId> = fixtures::transactions()
                .into_iter()
                .filter(|t| filter.matches(&t.status))
                .map(|t| t.id)
                .collect();
            assert_eq!(visible_ids(&list), expected, "filter {filter}");
        }
    }

    #[test]
    fn failed_transaction_only_visible_under_all() {
        let mut list = TransactionList::new(fixtures::transactions());
        assert!(visible_ids(&list).contains(&3));

        list.set_filter(Filter::Success);
        assert!(!visible_ids(&list).contains(&3));

        list.set_filter(Filter::Pending);
        assert!(!visible_ids(&list).contains(&3));

        list.set_filter(Filter::All);
        assert!(visible_ids(&list).contains(&3));
    }

    #[test]
    fn setting_same_filter_twice_is_idempotent() {
        let mut list = TransactionList::new(fixtures::transactions());
        list.set_filter(Filter::Pending);
        let first = visible_ids(&list);
        list.set_filter(Filter::Pending);
        assert_eq!(visible_ids(&list), first);
    }

    #[test]
    fn filtering_does_not_mutate_collection() {
        let mut list = TransactionList::new(fixtures::transactions());
        list.set_filter(Filter::Success);
        assert_eq!(list.transactions(), fixtures::transactions().as_slice());
    }

    #[test]
    fn unknown_status_only_visible_under_all() {
        let mut list = TransactionList::new(vec![with_status(9, "refunded")]);
        assert_eq!(visible_ids(&list), vec![9]);
        list.set_filter(Filter::Success);
        assert!(visible_ids(&list).is_empty());
        list.set_filter(Filter::Pending);
        assert!(visible_ids(&list).is_empty());
    }

    #[test]
    fn empty_list() {
        let mut list = TransactionList::new(Vec::new());
        list.set_filter(Filter::Success);
        assert_eq!(list.visible_transactions().count(), 0);
    }

    #[test]
    fn badge_labels() {
        assert_eq!(status_badge(&TransactionStatus::Success).label, "Completed");
        assert_eq!(status_badge(&TransactionStatus::Pending).label, "Pending");
        assert_eq!(status_badge(&TransactionStatus::Failed).label, "Failed");
    }

    #[test]
    fn unrecognized_status_falls_back_to_failed_badge() {
        let badge = status_badge(&TransactionStatus::from("refunded"));
        assert_eq!(badge, status_badge(&TransactionStatus::Failed));
        let badge = status_badge(&TransactionStatus::from(""));
        assert_eq!(badge.label, "Failed");
    }

    #[test]
    fn only_pending_transactions_can_be_cancelled() {
        let transactions = fixtures::transactions();
        assert_eq!(actions(&transactions[0]), vec![TransactionAction::Details]);
        assert_eq!(
            actions(&transactions[1]),
            vec![TransactionAction::Details, TransactionAction::CancelPending]
        );
    }

    #[test]
    fn trigger_does_not_change_state() {
        let mut list = TransactionList::new(fixtures::transactions());
        list.set_filter(Filter::Pending);
        list.trigger(2, TransactionAction::CancelPending);
        list.trigger(1, TransactionAction::CancelPending);
        list.trigger(42, TransactionAction::Details);
        assert_eq!(list.filter(), Filter::Pending);
        assert_eq!(visible_ids(&list), vec![2]);
        assert_eq!(list.get(2).unwrap().status, TransactionStatus::Pending);
    }

    #[test]
    fn aria_label_names_recipient() {
        let transactions = fixtures::transactions();
        assert_eq!(aria_label(&transactions[1]), "Transfer to Marie Anne");
    }

    #[test]
    fn filter_parses_lowercase_names() {
        assert_eq!("all".parse::<Filter>(), Ok(Filter::All));
        assert_eq!("success".parse::<Filter>(), Ok(Filter::Success));
        assert_eq!("pending".parse::<Filter>(), Ok(Filter::Pending));
        assert!("failed".parse::<Filter>().is_err());
    }
}
