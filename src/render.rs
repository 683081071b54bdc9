//! Plain text rendering of the screen for a terminal.

use chrono::{DateTime, NaiveDate, Utc};
use std::fmt::{self, Write};

use crate::advice::{self, Recommendation};
use crate::feed::LoadState;
use crate::list::{self, Filter, TransactionList};
use crate::model::{Transaction, Transfer, TransferStatus};

pub const TITLE: &str = "Easy Transfert";
pub const TAGLINE: &str = "Your money transfers made simple";
pub const HISTORY_HEADING: &str = "Transfer history";
pub const FEED_HEADING: &str = "Live transfers (API)";
pub const LOADING_TEXT: &str = "Connecting to secure server...";
pub const RETRY_LABEL: &str = "Retry";
pub const REFRESH_LABEL: &str = "Refresh";

/// Currency of the transaction history.
const HISTORY_CURRENCY: &str = "Fcfa";

/// e.g. `Wed 15 Jan`
pub fn transaction_date(date: NaiveDate) -> String {
    date.format("%a %-d %b").to_string()
}

/// e.g. `20 Jan, 10:30`
pub fn transfer_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-d %b, %H:%M").to_string()
}

pub fn transfer_status_label(status: TransferStatus) -> &'static str {
    match status {
        TransferStatus::Completed => "Delivered",
        TransferStatus::Pending => "In progress",
    }
}

pub fn write_header(out: &mut impl Write) -> fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{TAGLINE}")
}

fn write_filter_tabs(out: &mut impl Write, active: Filter) -> fmt::Result {
    let tabs: Vec<String> = Filter::ALL
        .into_iter()
        .map(|filter| {
            if filter == active {
                format!("[{}]", filter.label())
            } else {
                filter.label().to_string()
            }
        })
        .collect();
    writeln!(out, "Filter: {}", tabs.join(" | "))
}

fn write_transaction(out: &mut impl Write, transaction: &Transaction) -> fmt::Result {
    let badge = list::status_badge(&transaction.status);
    let buttons: Vec<String> = list::actions(transaction)
        .into_iter()
        .map(|action| format!("[{}]", action.label()))
        .collect();
    writeln!(
        out,
        "- {} · {} · {} {} · {} · {}",
        transaction.recipient,
        transaction_date(transaction.date),
        transaction.amount,
        HISTORY_CURRENCY,
        badge.label,
        buttons.join(" ")
    )
}

pub fn write_transactions(out: &mut impl Write, list: &TransactionList) -> fmt::Result {
    writeln!(out, "== {HISTORY_HEADING} ==")?;
    write_filter_tabs(out, list.filter())?;

    let mut shown = 0;
    for transaction in list.visible_transactions() {
        write_transaction(out, transaction)?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "No transactions")?;
    }
    Ok(())
}

fn write_transfer(out: &mut impl Write, transfer: &Transfer) -> fmt::Result {
    writeln!(
        out,
        "- {} ({}) · {} {} · {} · Fees: {}% · {} · {}",
        transfer.recipient,
        transfer.country,
        transfer.amount,
        transfer.currency,
        transfer.mode,
        transfer.commission,
        transfer_time(transfer.timestamp),
        transfer_status_label(transfer.status)
    )
}

/// Renders exactly one of: loading indicator, error with retry, or transfers.
pub fn write_feed(out: &mut impl Write, state: &LoadState) -> fmt::Result {
    writeln!(out, "== {FEED_HEADING} ==")?;
    match state {
        LoadState::Idle => Ok(()),
        LoadState::Loading => writeln!(out, "{LOADING_TEXT}"),
        LoadState::Error(message) => {
            writeln!(out, "Error: {message}")?;
            writeln!(out, "[{RETRY_LABEL}]")
        }
        LoadState::Success(transfers) => {
            writeln!(out, "[{REFRESH_LABEL}]")?;
            for transfer in transfers {
                write_transfer(out, transfer)?;
            }
            Ok(())
        }
    }
}

fn write_recommendation(out: &mut impl Write, rank: usize, item: &Recommendation) -> fmt::Result {
    writeln!(out, "{rank}. {}", item.title)?;
    writeln!(out, "   {}", item.body)?;
    if let Some(example) = item.example {
        writeln!(out, "   Example: {example}")?;
    }
    Ok(())
}

pub fn write_advice(out: &mut impl Write) -> fmt::Result {
    writeln!(out, "== {} ==", advice::HEADING)?;
    for (idx, item) in advice::RECOMMENDATIONS.iter().enumerate() {
        write_recommendation(out, idx + 1, item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn feed_text(state: &LoadState) -> String {
        let mut out = String::new();
        write_feed(&mut out, state).unwrap();
        out
    }

    #[test]
    fn dates() {
        let transactions = fixtures::transactions();
        assert_eq!(transaction_date(transactions[0].date), "Wed 15 Jan");
        assert_eq!(transfer_time(fixtures::transfers()[2].timestamp), "19 Jan, 09:45");
    }

    #[test]
    fn transactions_show_badges_and_cancel_for_pending() {
        let list = TransactionList::new(fixtures::transactions());
        let mut out = String::new();
        write_transactions(&mut out, &list).unwrap();

        assert!(out.contains("Filter: [All] | Successful | In progress"));
        assert!(out.contains("- Moussa Bouabré · Wed 15 Jan · 50\u{202f}000 Fcfa · Completed · [Details]\n"));
        assert!(out.contains("Marie Anne · Mon 20 Jan · 25\u{202f}000 Fcfa · Pending · [Details] [Cancel]"));
        assert!(out.contains("Compte Perso · Fri 10 Jan · 150\u{202f}000 Fcfa · Failed"));
    }

    #[test]
    fn empty_selection_says_so() {
        let mut list = TransactionList::new(Vec::new());
        list.set_filter(Filter::Pending);
        let mut out = String::new();
        write_transactions(&mut out, &list).unwrap();
        assert!(out.contains("Filter: All | Successful | [In progress]"));
        assert!(out.contains("No transactions"));
    }

    #[test]
    fn loading_shows_only_indicator() {
        let out = feed_text(&LoadState::Loading);
        assert!(out.contains(LOADING_TEXT));
        assert!(!out.contains(RETRY_LABEL));
        assert!(!out.contains("Awa"));
    }

    #[test]
    fn error_shows_message_and_retry() {
        let out = feed_text(&LoadState::Error("Network error".to_string()));
        assert!(out.contains("Error: Network error"));
        assert!(out.contains("[Retry]"));
        assert!(!out.contains(LOADING_TEXT));
    }

    #[test]
    fn success_shows_every_transfer() {
        let out = feed_text(&LoadState::Success(fixtures::transfers()));
        assert!(!out.contains(LOADING_TEXT));
        assert!(!out.contains(RETRY_LABEL));
        assert!(out.contains(
            "- Awa Konaté (Côte d'Ivoire) · 45\u{202f}000 XOF · Mobile Money · Fees: 2.5% · 20 Jan, 10:30 · Delivered"
        ));
        assert!(out.contains("Fatou Diop (Sénégal)"));
        assert!(out.contains("In progress"));
        assert!(out.contains("125\u{202f}000 GNF · Bank · Fees: 3.5%"));
    }

    #[test]
    fn advice_lists_three_items() {
        let mut out = String::new();
        write_advice(&mut out).unwrap();
        assert!(out.contains("1. 3-step flow"));
        assert!(out.contains("3. Permanent"));
        assert_eq!(out.matches("Example:").count(), 1);
    }
}
