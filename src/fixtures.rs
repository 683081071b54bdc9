//! Default data sets standing in for a backend.
//!
//! These are plain constructors rather than shared statics so every view-model
//! and source owns its own copy and tests can pass in anything else.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::Amount;
use crate::model::{PaymentMode, Transaction, TransactionStatus, Transfer, TransferStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture dates are valid")
}

fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .map(|naive: NaiveDateTime| naive.and_utc())
        .expect("fixture times are valid")
}

fn transaction(
    id: u32,
    recipient: &str,
    amount: u64,
    status: TransactionStatus,
    date: NaiveDate,
) -> Transaction {
    Transaction {
        id,
        recipient: recipient.to_string(),
        amount: Amount::new(amount),
        status,
        date,
    }
}

/// Transaction history shown in the list.
pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction(
            1,
            "Moussa Bouabré",
            50_000,
            TransactionStatus::Success,
            date(2025, 1, 15),
        ),
        transaction(
            2,
            "Marie Anne",
            25_000,
            TransactionStatus::Pending,
            date(2025, 1, 20),
        ),
        transaction(
            3,
            "Compte Perso",
            150_000,
            TransactionStatus::Failed,
            date(2025, 1, 10),
        ),
        transaction(
            4,
            "Issouf Sangaré",
            75_000,
            TransactionStatus::Success,
            date(2025, 1, 18),
        ),
    ]
}

/// The result of one successful feed fetch.
pub fn transfers() -> Vec<Transfer> {
    vec![
        Transfer {
            id: 101,
            recipient: "Awa Konaté".to_string(),
            phone: "+225 07 88 77 66".to_string(),
            country: "Côte d'Ivoire".to_string(),
            amount: Amount::new(45_000),
            currency: "XOF".to_string(),
            status: TransferStatus::Completed,
            timestamp: instant(2025, 1, 20, 10, 30),
            commission: 2.5,
            mode: PaymentMode::MobileMoney,
        },
        Transfer {
            id: 102,
            recipient: "Fatou Diop".to_string(),
            phone: "+221 77 123 45 67".to_string(),
            country: "Sénégal".to_string(),
            amount: Amount::new(25_000),
            currency: "XOF".to_string(),
            status: TransferStatus::Pending,
            timestamp: instant(2025, 1, 20, 14, 15),
            commission: 2.5,
            mode: PaymentMode::Cash,
        },
        Transfer {
            id: 103,
            recipient: "Mamadou Camara".to_string(),
            phone: "+224 62 98 76 54".to_string(),
            country: "Guinée".to_string(),
            amount: Amount::new(125_000),
            currency: "GNF".to_string(),
            status: TransferStatus::Completed,
            timestamp: instant(2025, 1, 19, 9, 45),
            commission: 3.5,
            mode: PaymentMode::Bank,
        },
    ]
}
