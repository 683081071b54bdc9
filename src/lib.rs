pub mod advice;
pub mod amount;
pub mod config;
pub mod csv;
pub mod feed;
pub mod fixtures;
pub mod list;
pub mod model;
pub mod render;
pub mod screen;

pub use amount::Amount;
pub use config::FeedConfig;
pub use feed::{LoadState, TransferFeed};
pub use list::{Filter, TransactionList};
pub use model::{Transaction, TransactionStatus, Transfer, TxId};
pub use screen::Screen;
