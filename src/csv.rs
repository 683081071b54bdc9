use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::Transaction;

/// Errors that can occur when reading or writing transaction csv files
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: duplicate transaction id {id}")]
    DuplicateId { line: usize, id: u32 },

    #[error("failed to write row: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush output: {0}")]
    Flush(#[from] io::Error),
}

/// Read a transaction fixture from a csv file with header
/// `id,recipient,amount,status,date`.
///
/// Rows are yielded one by one so a bad row only skips itself.
pub fn read_transactions(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Transaction, CsvError>>, CsvError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    Ok(reader
        .into_deserialize::<Transaction>()
        .enumerate()
        .map(move |(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let transaction = result.map_err(|source| CsvError::Parse { line, source })?;
            if !seen.insert(transaction.id) {
                return Err(CsvError::DuplicateId {
                    line,
                    id: transaction.id,
                });
            }
            Ok(transaction)
        }))
}

/// Write transactions in the same csv format `read_transactions` accepts
pub fn write_transactions<'a>(
    writer: impl io::Write,
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Result<(), CsvError> {
    let mut writer = csv::Writer::from_writer(writer);
    for transaction in transactions {
        writer.serialize(transaction)?;
    }
    writer.flush()?;
    Ok(())
}
