use std::env;
use std::io;
use std::process::ExitCode;

use easy_transfer::csv::{read_transactions, write_transactions};
use easy_transfer::{FeedConfig, Filter, Screen, Transaction, fixtures};
use tokio_stream::StreamExt;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: easy-transfer [--filter all|success|pending] [--csv] [transactions.csv]";

#[derive(Debug, Default)]
struct Args {
    filter: Filter,
    csv_output: bool,
    path: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--filter" => {
                let value = args.next().ok_or("--filter needs a value")?;
                parsed.filter = value.parse().map_err(|e| format!("{e}"))?;
            }
            "--csv" => parsed.csv_output = true,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            _ if parsed.path.is_some() => return Err("only one input file is accepted".into()),
            _ => parsed.path = Some(arg),
        }
    }
    Ok(parsed)
}

/// Read a transaction fixture; bad rows are reported and skipped.
fn load_transactions(path: &str) -> Option<Vec<Transaction>> {
    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let rows = match read_transactions(path) {
        Ok(rows) => rows,
        Err(e) => {
            error!("{e}");
            return None;
        }
    };

    let mut transactions = Vec::new();
    for result in rows {
        match result {
            Ok(tx) => transactions.push(tx),
            Err(e) => warn!("{e}"),
        }
    }
    Some(transactions)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let config = match FeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    let transactions = match &args.path {
        Some(path) => match load_transactions(path) {
            Some(transactions) => transactions,
            None => return ExitCode::FAILURE,
        },
        None => fixtures::transactions(),
    };

    let mut screen = match Screen::simulated(transactions, config) {
        Ok(screen) => screen,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };
    screen.transactions_mut().set_filter(args.filter);

    if args.csv_output {
        let visible = screen.transactions().visible_transactions();
        if let Err(e) = write_transactions(io::stdout().lock(), visible) {
            error!("{e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    screen.mount();
    let mut states = screen.feed().states();
    while let Some(state) = states.next().await {
        info!(state = state.name(), "transfer feed state");
        if state.is_settled() {
            break;
        }
    }

    if let Some(message) = screen.feed().state().error() {
        warn!(reason = message, "transfer feed failed to load, retry available");
    }

    print!("{screen}");
    ExitCode::SUCCESS
}
