use bank_ledger::{AppConfig, Session, backend::JsonStore};

use std::io;
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// TOML file with data_file and currency_symbol settings
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// File the accounts are loaded from and saved to
    #[clap(short, long, value_parser)]
    data_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Cli::parse();

    let config = AppConfig::resolve(args.config.as_deref(), args.data_file)?;
    info!("using data file {}", config.data_file.display());

    let store = JsonStore::new(&config.data_file);
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut session = Session::open(&store, stdin.lock(), stdout.lock())
        .with_context(|| "failed to write to terminal")?
        .with_currency(&config.currency_symbol);
    session.run()
        .with_context(|| "terminal i/o failed")?;

    return Ok(());
}
