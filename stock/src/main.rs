use std::{path::PathBuf, process::ExitCode};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use stock_frontend::{error::AppError, settings::Settings};
use thiserror::Error;
use tracing::{debug, error, subscriber::SetGlobalDefaultError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("application failed: {0:?}")]
    App(#[from] AppError),
    #[error("no cache directory available to write logs into")]
    CacheDirUnresolved,
    #[error("installing the log subscriber failed: {0}")]
    Tracing(#[from] SetGlobalDefaultError),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => {
            debug!("closing application");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("closing application with error: {:?}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Error> {
    let logfile = tracing_appender::rolling::daily(get_logging_path()?, "log");
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_ansi(false)
        .with_writer(logfile)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    debug!("starting application");

    let mut settings = Settings::default();
    map_args_to_settings(&cli().get_matches(), &mut settings);

    Ok(stock_frontend::run(settings).await?)
}

fn cli() -> Command {
    Command::new("stock")
        .about("stock - inventory list with inline editing, search and date filters")
        .args([
            // NOTE: arguments
            Arg::new("products")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf))
                .help("csv file to seed the inventory with, never written back"),
            // NOTE: options
            Arg::new("no-border")
                .long("no-border")
                .action(ArgAction::SetTrue)
                .help("render the product list without a border"),
        ])
}

fn map_args_to_settings(args: &ArgMatches, settings: &mut Settings) {
    settings.products_path = args.get_one("products").cloned();
    settings.show_border = !args.get_flag("no-border");
}

fn get_logging_path() -> Result<PathBuf, Error> {
    dirs::cache_dir()
        .map(|cache_dir| cache_dir.join("stock").join("logs"))
        .ok_or(Error::CacheDirUnresolved)
}
