//! Console entry point for the book catalog.
//!
//! # Responsibility
//! - Resolve configuration, start logging, load the collection.
//! - Hand stdin/stdout to the menu loop.
//!
//! # Invariants
//! - A corrupt or unreadable data file stops startup before any write.
//! - Logging failures are reported on stderr and never block the app.

mod app;
mod console;
mod format;
mod menu;

use book_catalog_core::{
    core_version, init_logging, BookCatalog, CatalogConfig, JsonFileBookRepository,
};
use console::Console;
use log::{error, info};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CatalogConfig::from_current_dir() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("Logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={} data_file={}",
        core_version(),
        config.data_file.display()
    );

    let repo = JsonFileBookRepository::new(&config.data_file);
    let mut catalog = match BookCatalog::open(repo) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("event=catalog_open module=cli status=error error={}", err);
            eprintln!("Failed to load book collection: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    match app::run(&mut catalog, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_loop module=cli status=error error={}", err);
            eprintln!("Console error: {err}");
            ExitCode::FAILURE
        }
    }
}
