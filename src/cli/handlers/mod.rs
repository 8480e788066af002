mod batch;
pub use batch::{cmd_batch, read_script};

use std::path::Path;

use crate::cli::commands::*;
use crate::io::config_io;
use crate::io::logging::{self, LogTarget};
use crate::model::{Config, FilterMode};
use crate::ops::store::TodoStore;
use crate::tui::{self, app::App};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(cli.config.as_deref().map(Path::new))?;
    let log_file = cli.log_file.as_deref().map(Path::new);

    match cli.command {
        None => {
            // The TUI owns the terminal: file or nothing
            let target = log_file.map_or(LogTarget::Off, LogTarget::File);
            logging::init(target, cli.verbose)?;
            let store = initial_store(&config, cli.filter);
            tui::run(App::new(store, &config.ui))
        }
        Some(Commands::Batch(args)) => {
            let target = match log_file {
                Some(path) => LogTarget::File(path),
                None if cli.verbose > 0 => LogTarget::Stderr,
                None => LogTarget::Off,
            };
            logging::init(target, cli.verbose)?;
            let store = initial_store(&config, cli.filter);
            cmd_batch(args, store)
        }
    }
}

/// Empty store opened on `--filter`, falling back to the configured view
fn initial_store(config: &Config, filter: Option<FilterMode>) -> TodoStore {
    let mut store = TodoStore::new();
    store.set_filter(filter.unwrap_or(config.ui.default_filter));
    store
}
