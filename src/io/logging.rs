use std::path::Path;

use log::LevelFilter;

/// Error type for logger setup
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: String,
        source: std::io::Error,
    },
    #[error("logger already installed: {0}")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Where log records go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Drop everything
    Off,
    /// Append to a file (the TUI owns the terminal)
    File(&'a Path),
    /// Standard error (batch mode)
    Stderr,
}

/// `-v` count to level: none → warn, one → debug, more → trace
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
pub fn init(target: LogTarget<'_>, verbosity: u8) -> Result<(), LoggingError> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level_for(verbosity));

    let dispatch = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::File(path) => {
            let file = fern::log_file(path).map_err(|e| LoggingError::OpenError {
                path: path.display().to_string(),
                source: e,
            })?;
            dispatch.chain(file)
        }
        LogTarget::Stderr => dispatch.chain(std::io::stderr()),
    };
    dispatch.apply()?;
    Ok(())
}
