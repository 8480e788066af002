//! Line-oriented scripts that drive a [`TodoStore`] through the same
//! controls the TUI exposes.
//!
//! Rows are addressed by their 1-based position in the current view, and a
//! command that would press a hidden or disabled control is refused.

use crate::model::todo::{FilterMode, ParseFilterError, TodoUpdate};
use crate::ops::projection::{Header, RowControls, ToggleAction, ViewModel, project};
use crate::ops::store::TodoStore;

/// A single parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchCommand {
    Input(String),
    Submit,
    Add(String),
    Check(usize),
    Uncheck(usize),
    Edit(usize, String),
    Delete(usize),
    Restore(usize),
    Filter(FilterMode),
    Purge,
    Show,
}

/// Error type for batch scripts; `line` is 1-based
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: '{command}' needs {what}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        what: &'static str,
    },
    #[error("line {line}: invalid row number '{value}'")]
    InvalidIndex { line: usize, value: String },
    #[error("line {line}: {source}")]
    InvalidFilter {
        line: usize,
        #[source]
        source: ParseFilterError,
    },
    #[error("line {line}: no row {index} in the {filter} view ({len} shown)")]
    RowOutOfRange {
        line: usize,
        index: usize,
        filter: FilterMode,
        len: usize,
    },
    #[error("line {line}: {reason}")]
    ControlUnavailable { line: usize, reason: String },
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<BatchCommand>, BatchError> {
    let text = text.trim_end_matches(['\r', '\n']);
    let trimmed = text.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = split_word(trimmed);
    let cmd = match word {
        "input" => BatchCommand::Input(rest.to_string()),
        "submit" => BatchCommand::Submit,
        "add" => {
            if rest.is_empty() {
                return Err(BatchError::MissingArgument {
                    line,
                    command: "add",
                    what: "some text",
                });
            }
            BatchCommand::Add(rest.to_string())
        }
        "check" => BatchCommand::Check(parse_index(line, "check", rest)?.0),
        "uncheck" => BatchCommand::Uncheck(parse_index(line, "uncheck", rest)?.0),
        "edit" => {
            let (index, text) = parse_index(line, "edit", rest)?;
            BatchCommand::Edit(index, text.to_string())
        }
        "delete" => BatchCommand::Delete(parse_index(line, "delete", rest)?.0),
        "restore" => BatchCommand::Restore(parse_index(line, "restore", rest)?.0),
        "filter" => {
            if rest.trim().is_empty() {
                return Err(BatchError::MissingArgument {
                    line,
                    command: "filter",
                    what: "a filter name",
                });
            }
            let mode = rest
                .parse::<FilterMode>()
                .map_err(|source| BatchError::InvalidFilter { line, source })?;
            BatchCommand::Filter(mode)
        }
        "purge" => BatchCommand::Purge,
        "show" => BatchCommand::Show,
        other => {
            return Err(BatchError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };
    Ok(Some(cmd))
}

/// Parse a whole script into numbered commands
pub fn parse_script(src: &str) -> Result<Vec<(usize, BatchCommand)>, BatchError> {
    let mut commands = Vec::new();
    for (i, text) in src.lines().enumerate() {
        let line = i + 1;
        if let Some(cmd) = parse_line(line, text)? {
            commands.push((line, cmd));
        }
    }
    Ok(commands)
}

/// Apply one command. `on_show` is called for `show`.
pub fn apply<F>(
    store: &mut TodoStore,
    line: usize,
    cmd: BatchCommand,
    on_show: &mut F,
) -> Result<(), BatchError>
where
    F: FnMut(&TodoStore),
{
    log::debug!("batch line {}: {:?}", line, cmd);
    let view = project(store);

    match cmd {
        BatchCommand::Input(text) => {
            require_add_form(&view, line)?;
            store.set_pending_input(text);
        }
        BatchCommand::Submit => {
            require_add_form(&view, line)?;
            store.submit();
        }
        BatchCommand::Add(text) => {
            require_add_form(&view, line)?;
            store.set_pending_input(text);
            store.submit();
        }
        BatchCommand::Check(index) | BatchCommand::Uncheck(index) => {
            let checked = matches!(cmd, BatchCommand::Check(_));
            let row = resolve_row(&view, line, index)?;
            if !row.checkbox_enabled {
                return Err(unavailable(
                    line,
                    format!("row {} is in the trash; its checkbox is disabled", index),
                ));
            }
            store.update_field(row.id, TodoUpdate::Completed(checked));
        }
        BatchCommand::Edit(index, text) => {
            let row = resolve_row(&view, line, index)?;
            if !row.text_editable {
                return Err(unavailable(
                    line,
                    format!("row {} is read-only (completed or in the trash)", index),
                ));
            }
            store.update_field(row.id, TodoUpdate::Text(text));
        }
        BatchCommand::Delete(index) | BatchCommand::Restore(index) => {
            let wanted = if matches!(cmd, BatchCommand::Delete(_)) {
                ToggleAction::Delete
            } else {
                ToggleAction::Restore
            };
            let row = resolve_row(&view, line, index)?;
            if row.toggle != wanted {
                return Err(unavailable(
                    line,
                    format!(
                        "row {} offers '{}', not '{}'",
                        index,
                        row.toggle.label(),
                        wanted.label()
                    ),
                ));
            }
            store.update_field(row.id, TodoUpdate::Removed(wanted.target_removed()));
        }
        BatchCommand::Filter(mode) => store.set_filter(mode),
        BatchCommand::Purge => match view.header {
            Header::PurgeButton { enabled: true } => {
                store.purge_removed();
            }
            Header::PurgeButton { enabled: false } => {
                return Err(unavailable(line, "the trash is already empty".into()));
            }
            _ => {
                return Err(unavailable(
                    line,
                    format!(
                        "purge is only available in the removed view (current: {})",
                        view.filter
                    ),
                ));
            }
        },
        BatchCommand::Show => on_show(store),
    }
    Ok(())
}

/// Parse and run a script, stopping at the first error
pub fn run_script<F>(store: &mut TodoStore, src: &str, mut on_show: F) -> Result<(), BatchError>
where
    F: FnMut(&TodoStore),
{
    for (line, cmd) in parse_script(src)? {
        apply(store, line, cmd, &mut on_show)?;
    }
    Ok(())
}

/// First word and everything after the single separator that ends it.
/// Text arguments keep any further leading whitespace.
fn split_word(s: &str) -> (&str, &str) {
    s.split_once(char::is_whitespace).unwrap_or((s, ""))
}

/// Leading 1-based row number, plus whatever text follows it
fn parse_index<'a>(
    line: usize,
    command: &'static str,
    rest: &'a str,
) -> Result<(usize, &'a str), BatchError> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return Err(BatchError::MissingArgument {
            line,
            command,
            what: "a row number",
        });
    }
    let (num, tail) = split_word(rest);
    match num.parse::<usize>() {
        Ok(n) if n > 0 => Ok((n, tail)),
        _ => Err(BatchError::InvalidIndex {
            line,
            value: num.to_string(),
        }),
    }
}

fn resolve_row(view: &ViewModel, line: usize, index: usize) -> Result<&RowControls, BatchError> {
    view.row(index - 1).ok_or(BatchError::RowOutOfRange {
        line,
        index,
        filter: view.filter,
        len: view.rows.len(),
    })
}

fn require_add_form(view: &ViewModel, line: usize) -> Result<(), BatchError> {
    if view.add_form_shown() {
        Ok(())
    } else {
        Err(unavailable(
            line,
            format!("the add form is not shown in the {} view", view.filter),
        ))
    }
}

fn unavailable(line: usize, reason: String) -> BatchError {
    BatchError::ControlUnavailable { line, reason }
}
