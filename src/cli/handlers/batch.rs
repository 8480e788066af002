use std::io::Read;

use crate::cli::commands::BatchArgs;
use crate::cli::output::{ViewJson, format_view, view_to_json};
use crate::ops::batch;
use crate::ops::store::TodoStore;

/// Run a script against `store`, printing every `show` and the final view
pub fn cmd_batch(args: BatchArgs, mut store: TodoStore) -> Result<(), Box<dyn std::error::Error>> {
    let src = read_script(args.script.as_deref())?;

    let mut snapshots: Vec<ViewJson> = Vec::new();
    let result = batch::run_script(&mut store, &src, |s| snapshots.push(view_to_json(s)));
    // Views shown before a failing line still get printed
    if result.is_ok() {
        snapshots.push(view_to_json(&store));
    }

    for (i, view) in snapshots.iter().enumerate() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(view)?);
        } else {
            if i > 0 {
                println!();
            }
            for line in format_view(view) {
                println!("{}", line);
            }
        }
    }

    result?;
    log::info!("batch finished with {} items", store.len());
    Ok(())
}

/// Script text from a file, or stdin for `None` / `-`
pub fn read_script(path: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match path {
        None | Some("-") => {
            let mut src = String::new();
            std::io::stdin()
                .read_to_string(&mut src)
                .map_err(|e| format!("cannot read script from stdin: {}", e))?;
            Ok(src)
        }
        Some(path) => Ok(std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read script '{}': {}", path, e))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_script_names_the_path() {
        let err = read_script(Some("/nonexistent/tick-script.txt")).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("cannot read script '/nonexistent/tick-script.txt'"),
            "{}",
            err
        );
    }

    #[test]
    fn script_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.txt");
        std::fs::write(&path, "add milk\n").unwrap();
        let src = read_script(path.to_str()).unwrap();
        assert_eq!(src, "add milk\n");
    }
}
