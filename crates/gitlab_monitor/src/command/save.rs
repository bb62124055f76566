//! JSON file output for the `--save-in-file` flows.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::CommandError;

/// Directory the CLI writes saved records into.
pub const SAVE_DIR: &str = "saved_datas/projects";

/// Write `dtos` as a pretty-printed JSON array into `dir/name.json`.
///
/// The directory is created when missing and the `.json` suffix is
/// appended when the caller left it off. Returns the path written.
pub fn save_dtos<T: Serialize>(
    dir: &Path,
    name: &str,
    dtos: &[T],
) -> Result<PathBuf, CommandError> {
    fs::create_dir_all(dir)?;

    let file_name = if name.ends_with(".json") {
        name.to_string()
    } else {
        format!("{name}.json")
    };
    let path = dir.join(file_name);

    let json = serde_json::to_string_pretty(dtos)?;
    fs::write(&path, json)?;

    Ok(path)
}
