//! Optional `KEY=VALUE` file loaded into the process environment at startup.
//!
//! Each line is split on its first `=` with no quoting, escaping or expansion. Existing
//! variables always win over the file, and lines without `=` are skipped.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::consts;
use crate::errors::AssistantError;

/// `$JARVIS_ENV_FILE` if set, otherwise `.env` beside the executable.
pub fn default_env_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(consts::ENV_FILE_PATH) {
        return Some(PathBuf::from(path));
    }
    std::env::current_exe()
        .ok()?
        .parent()
        .map(|dir| dir.join(consts::ENV_FILE_NAME))
}

/// `KEY=VALUE` with both sides trimmed. `None` for blank lines, comments and lines
/// without `=` or with an empty key.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key.to_string(), value.trim().to_string()))
}

pub fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, AssistantError> {
    if !path.is_file() {
        return Ok(vec![]);
    }

    let contents = std::fs::read_to_string(path)?;
    let entries = contents
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let entry = parse_line(line);
            if entry.is_none() && !line.trim().is_empty() && !line.trim_start().starts_with('#') {
                log::warn!("skipping line {} in {}", index + 1, path.display());
            }
            entry
        })
        .collect();

    Ok(entries)
}

/// Keeps the entries whose key is not yet in the environment. The first occurrence of a
/// repeated key wins.
pub fn missing_entries(entries: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|(key, _)| seen.insert(key.clone()) && std::env::var_os(key).is_none())
        .collect()
}

/// Returns how many variables were set.
///
/// Only `main` calls this, before the logger, the runtime or any other thread exists.
pub fn load_env_file(path: &Path) -> Result<usize, AssistantError> {
    let entries = missing_entries(read_env_file(path)?);

    for (key, value) in &entries {
        // SAFETY: the sole caller is `main`, ahead of every thread it spawns.
        unsafe { std::env::set_var(key, value) };
    }

    Ok(entries.len())
}
