//! Absolute path handling for the virtual filesystem.
//!
//! Paths are plain strings in canonical form: a leading `/`, no trailing
//! slash, no empty, `.` or `..` segments. The root is `/`.

use crate::config::HOME_PATH;

/// Resolve user input against the current directory.
///
/// - empty input is the home directory
/// - `~` and `~/rest` expand to the home directory
/// - a leading `/` is absolute
/// - anything else is relative to `current`
///
/// The result is always normalized and never climbs above the root.
pub fn resolve(current: &str, input: &str) -> String {
    let input = input.trim();

    if input.is_empty() || input == "~" {
        return HOME_PATH.to_string();
    }

    if let Some(rest) = input.strip_prefix("~/") {
        return normalize(&format!("{}/{}", HOME_PATH, rest));
    }

    if input.starts_with('/') {
        return normalize(input);
    }

    normalize(&format!("{}/{}", current, input))
}

/// Collapse `.`, `..` and repeated slashes into canonical form.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(part),
        }
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Parent directory. The parent of the root is the root.
pub fn parent(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}

/// Join a directory and a child name.
pub fn join(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Canonical path split into its segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Display form for prompts and `pwd`: the home directory becomes `~`.
pub fn display(path: &str) -> String {
    if path == HOME_PATH {
        return "~".to_string();
    }
    match path.strip_prefix(HOME_PATH) {
        Some(rest) if rest.starts_with('/') => format!("~{}", rest),
        _ => path.to_string(),
    }
}
