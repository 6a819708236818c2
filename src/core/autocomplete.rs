//! Tab autocomplete functionality for terminal commands and paths.
//!
//! This module provides autocompletion for:
//! - Command names (e.g., "cl" → "clear")
//! - Directory paths for `cd`, `ls`, `tree`
//! - File paths for `cat`
//! - Command names as the argument of `help`
//!
//! The word under completion is always the last one, so flags typed
//! before it (`ls -la pro`) are kept as they are.

use crate::core::{Command, VirtualFs, path};
use crate::models::Node;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum AutocompleteResult {
    /// Single exact match - complete with this value.
    Single(String),
    /// Multiple matches - (common_prefix, all_matches).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Configuration
// ============================================================================

/// Commands that accept directory paths as arguments.
const DIR_COMMANDS: &[&str] = &["cd", "ls", "tree"];

/// Commands that accept file paths as arguments.
const FILE_COMMANDS: &[&str] = &["cat"];

// ============================================================================
// Completion Context
// ============================================================================

/// Determines what type of completion is needed for a command.
#[derive(Debug, Clone, Copy, PartialEq)]
enum CompletionMode {
    /// Complete command names only.
    Command,
    /// Complete a command name given to `help`.
    HelpTopic,
    /// Complete directory paths (for cd, ls, tree).
    DirectoryPath,
    /// Complete file paths (for cat).
    FilePath,
    /// No completion available.
    None,
}

/// Input split around the word being completed.
struct Split<'a> {
    mode: CompletionMode,
    /// Everything before the last word, trailing space included.
    head: &'a str,
    /// The last word (may be empty after a trailing space).
    word: &'a str,
}

impl<'a> Split<'a> {
    fn from_input(input: &'a str) -> Self {
        let Some((cmd, _)) = input.split_once(' ') else {
            return Self {
                mode: CompletionMode::Command,
                head: "",
                word: input,
            };
        };

        let word_start = input.rfind(' ').map_or(0, |i| i + 1);
        let (head, word) = input.split_at(word_start);

        let cmd_lower = cmd.to_lowercase();
        let mode = if cmd_lower == "help" {
            CompletionMode::HelpTopic
        } else if word.starts_with('-') {
            CompletionMode::None
        } else if DIR_COMMANDS.contains(&cmd_lower.as_str()) {
            CompletionMode::DirectoryPath
        } else if FILE_COMMANDS.contains(&cmd_lower.as_str()) {
            CompletionMode::FilePath
        } else {
            CompletionMode::None
        };

        Self { mode, head, word }
    }
}

// ============================================================================
// Path Parsing
// ============================================================================

/// Parsed path components for autocomplete.
struct ParsedPath<'a> {
    /// Directory prefix (e.g., "projects/" or "").
    dir_part: &'a str,
    /// Filename/directory name being completed.
    name_part: &'a str,
    /// Resolved search directory path.
    search_dir: String,
}

impl<'a> ParsedPath<'a> {
    /// Parse a partial path and resolve the search directory.
    fn parse(partial: &'a str, current_path: &str, fs: &VirtualFs) -> Option<Self> {
        let (dir_part, name_part) = match partial.rfind('/') {
            Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
            None => ("", partial),
        };

        let search_dir = if dir_part.is_empty() {
            current_path.to_string()
        } else if dir_part == "/" {
            "/".to_string()
        } else {
            path::resolve(current_path, dir_part.trim_end_matches('/'))
        };

        if !fs.is_directory(&search_dir) {
            return None;
        }

        Some(Self {
            dir_part,
            name_part,
            search_dir,
        })
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
///
/// Returns a completion result based on the current input and filesystem state.
pub fn autocomplete(input: &str, current_path: &str, fs: &VirtualFs) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    let split = Split::from_input(input);

    match split.mode {
        CompletionMode::Command => complete_command("", split.word),
        CompletionMode::HelpTopic => complete_command(split.head, split.word),
        CompletionMode::DirectoryPath | CompletionMode::FilePath => complete_path(
            split.head,
            split.word,
            current_path,
            fs,
            split.mode == CompletionMode::DirectoryPath,
        ),
        CompletionMode::None => AutocompleteResult::None,
    }
}

/// Get autocomplete suggestion for ghost text hint (while typing).
///
/// Returns the suffix that would complete the current input.
pub fn get_hint(input: &str, current_path: &str, fs: &VirtualFs) -> Option<String> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    let split = Split::from_input(input);

    match split.mode {
        CompletionMode::Command | CompletionMode::HelpTopic => get_command_hint(split.word),
        CompletionMode::DirectoryPath | CompletionMode::FilePath => get_path_hint(
            split.word,
            current_path,
            fs,
            split.mode == CompletionMode::DirectoryPath,
        ),
        CompletionMode::None => None,
    }
}

// ============================================================================
// Command Completion
// ============================================================================

/// Complete command name.
fn complete_command(head: &str, partial: &str) -> AutocompleteResult {
    let partial_lower = partial.to_lowercase();
    let matches: Vec<String> = Command::names()
        .iter()
        .filter(|cmd| cmd.starts_with(&partial_lower))
        .map(|s| s.to_string())
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{}{} ", head, matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(format!("{}{}", head, common), matches)
        }
    }
}

/// Get hint for command name completion.
fn get_command_hint(partial: &str) -> Option<String> {
    if partial.is_empty() {
        return None;
    }
    let partial_lower = partial.to_lowercase();
    Command::names()
        .iter()
        .find(|cmd| cmd.starts_with(&partial_lower) && **cmd != partial_lower)
        .map(|cmd| cmd[partial.len()..].to_string())
}

// ============================================================================
// Path Completion
// ============================================================================

/// Complete file/directory path.
fn complete_path(
    head: &str,
    partial: &str,
    current_path: &str,
    fs: &VirtualFs,
    dirs_only: bool,
) -> AutocompleteResult {
    let Some(parsed) = ParsedPath::parse(partial, current_path, fs) else {
        return AutocompleteResult::None;
    };

    let Some(entries) = fs.list_dir(&parsed.search_dir) else {
        return AutocompleteResult::None;
    };

    let matches = get_matching_entries(&entries, parsed.name_part, dirs_only);
    build_path_result(head, &parsed, matches)
}

/// Get hint for path completion.
fn get_path_hint(
    partial: &str,
    current_path: &str,
    fs: &VirtualFs,
    dirs_only: bool,
) -> Option<String> {
    if partial.is_empty() {
        return None;
    }
    let parsed = ParsedPath::parse(partial, current_path, fs)?;
    let entries = fs.list_dir(&parsed.search_dir)?;
    let matches = get_matching_entries(&entries, parsed.name_part, dirs_only);

    // Find first match that extends current input
    matches
        .iter()
        .find(|(name, _)| name.len() > parsed.name_part.len())
        .map(|(name, is_dir)| {
            let suffix = if *is_dir { "/" } else { "" };
            format!("{}{}", &name[parsed.name_part.len()..], suffix)
        })
}

/// Get filtered entries matching the partial name.
///
/// Names match by exact prefix since lookups are case-sensitive. Hidden
/// entries are offered only once the partial name starts with a dot.
fn get_matching_entries<'a>(
    entries: &[&'a Node],
    name_part: &str,
    dirs_only: bool,
) -> Vec<(&'a str, bool)> {
    let show_hidden = name_part.starts_with('.');
    entries
        .iter()
        .filter(|node| !dirs_only || node.is_directory())
        .filter(|node| show_hidden || !node.is_hidden())
        .filter(|node| node.name.starts_with(name_part))
        .map(|node| (node.name.as_str(), node.is_directory()))
        .collect()
}

/// Build the autocomplete result from matched paths.
fn build_path_result(
    head: &str,
    parsed: &ParsedPath,
    matches: Vec<(&str, bool)>,
) -> AutocompleteResult {
    match matches.as_slice() {
        [] => AutocompleteResult::None,
        [(name, is_dir)] => {
            let suffix = if *is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!("{}{}{}{}", head, parsed.dir_part, name, suffix))
        }
        _ => {
            let names: Vec<String> = matches.iter().map(|(n, _)| n.to_string()).collect();
            let common = find_common_prefix(&names);

            let display_names: Vec<String> = matches
                .iter()
                .map(|(name, is_dir)| {
                    if *is_dir {
                        format!("{}/", name)
                    } else {
                        name.to_string()
                    }
                })
                .collect();

            AutocompleteResult::Multiple(
                format!("{}{}{}", head, parsed.dir_part, common),
                display_names,
            )
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the common prefix of multiple strings.
fn find_common_prefix(strings: &[String]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };

    let mut prefix_len = first.len();
    for s in &strings[1..] {
        prefix_len = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((_, a), b)| a == b)
            .last()
            .map_or(0, |((i, a), _)| i + a.len_utf8())
            .min(prefix_len);
    }

    first[..prefix_len].to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_fs() -> VirtualFs {
        VirtualFs::new(Node::directory(
            "/",
            vec![Node::directory(
                "home",
                vec![Node::directory(
                    "obumbravit",
                    vec![
                        Node::file("about.md", ""),
                        Node::file(".profile", ""),
                        Node::directory(
                            "projects",
                            vec![
                                Node::directory("AirDnD", vec![]),
                                Node::directory("Aurora", vec![]),
                            ],
                        ),
                        Node::file("resume.md", ""),
                    ],
                )],
            )],
        ))
    }

    const HOME: &str = "/home/obumbravit";

    #[test]
    fn test_command_completion_single() {
        match complete_command("", "cle") {
            AutocompleteResult::Single(s) => assert_eq!(s, "clear "),
            _ => panic!("Expected single match"),
        }
    }

    #[test]
    fn test_command_completion_multiple() {
        match complete_command("", "c") {
            AutocompleteResult::Multiple(common, matches) => {
                assert_eq!(common, "c");
                assert!(matches.contains(&"cat".to_string()));
                assert!(matches.contains(&"cd".to_string()));
                assert!(matches.contains(&"clear".to_string()));
            }
            _ => panic!("Expected multiple matches"),
        }
    }

    #[test]
    fn test_no_match() {
        assert_eq!(complete_command("", "xyz"), AutocompleteResult::None);
    }

    #[test]
    fn test_common_prefix() {
        let strings = vec![
            "hello".to_string(),
            "help".to_string(),
            "helicopter".to_string(),
        ];
        assert_eq!(find_common_prefix(&strings), "hel");
        assert_eq!(find_common_prefix(&["AirDnD".into(), "Aurora".into()]), "A");
        assert_eq!(find_common_prefix(&["abc".into(), "xyz".into()]), "");
    }

    #[test]
    fn test_completion_mode() {
        assert_eq!(Split::from_input("cd").mode, CompletionMode::Command);
        assert_eq!(Split::from_input("cd some/path").mode, CompletionMode::DirectoryPath);
        assert_eq!(Split::from_input("tree pro").mode, CompletionMode::DirectoryPath);
        assert_eq!(Split::from_input("cat file.txt").mode, CompletionMode::FilePath);
        assert_eq!(Split::from_input("help l").mode, CompletionMode::HelpTopic);
        assert_eq!(Split::from_input("ls -l").mode, CompletionMode::None);
        assert_eq!(Split::from_input("pwd arg").mode, CompletionMode::None);
    }

    #[test]
    fn test_directory_completion() {
        let fs = create_test_fs();
        assert_eq!(
            autocomplete("cd pro", HOME, &fs),
            AutocompleteResult::Single("cd projects/".to_string())
        );
        assert_eq!(
            autocomplete("ls -la pro", HOME, &fs),
            AutocompleteResult::Single("ls -la projects/".to_string())
        );
    }

    #[test]
    fn test_directory_completion_skips_files() {
        let fs = create_test_fs();
        assert_eq!(autocomplete("cd ab", HOME, &fs), AutocompleteResult::None);
    }

    #[test]
    fn test_file_completion() {
        let fs = create_test_fs();
        assert_eq!(
            autocomplete("cat ab", HOME, &fs),
            AutocompleteResult::Single("cat about.md ".to_string())
        );
    }

    #[test]
    fn test_nested_multiple() {
        let fs = create_test_fs();
        match autocomplete("cd projects/A", HOME, &fs) {
            AutocompleteResult::Multiple(common, names) => {
                assert_eq!(common, "cd projects/A");
                assert_eq!(names, vec!["AirDnD/", "Aurora/"]);
            }
            other => panic!("Expected multiple matches, got {:?}", other),
        }
    }

    #[test]
    fn test_hidden_entries() {
        let fs = create_test_fs();
        match autocomplete("cat ", HOME, &fs) {
            AutocompleteResult::Multiple(_, names) => assert!(!names.contains(&".profile".to_string())),
            other => panic!("Expected multiple matches, got {:?}", other),
        }
        assert_eq!(
            autocomplete("cat .p", HOME, &fs),
            AutocompleteResult::Single("cat .profile ".to_string())
        );
    }

    #[test]
    fn test_absolute_path() {
        let fs = create_test_fs();
        assert_eq!(
            autocomplete("cd /ho", "/", &fs),
            AutocompleteResult::Single("cd /home/".to_string())
        );
    }

    #[test]
    fn test_help_topic() {
        let fs = create_test_fs();
        assert_eq!(
            autocomplete("help tr", HOME, &fs),
            AutocompleteResult::Single("help tree ".to_string())
        );
    }

    #[test]
    fn test_hints() {
        let fs = create_test_fs();
        assert_eq!(get_hint("cle", HOME, &fs), Some("ar".to_string()));
        assert_eq!(get_hint("cd pro", HOME, &fs), Some("jects/".to_string()));
        assert_eq!(get_hint("cat res", HOME, &fs), Some("ume.md".to_string()));
        assert_eq!(get_hint("cd projects/", HOME, &fs), Some("AirDnD/".to_string()));
        assert_eq!(get_hint("cd ", HOME, &fs), None);
        assert_eq!(get_hint("clear", HOME, &fs), None);
    }
}
