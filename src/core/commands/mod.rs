//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute_command` for running a parsed command against the filesystem
//!
//! # Architecture
//!
//! Input words are parsed into the closed `Command` enum, options included,
//! so malformed flags fail before any handler runs. Handlers return
//! `Result<CommandOutput, ShellError>`; the interpreter turns either side
//! into a `CommandResult`.

mod cat;
mod execute;
mod help;
mod ls;
mod result;
mod tree;

pub use execute::{Context, execute_command};
pub use result::{CommandOutput, CommandResult, ShellAction};

use crate::core::error::ShellError;

// =============================================================================
// Options
// =============================================================================

/// Options for `ls`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LsOptions {
    /// `-a`: include dot-named entries
    pub all: bool,
    /// `-l`: long format
    pub long: bool,
    /// `-R`: recurse into subdirectories
    pub recursive: bool,
    /// `-r`: reverse the sort order
    pub reverse: bool,
    pub paths: Vec<String>,
}

/// Options for `cat`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatOptions {
    /// `-n`: number output lines
    pub number: bool,
    /// `-A`: show tabs, carriage returns and line ends
    pub show_all: bool,
    /// `-s`: squeeze repeated blank lines
    pub squeeze: bool,
    pub files: Vec<String>,
}

/// Options for `tree`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeOptions {
    /// `-a`: include dot-named entries
    pub all: bool,
    /// `--max-depth=N` / `-L N`: levels below the root to descend
    pub max_depth: Option<usize>,
    pub path: Option<String>,
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Ls(LsOptions),
    /// Target directory; `None` goes home.
    Cd(Option<String>),
    Cat(CatOptions),
    Pwd,
    Tree(TreeOptions),
    /// Optional command to describe.
    Help(Option<String>),
    Clear,
    Reload,
    Matrix,
    Exit,
}

impl Command {
    /// Get all available command names for autocomplete.
    pub fn names() -> &'static [&'static str] {
        &[
            "cat", "cd", "clear", "exit", "help", "ls", "matrix", "pwd", "reload", "tree",
        ]
    }

    /// Parse command from name and arguments.
    ///
    /// Names are matched case-insensitively. Unknown names yield
    /// `ShellError::CommandNotFound` carrying the name as typed.
    pub fn parse(name: &str, args: &[String]) -> Result<Self, ShellError> {
        match name.to_lowercase().as_str() {
            "ls" => {
                let (flags, paths) = split_flags(
                    "ls",
                    args,
                    "alRr",
                    &[
                        ("all", 'a'),
                        ("recursive", 'R'),
                        ("reverse", 'r'),
                    ],
                )?;
                Ok(Self::Ls(LsOptions {
                    all: flags.contains(&'a'),
                    long: flags.contains(&'l'),
                    recursive: flags.contains(&'R'),
                    reverse: flags.contains(&'r'),
                    paths,
                }))
            }
            "cd" => match args {
                [] => Ok(Self::Cd(None)),
                [path] => Ok(Self::Cd(Some(path.clone()))),
                _ => Err(ShellError::bad_arguments("cd", "too many arguments")),
            },
            "cat" => {
                let (flags, files) = split_flags(
                    "cat",
                    args,
                    "nAs",
                    &[
                        ("number", 'n'),
                        ("show-all", 'A'),
                        ("squeeze-blank", 's'),
                    ],
                )?;
                if files.is_empty() {
                    return Err(ShellError::bad_arguments(
                        "cat",
                        "missing file operand\nTry 'help cat' for more information.",
                    ));
                }
                Ok(Self::Cat(CatOptions {
                    number: flags.contains(&'n'),
                    show_all: flags.contains(&'A'),
                    squeeze: flags.contains(&'s'),
                    files,
                }))
            }
            "pwd" => Ok(Self::Pwd),
            "tree" => parse_tree(args).map(Self::Tree),
            "help" => Ok(Self::Help(args.first().cloned())),
            "clear" => Ok(Self::Clear),
            "reload" => Ok(Self::Reload),
            "matrix" => Ok(Self::Matrix),
            "exit" => Ok(Self::Exit),
            _ => Err(ShellError::CommandNotFound(name.to_string())),
        }
    }

    /// Canonical name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ls(_) => "ls",
            Self::Cd(_) => "cd",
            Self::Cat(_) => "cat",
            Self::Pwd => "pwd",
            Self::Tree(_) => "tree",
            Self::Help(_) => "help",
            Self::Clear => "clear",
            Self::Reload => "reload",
            Self::Matrix => "matrix",
            Self::Exit => "exit",
        }
    }
}

// =============================================================================
// Option Parsing
// =============================================================================

/// Separate short/long flags from operands.
///
/// Short flags combine (`-la`). `--` ends option parsing and a lone `-` is
/// an operand.
fn split_flags(
    cmd: &'static str,
    args: &[String],
    allowed: &str,
    long: &[(&str, char)],
) -> Result<(Vec<char>, Vec<String>), ShellError> {
    let mut flags = Vec::new();
    let mut operands = Vec::new();
    let mut options_done = false;

    for arg in args {
        if options_done || arg == "-" || !arg.starts_with('-') {
            operands.push(arg.clone());
            continue;
        }

        if arg == "--" {
            options_done = true;
        } else if let Some(name) = arg.strip_prefix("--") {
            let (_, flag) = long.iter().find(|(l, _)| *l == name).ok_or_else(|| {
                ShellError::bad_arguments(cmd, format!("unrecognized option '{}'", arg))
            })?;
            flags.push(*flag);
        } else {
            for c in arg.chars().skip(1) {
                if !allowed.contains(c) {
                    return Err(ShellError::invalid_option(cmd, c));
                }
                flags.push(c);
            }
        }
    }

    Ok((flags, operands))
}

fn parse_depth(value: &str) -> Result<usize, ShellError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ShellError::bad_arguments(
            "tree",
            format!("invalid level '{}', must be greater than 0", value),
        )),
    }
}

fn parse_tree(args: &[String]) -> Result<TreeOptions, ShellError> {
    let mut opts = TreeOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(value) = arg.strip_prefix("--max-depth=") {
            opts.max_depth = Some(parse_depth(value)?);
        } else if arg == "--max-depth" || arg == "-L" {
            let value = iter.next().ok_or_else(|| {
                ShellError::bad_arguments("tree", format!("option '{}' requires an argument", arg))
            })?;
            opts.max_depth = Some(parse_depth(value)?);
        } else if arg == "-a" || arg == "--all" {
            opts.all = true;
        } else if arg.starts_with('-') && arg != "-" {
            let option = arg.trim_start_matches('-');
            return Err(match option.chars().next() {
                Some(c) if !arg.starts_with("--") && option.chars().count() == 1 => {
                    ShellError::invalid_option("tree", c)
                }
                _ => ShellError::bad_arguments("tree", format!("unrecognized option '{}'", arg)),
            });
        } else if opts.path.is_none() {
            opts.path = Some(arg.clone());
        } else {
            return Err(ShellError::bad_arguments("tree", "too many arguments"));
        }
    }

    Ok(opts)
}

// =============================================================================
// Tests
// =============================================================================
