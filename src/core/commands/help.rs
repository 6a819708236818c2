//! `help`: command reference.

use crate::config::HELP_TEXT;
use crate::core::error::ShellError;

use super::CommandOutput;

/// (name, usage, description, options)
const USAGE: &[(&str, &str, &str, &[&str])] = &[
    (
        "ls",
        "ls [-alRr] [path...]",
        "List directory contents. Directories come first.",
        &[
            "-a    include entries starting with .",
            "-l    long format: permissions, owner, size, date",
            "-R    list subdirectories recursively",
            "-r    reverse the sort order",
        ],
    ),
    (
        "cd",
        "cd [path]",
        "Change the current directory. Without a path, go home.",
        &["..    parent directory", "~     home directory"],
    ),
    (
        "cat",
        "cat [-nAs] <file...>",
        "Print file contents. Project files are fetched from GitHub.",
        &[
            "-n    number output lines",
            "-A    show tabs as ^I, carriage returns as ^M, line ends as $",
            "-s    squeeze repeated blank lines",
        ],
    ),
    ("pwd", "pwd", "Print the current directory.", &[]),
    (
        "tree",
        "tree [-a] [--max-depth=N | -L N] [path]",
        "Display a directory as a tree.",
        &[
            "-a             include entries starting with .",
            "--max-depth=N  descend at most N levels",
        ],
    ),
    (
        "help",
        "help [command]",
        "Show all commands, or the usage of one.",
        &[],
    ),
    ("clear", "clear", "Clear the terminal screen.", &["Ctrl+L does the same"]),
    (
        "reload",
        "reload",
        "Reload the filesystem from GitHub.",
        &[],
    ),
    ("matrix", "matrix", "Enter the matrix.", &[]),
    ("exit", "exit", "Exit the terminal.", &[]),
];

pub fn execute(topic: Option<&str>) -> Result<CommandOutput, ShellError> {
    let Some(topic) = topic else {
        return Ok(CommandOutput::lines(HELP_TEXT.lines()));
    };

    let wanted = topic.to_lowercase();
    let Some((_, usage, description, options)) =
        USAGE.iter().find(|(name, ..)| *name == wanted)
    else {
        // Reported inline; the lookup itself is not a usage error
        let mut out = CommandOutput::new();
        out.diagnostic(&ShellError::bad_arguments(
            "help",
            format!("no help available for '{}'", topic),
        ));
        return Ok(out);
    };

    let mut out = CommandOutput::new();
    out.push(format!("Usage: {}", usage));
    out.push("");
    out.push(*description);
    if !options.is_empty() {
        out.push("");
        out.extend(options.iter().map(|opt| format!("  {}", opt)));
    }
    Ok(out)
}
