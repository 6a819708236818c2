//! `ls`: list directory contents.

use crate::config::USER_NAME;
use crate::core::error::ShellError;
use crate::core::filesystem::sort_entries;
use crate::models::Node;
use crate::utils::format::format_date_short;

use super::{CommandOutput, Context, LsOptions};

pub fn execute(opts: &LsOptions, ctx: Context<'_>) -> Result<CommandOutput, ShellError> {
    let operands: Vec<&str> = if opts.paths.is_empty() {
        vec!["."]
    } else {
        opts.paths.iter().map(String::as_str).collect()
    };
    let with_headers = operands.len() > 1 || opts.recursive;

    let mut out = CommandOutput::new();
    let mut files = Vec::new();
    let mut dirs = Vec::new();

    // File operands print first as one group, then each directory section
    for operand in operands {
        match ctx.fs.lookup(ctx.cwd, operand) {
            None => out.diagnostic(&ShellError::cannot_access("ls", operand)),
            Some(node) if node.is_directory() => dirs.push((operand, node)),
            Some(node) => files.push((operand, node)),
        }
    }

    for (operand, node) in &files {
        out.push(format_entry(node, operand, opts.long));
    }

    let mut printed = !files.is_empty();
    for (operand, node) in dirs {
        if printed {
            out.push("");
        }
        printed = true;
        list_directory(&mut out, node, operand, opts, with_headers);
    }

    Ok(out)
}

/// Visible children of `dir` in display order.
fn visible_entries<'a>(dir: &'a Node, opts: &LsOptions) -> Vec<&'a Node> {
    let mut entries: Vec<&Node> = dir
        .children()
        .iter()
        .filter(|n| opts.all || !n.is_hidden())
        .collect();
    sort_entries(&mut entries);
    if opts.reverse {
        entries.reverse();
    }
    entries
}

fn list_directory(
    out: &mut CommandOutput,
    dir: &Node,
    label: &str,
    opts: &LsOptions,
    with_header: bool,
) {
    if with_header {
        out.push(format!("{}:", label));
    }

    let entries = visible_entries(dir, opts);
    for entry in &entries {
        out.push(format_entry(entry, &entry.name, opts.long));
    }

    if !opts.recursive {
        return;
    }

    for entry in entries.iter().filter(|e| e.is_directory()) {
        out.push("");
        let child_label = format!("{}/{}", label.trim_end_matches('/'), entry.name);
        list_directory(out, entry, &child_label, opts, true);
    }
}

fn format_entry(node: &Node, name: &str, long: bool) -> String {
    if long {
        format_long(node, name)
    } else if node.is_directory() {
        format!("{}/", name)
    } else {
        name.to_string()
    }
}

/// `perms links owner group size date name`
fn format_long(node: &Node, name: &str) -> String {
    let links = if node.is_directory() {
        2 + node.children().iter().filter(|c| c.is_directory()).count()
    } else {
        1
    };
    format!(
        "{} {:>2} {} {} {:>8} {} {}",
        node.permissions(),
        links,
        USER_NAME,
        USER_NAME,
        node.size(),
        format_date_short(Some(node.modified.unwrap_or(0))),
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VirtualFs;
    use crate::core::commands::CommandResult;

    fn create_test_fs() -> VirtualFs {
        VirtualFs::new(Node::directory(
            "/",
            vec![Node::directory(
                "home",
                vec![Node::directory(
                    "obumbravit",
                    vec![
                        Node::file("skills.md", "rust"),
                        Node::file(".profile", "x").with_modified(Some(0)),
                        Node::directory(
                            "projects",
                            vec![Node::directory("AirDnD", vec![Node::remote_file("main.rs")])],
                        ),
                        Node::file("about.md", "# About\n").with_modified(Some(1710493500)),
                        Node::directory("Docs", vec![]),
                    ],
                )],
            )],
        ))
    }

    fn ls(opts: LsOptions, cwd: &str) -> CommandResult {
        let fs = create_test_fs();
        execute(&opts, Context::new(&fs, cwd))
            .expect("ls should not fail as a whole")
            .into()
    }

    fn paths(p: &[&str]) -> Vec<String> {
        p.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_listing() {
        let result = ls(LsOptions::default(), "/home/obumbravit");
        assert_eq!(result.output, vec!["Docs/", "projects/", "about.md", "skills.md"]);
    }

    #[test]
    fn test_all_shows_hidden() {
        let result = ls(
            LsOptions {
                all: true,
                ..LsOptions::default()
            },
            "/home/obumbravit",
        );
        assert!(result.output.contains(&".profile".to_string()));
        assert!(!result.output.iter().any(|l| l == "." || l == ".."));
    }

    #[test]
    fn test_reverse_is_exact_reverse() {
        let normal = ls(LsOptions::default(), "/home/obumbravit").output;
        let mut reversed = ls(
            LsOptions {
                reverse: true,
                ..LsOptions::default()
            },
            "/home/obumbravit",
        )
        .output;
        reversed.reverse();
        assert_eq!(normal, reversed);
    }

    #[test]
    fn test_long_format() {
        let result = ls(
            LsOptions {
                long: true,
                paths: paths(&["about.md", "projects"]),
                ..LsOptions::default()
            },
            "/home/obumbravit",
        );
        assert_eq!(
            result.output[0],
            "-rw-r--r--  1 obumbravit obumbravit        8 Mar 15 09:05 about.md"
        );
        assert_eq!(result.output[1], "");
        assert_eq!(result.output[2], "projects:");
        assert!(result.output[3].starts_with("drwxr-xr-x  2 obumbravit obumbravit        0 "));
        assert!(result.output[3].ends_with(" AirDnD"));
    }

    #[test]
    fn test_file_operand_is_single_entry() {
        let result = ls(
            LsOptions {
                paths: paths(&["~/about.md"]),
                ..LsOptions::default()
            },
            "/",
        );
        assert_eq!(result.output, vec!["~/about.md"]);
    }

    #[test]
    fn test_file_operands_precede_directories() {
        let result = ls(
            LsOptions {
                paths: paths(&["projects", "about.md", "Docs", "skills.md"]),
                ..LsOptions::default()
            },
            "/home/obumbravit",
        );
        assert_eq!(
            result.output,
            vec![
                "about.md",
                "skills.md",
                "",
                "projects:",
                "AirDnD/",
                "",
                "Docs:",
            ]
        );
    }

    #[test]
    fn test_link_count_counts_subdirectories() {
        let result = ls(
            LsOptions {
                long: true,
                paths: paths(&["/home"]),
                ..LsOptions::default()
            },
            "/",
        );
        assert!(result.output[0].starts_with("drwxr-xr-x  4 "));
    }

    #[test]
    fn test_missing_operand_continues() {
        let result = ls(
            LsOptions {
                paths: paths(&["nope", "projects"]),
                ..LsOptions::default()
            },
            "/home/obumbravit",
        );
        assert_eq!(
            result.output,
            vec![
                "ls: cannot access 'nope': No such file or directory",
                "projects:",
                "AirDnD/",
            ]
        );
        assert!(result.is_diagnostic(0));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_recursive() {
        let result = ls(
            LsOptions {
                recursive: true,
                paths: paths(&["projects"]),
                ..LsOptions::default()
            },
            "/home/obumbravit",
        );
        assert_eq!(
            result.output,
            vec![
                "projects:",
                "AirDnD/",
                "",
                "projects/AirDnD:",
                "main.rs",
            ]
        );
    }

    #[test]
    fn test_recursive_default_operand() {
        let result = ls(
            LsOptions {
                recursive: true,
                ..LsOptions::default()
            },
            "/home/obumbravit/projects",
        );
        assert_eq!(result.output[0], ".:");
        assert!(result.output.contains(&"./AirDnD:".to_string()));
    }
}
