//! End-to-end scenarios against the interpreter and the generated tree.

use std::cell::RefCell;
use std::collections::HashMap;

use foliosh::config::HOME_PATH;
use foliosh::core::{
    ContentSource, Interpreter, NoContentSource, ShellAction, VirtualFs, build_basic_file_system,
    build_file_system, path,
};
use foliosh::core::error::ErrorKind;
use foliosh::models::{Node, Repository, RepositoryListing, TreeEntry, TreeEntryKind};

/// Serves fixed files and records every request.
#[derive(Default)]
struct MockSource {
    files: HashMap<(String, String), String>,
    requests: RefCell<Vec<(String, String)>>,
}

impl MockSource {
    fn with_file(mut self, repo: &str, path: &str, content: &str) -> Self {
        self.files
            .insert((repo.to_string(), path.to_string()), content.to_string());
        self
    }
}

impl ContentSource for MockSource {
    async fn fetch_file(&self, repo: &str, path: &str) -> Option<String> {
        let key = (repo.to_string(), path.to_string());
        self.requests.borrow_mut().push(key.clone());
        self.files.get(&key).cloned()
    }
}

fn basic_shell() -> Interpreter {
    Interpreter::new(build_basic_file_system(0))
}

fn repo_fs() -> VirtualFs {
    let entries = ["README.md", "src/main.swift", "src/App.swift", "assets/icon.png"]
        .into_iter()
        .map(|path| TreeEntry {
            path: path.to_string(),
            kind: TreeEntryKind::Blob,
            size: None,
        })
        .collect();
    build_file_system(
        &[
            RepositoryListing::new(Repository::named("AirDnD"), entries),
            RepositoryListing::new(Repository::named("website"), Vec::new()),
        ],
        0,
    )
}

async fn run(shell: &mut Interpreter, line: &str) -> Vec<String> {
    shell.execute(line, &NoContentSource).await.output
}

// =============================================================================
// Path resolution properties
// =============================================================================

#[test]
fn test_resolve_never_escapes_root() {
    for current in ["/", "/home", HOME_PATH, "/usr/local/bin"] {
        let mut path = current.to_string();
        for _ in 0..6 {
            path = path::resolve(&path, "..");
            assert!(path.starts_with('/'));
        }
        assert_eq!(path, "/");
    }
}

#[test]
fn test_resolve_dot_and_home() {
    for current in ["/", "/etc", HOME_PATH, "/var/log"] {
        assert_eq!(path::resolve(current, "."), current);
        assert_eq!(path::resolve(current, "~"), HOME_PATH);
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn test_history_recall_after_three_commands() {
    let mut shell = basic_shell();
    for line in ["ls", "pwd", "help"] {
        shell.execute(line, &NoContentSource).await;
    }

    assert_eq!(shell.history_prev().as_deref(), Some("help"));
    assert_eq!(shell.history_prev().as_deref(), Some("pwd"));
    assert_eq!(shell.history_prev().as_deref(), Some("ls"));
    assert_eq!(shell.history_next().as_deref(), Some("pwd"));
    assert_eq!(shell.history_next().as_deref(), Some("help"));
    assert_eq!(shell.history_next(), None);
}

#[tokio::test]
async fn test_unknown_commands_are_recorded() {
    let mut shell = basic_shell();
    let result = shell.execute("frobnicate now", &NoContentSource).await;

    assert_eq!(result.output, ["frobnicate: command not found"]);
    assert_eq!(result.error, Some(ErrorKind::CommandNotFound));
    assert_eq!(shell.history_prev().as_deref(), Some("frobnicate now"));
}

#[tokio::test]
async fn test_cat_embedded_file() {
    let mut shell = basic_shell();
    run(&mut shell, "cd /home/obumbravit").await;
    let result = shell.execute("cat about.md", &NoContentSource).await;

    let expected: Vec<String> = shell
        .fs()
        .get("/home/obumbravit/about.md")
        .and_then(Node::content)
        .expect("about.md has content")
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(result.output, expected);
    assert!(!result.is_error());
    assert!(!result.output.iter().any(|l| l.contains("Content not available")));
}

#[tokio::test]
async fn test_cd_nonexistent_keeps_path() {
    let mut shell = basic_shell();
    let before = shell.current_path().to_string();
    let output = run(&mut shell, "cd /nonexistent").await;

    assert_eq!(output, ["cd: /nonexistent: No such file or directory"]);
    assert_eq!(shell.current_path(), before);
}

#[tokio::test]
async fn test_cd_child_then_parent_is_identity() {
    let mut shell = basic_shell();
    for start in ["/", "/home", HOME_PATH, "/usr/local"] {
        run(&mut shell, &format!("cd {}", start)).await;
        let children: Vec<String> = shell
            .fs()
            .list_dir(start)
            .expect("start is a directory")
            .into_iter()
            .filter(|n| n.is_directory())
            .map(|n| n.name.clone())
            .collect();

        for child in children {
            run(&mut shell, &format!("cd {}", child)).await;
            assert_eq!(shell.current_path(), path::join(start, &child));
            run(&mut shell, "cd ..").await;
            assert_eq!(shell.current_path(), start);
        }
    }
}

#[tokio::test]
async fn test_cd_into_file() {
    let mut shell = basic_shell();
    let result = shell.execute("cd about.md", &NoContentSource).await;
    assert_eq!(result.output, ["cd: about.md: Not a directory"]);
    assert_eq!(shell.current_path(), HOME_PATH);
}

#[tokio::test]
async fn test_pwd_and_home() {
    let mut shell = basic_shell();
    assert_eq!(run(&mut shell, "pwd").await, ["~"]);
    run(&mut shell, "cd /var/log").await;
    assert_eq!(run(&mut shell, "pwd").await, ["/var/log"]);
    run(&mut shell, "cd").await;
    assert_eq!(shell.current_path(), HOME_PATH);
}

#[tokio::test]
async fn test_ls_reverse_is_exact_reversal() {
    let mut shell = Interpreter::new(repo_fs());
    for dir in ["/", HOME_PATH, "/home/obumbravit/projects/AirDnD", "/etc"] {
        let forward = run(&mut shell, &format!("ls {}", dir)).await;
        let mut backward = run(&mut shell, &format!("ls -r {}", dir)).await;
        backward.reverse();
        assert_eq!(forward, backward, "ls -r {}", dir);
    }
}

#[tokio::test]
async fn test_ls_long_shows_listed_sizes() {
    let entries = vec![TreeEntry {
        path: "Package.swift".to_string(),
        kind: TreeEntryKind::Blob,
        size: Some(1234),
    }];
    let fs = build_file_system(&[RepositoryListing::new(Repository::named("AirDnD"), entries)], 0);
    let mut shell = Interpreter::new(fs);

    let output = run(&mut shell, "ls -l projects/AirDnD").await;
    assert_eq!(output.len(), 1);
    assert!(output[0].contains("     1234 "), "{}", output[0]);
    assert!(output[0].ends_with(" Package.swift"));
}

#[tokio::test]
async fn test_ls_file_operand_is_not_listed_inside_directory() {
    let mut shell = basic_shell();
    let output = run(&mut shell, "ls /etc about.md").await;
    assert_eq!(output, ["about.md", "", "/etc:", "profile", "system-info"]);
}

#[tokio::test]
async fn test_ls_directories_first() {
    let mut shell = basic_shell();
    let output = run(&mut shell, "ls").await;
    assert_eq!(
        output,
        ["projects/", "about.md", "contact.txt", "resume.md", "skills.md"]
    );
}

#[tokio::test]
async fn test_tree_counts_match_printed_nodes() {
    let mut shell = Interpreter::new(repo_fs());
    for args in ["/", "-L 1 /", "--max-depth=2 ~", "-a projects", "projects/AirDnD"] {
        let output = run(&mut shell, &format!("tree {}", args)).await;
        let summary = output.last().expect("summary line");
        let printed = &output[1..output.len() - 2];

        let total: usize = summary
            .split(|c: char| !c.is_ascii_digit())
            .filter_map(|n| n.parse::<usize>().ok())
            .sum();

        assert_eq!(total, printed.len(), "tree {}", args);
    }
}

#[tokio::test]
async fn test_cat_nonexistent_never_fails() {
    let mut shell = basic_shell();
    let result = shell.execute("cat nope.txt", &NoContentSource).await;
    assert_eq!(result.output, ["cat: nope.txt: No such file or directory"]);
    assert!(result.action.is_none());
}

#[tokio::test]
async fn test_cat_fetches_repository_files() {
    let mut shell = Interpreter::new(repo_fs());
    let source = MockSource::default().with_file("AirDnD", "src/main.swift", "import SwiftUI\n");

    shell.execute("cd projects/AirDnD", &source).await;
    let result = shell.execute("cat -n src/main.swift", &source).await;
    assert_eq!(result.output, ["     1  import SwiftUI"]);
    assert_eq!(
        source.requests.borrow().as_slice(),
        [("AirDnD".to_string(), "src/main.swift".to_string())]
    );

    let missing = shell.execute("cat README.md", &source).await;
    assert_eq!(missing.output, ["cat: README.md: Content not available"]);
    assert!(!missing.is_error());
}

#[tokio::test]
async fn test_cat_generated_readme_without_network() {
    let mut shell = Interpreter::new(repo_fs());
    let output = run(&mut shell, "cat ~/projects/website/README.md").await;
    assert_eq!(output.first().map(String::as_str), Some("# website"));
}

#[tokio::test]
async fn test_cat_missing_operand() {
    let mut shell = basic_shell();
    let result = shell.execute("cat", &NoContentSource).await;
    assert_eq!(
        result.output,
        [
            "cat: missing file operand",
            "Try 'help cat' for more information."
        ]
    );
    assert_eq!(result.error, Some(ErrorKind::BadArguments));
}

#[tokio::test]
async fn test_actions() {
    let mut shell = basic_shell();
    assert_eq!(
        shell.execute("clear", &NoContentSource).await.action,
        Some(ShellAction::Clear)
    );
    assert_eq!(
        shell.execute("RELOAD", &NoContentSource).await.action,
        Some(ShellAction::Reload)
    );
    assert_eq!(
        shell.execute("exit", &NoContentSource).await.action,
        Some(ShellAction::Exit)
    );
    assert_eq!(shell.history().len(), 3);
}

#[tokio::test]
async fn test_blank_line_is_ignored() {
    let mut shell = basic_shell();
    let result = shell.execute("   ", &NoContentSource).await;
    assert!(result.output.is_empty());
    assert!(shell.history().is_empty());
}

#[tokio::test]
async fn test_quoted_arguments() {
    let mut shell = basic_shell();
    let output = run(&mut shell, "cd '/var/log'").await;
    assert!(output.is_empty());
    assert_eq!(shell.current_path(), "/var/log");
}
