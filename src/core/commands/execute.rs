//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns their output.

use crate::config::MATRIX_TEXT;
use crate::core::error::ShellError;
use crate::core::source::ContentSource;
use crate::core::{VirtualFs, path};

use super::{Command, CommandOutput, ShellAction, cat, help, ls, tree};

/// Read-only view handed to every handler.
#[derive(Clone, Copy, Debug)]
pub struct Context<'a> {
    pub fs: &'a VirtualFs,
    /// Current directory, absolute and canonical.
    pub cwd: &'a str,
}

impl<'a> Context<'a> {
    pub fn new(fs: &'a VirtualFs, cwd: &'a str) -> Self {
        Self { fs, cwd }
    }

    /// Resolve user input against the current directory.
    pub fn resolve(&self, input: &str) -> String {
        path::resolve(self.cwd, input)
    }
}

/// Execute a parsed command.
///
/// Handlers never touch the tree; the only state change they request is
/// `CommandOutput::change_dir`, applied by the interpreter.
pub async fn execute_command<S: ContentSource>(
    cmd: Command,
    ctx: Context<'_>,
    source: &S,
) -> Result<CommandOutput, ShellError> {
    match cmd {
        Command::Ls(opts) => ls::execute(&opts, ctx),
        Command::Cd(target) => execute_cd(target.as_deref(), ctx),
        Command::Cat(opts) => Ok(cat::execute(&opts, ctx, source).await),
        Command::Pwd => Ok(CommandOutput::lines([path::display(ctx.cwd)])),
        Command::Tree(opts) => tree::execute(&opts, ctx),
        Command::Help(topic) => help::execute(topic.as_deref()),
        Command::Clear => Ok(CommandOutput::action(ShellAction::Clear)),
        Command::Reload => Ok(execute_reload()),
        Command::Matrix => Ok(CommandOutput::lines(MATRIX_TEXT.lines())),
        Command::Exit => {
            let mut out = CommandOutput::action(ShellAction::Exit);
            out.push("Exiting terminal...");
            Ok(out)
        }
    }
}

/// Execute `cd` command.
fn execute_cd(target: Option<&str>, ctx: Context<'_>) -> Result<CommandOutput, ShellError> {
    let input = target.unwrap_or("");
    let resolved = ctx.resolve(input);

    match ctx.fs.get(&resolved) {
        Some(node) if node.is_directory() => Ok(CommandOutput::change_dir(resolved)),
        Some(_) => Err(ShellError::not_a_directory("cd", input)),
        None => Err(ShellError::not_found("cd", input)),
    }
}

/// Execute `reload` command.
fn execute_reload() -> CommandOutput {
    let mut out = CommandOutput::action(ShellAction::Reload);
    out.extend(["Reloading filesystem from GitHub...", ""]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::NoContentSource;
    use crate::models::Node;

    fn create_test_fs() -> VirtualFs {
        VirtualFs::new(Node::directory(
            "/",
            vec![
                Node::directory(
                    "home",
                    vec![Node::directory(
                        "obumbravit",
                        vec![
                            Node::file("about.md", "# About"),
                            Node::directory("projects", vec![]),
                        ],
                    )],
                ),
                Node::directory("etc", vec![]),
            ],
        ))
    }

    async fn run(cmd: Command, fs: &VirtualFs, cwd: &str) -> Result<CommandOutput, ShellError> {
        execute_command(cmd, Context::new(fs, cwd), &NoContentSource).await
    }

    #[tokio::test]
    async fn test_cd_home_by_default() {
        let fs = create_test_fs();
        let out = run(Command::Cd(None), &fs, "/etc").await.expect("cd should succeed");
        assert_eq!(out.change_dir.as_deref(), Some("/home/obumbravit"));
    }

    #[tokio::test]
    async fn test_cd_relative_and_parent() {
        let fs = create_test_fs();
        let out = run(Command::Cd(Some("projects".into())), &fs, "/home/obumbravit")
            .await
            .expect("cd should succeed");
        assert_eq!(out.change_dir.as_deref(), Some("/home/obumbravit/projects"));

        let out = run(Command::Cd(Some("..".into())), &fs, "/")
            .await
            .expect("cd .. at root");
        assert_eq!(out.change_dir.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_cd_errors() {
        let fs = create_test_fs();
        assert_eq!(
            run(Command::Cd(Some("/nonexistent".into())), &fs, "/").await,
            Err(ShellError::not_found("cd", "/nonexistent"))
        );
        assert_eq!(
            run(Command::Cd(Some("about.md".into())), &fs, "/home/obumbravit").await,
            Err(ShellError::not_a_directory("cd", "about.md"))
        );
    }

    #[tokio::test]
    async fn test_pwd_uses_tilde() {
        let fs = create_test_fs();
        let out = run(Command::Pwd, &fs, "/home/obumbravit/projects").await.expect("pwd");
        assert_eq!(out.text(), ["~/projects"]);
        let out = run(Command::Pwd, &fs, "/etc").await.expect("pwd");
        assert_eq!(out.text(), ["/etc"]);
    }

    #[tokio::test]
    async fn test_actions() {
        let fs = create_test_fs();
        let clear = run(Command::Clear, &fs, "/").await.expect("clear");
        assert_eq!(clear.action, Some(ShellAction::Clear));
        assert!(clear.is_empty());

        let reload = run(Command::Reload, &fs, "/").await.expect("reload");
        assert_eq!(reload.action, Some(ShellAction::Reload));

        let exit = run(Command::Exit, &fs, "/").await.expect("exit");
        assert_eq!(exit.action, Some(ShellAction::Exit));
        assert_eq!(exit.text(), ["Exiting terminal..."]);
    }

    #[tokio::test]
    async fn test_matrix() {
        let fs = create_test_fs();
        let out = run(Command::Matrix, &fs, "/").await.expect("matrix");
        assert!(out.text().len() > 10);
        assert!(out.text().iter().any(|l| l.contains("white rabbit")));
    }
}
