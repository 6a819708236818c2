//! `cat`: print file contents.

use crate::config::{LINE_NUMBER_WIDTH, PROJECTS_PATH};
use crate::core::error::ShellError;
use crate::core::source::ContentSource;

use super::{CatOptions, CommandOutput, Context};

pub async fn execute<S: ContentSource>(
    opts: &CatOptions,
    ctx: Context<'_>,
    source: &S,
) -> CommandOutput {
    let with_headers = opts.files.len() > 1;
    let mut out = CommandOutput::new();
    let mut printed = false;

    for file in &opts.files {
        let content = match read_file(file, ctx, source).await {
            Ok(content) => content,
            Err(err) => {
                out.diagnostic(&err);
                continue;
            }
        };

        if with_headers {
            if printed {
                out.push("");
            }
            out.push(format!("==> {} <==", file));
        }
        printed = true;
        out.extend(render(&content, opts));
    }

    out
}

/// Content of one operand: fetched for repository files, embedded otherwise.
async fn read_file<S: ContentSource>(
    file: &str,
    ctx: Context<'_>,
    source: &S,
) -> Result<String, ShellError> {
    let resolved = ctx.resolve(file);
    let node = ctx
        .fs
        .get(&resolved)
        .ok_or_else(|| ShellError::not_found("cat", file))?;

    if node.is_directory() {
        return Err(ShellError::is_a_directory("cat", file));
    }

    if let Some((repo, rest)) = split_repo_path(&resolved) {
        tracing::debug!(repo, path = rest, "fetching repository file");
        let fetched = source.fetch_file(repo, rest).await;
        if let Some(content) = fetched.filter(|c| !c.is_empty()) {
            return Ok(content);
        }
    }

    node.content()
        .map(str::to_string)
        .ok_or_else(|| ShellError::unavailable("cat", file))
}

/// Split `~/projects/<repo>/<rest>` into `(repo, rest)`.
fn split_repo_path(path: &str) -> Option<(&str, &str)> {
    let inside = path.strip_prefix(PROJECTS_PATH)?.strip_prefix('/')?;
    let (repo, rest) = inside.split_once('/')?;
    (!repo.is_empty() && !rest.is_empty()).then_some((repo, rest))
}

/// Split content into lines and apply `-s`, `-A` and `-n` in that order.
fn render(content: &str, opts: &CatOptions) -> Vec<String> {
    let body = content.strip_suffix('\n').unwrap_or(content);

    let mut lines: Vec<String> = Vec::new();
    for line in body.split('\n') {
        if opts.squeeze && line.is_empty() && lines.last().is_some_and(String::is_empty) {
            continue;
        }
        lines.push(line.to_string());
    }

    if opts.show_all {
        for line in &mut lines {
            *line = format!("{}$", line.replace('\t', "^I").replace('\r', "^M"));
        }
    }

    if opts.number {
        for (idx, line) in lines.iter_mut().enumerate() {
            *line = format!("{:>width$}  {}", idx + 1, line, width = LINE_NUMBER_WIDTH);
        }
    }

    lines
}
