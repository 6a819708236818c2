//! `tree`: render a directory as an indented tree.

use crate::core::error::ShellError;
use crate::models::Node;

use super::{CommandOutput, Context, TreeOptions};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

#[derive(Default)]
struct Counts {
    dirs: usize,
    files: usize,
}

pub fn execute(opts: &TreeOptions, ctx: Context<'_>) -> Result<CommandOutput, ShellError> {
    let label = opts.path.as_deref().unwrap_or(".");
    let node = ctx
        .fs
        .lookup(ctx.cwd, label)
        .ok_or_else(|| ShellError::not_found("tree", label))?;

    if !node.is_directory() {
        return Err(ShellError::not_a_directory("tree", label));
    }

    let mut out = CommandOutput::new();
    let mut counts = Counts::default();

    out.push(label);
    render(&mut out, node, "", 1, opts, &mut counts);
    out.push("");
    out.push(format!("{} directories, {} files", counts.dirs, counts.files));

    Ok(out)
}

/// Children of `dir` at `depth` (its direct children are depth 1 for the root).
fn render(
    out: &mut CommandOutput,
    dir: &Node,
    prefix: &str,
    depth: usize,
    opts: &TreeOptions,
    counts: &mut Counts,
) {
    if opts.max_depth.is_some_and(|max| depth > max) {
        return;
    }

    let children: Vec<&Node> = dir
        .children()
        .iter()
        .filter(|c| opts.all || !c.is_hidden())
        .collect();

    for (idx, child) in children.iter().enumerate() {
        let is_last = idx + 1 == children.len();
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        out.push(format!("{}{}{}", prefix, connector, child.name));

        if child.is_directory() {
            counts.dirs += 1;
            let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { PIPE });
            render(out, child, &child_prefix, depth + 1, opts, counts);
        } else {
            counts.files += 1;
        }
    }
}
