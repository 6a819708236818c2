//! Builds the session filesystem from profile data and repository listings.
//!
//! Layout:
//!
//! ```text
//! /
//! ├── home/obumbravit/{about.md, resume.md, contact.txt, skills.md, projects/}
//! ├── etc/{system-info, profile}
//! ├── var/log/{terminal.log, access.log}
//! └── usr/local/bin/obumbravit
//! ```

use std::sync::Arc;

use crate::config::{PROJECTS_DIR, USER_NAME};
use crate::core::VirtualFs;
use crate::core::profile;
use crate::models::{Node, NodeKind, Repository, RepositoryListing, TreeEntryKind};
use crate::utils::format::parse_iso_timestamp;

/// Build the full tree, one `projects/<repo>/` directory per listing.
///
/// A listing without entries gets a generated `README.md` and
/// `package.json` in place of its file tree.
pub fn build_file_system(listings: &[RepositoryListing], now: u64) -> VirtualFs {
    let repos: Vec<Repository> = listings.iter().map(|l| l.repo.clone()).collect();
    let projects: Vec<Node> = listings.iter().map(|l| repository_dir(l, now)).collect();

    tracing::info!(repositories = projects.len(), "filesystem built");
    VirtualFs::new(skeleton(&repos, projects, now))
}

/// Build the tree without any network data.
///
/// `projects/` holds a single placeholder `README.md`.
pub fn build_basic_file_system(now: u64) -> VirtualFs {
    let placeholder =
        Node::file("README.md", profile::projects_placeholder()).with_modified(Some(now));
    VirtualFs::new(skeleton(&[], vec![placeholder], now))
}

fn skeleton(repos: &[Repository], projects: Vec<Node>, now: u64) -> Node {
    let stamp = |node: Node| node.with_modified(Some(now));
    let dir = |name: &str, children: Vec<Node>| stamp(Node::directory(name, children));

    let home = dir(
        USER_NAME,
        vec![
            stamp(Node::file("about.md", profile::about(repos))),
            stamp(Node::file("resume.md", profile::resume(repos))),
            stamp(Node::file("contact.txt", profile::contact(now))),
            stamp(Node::file("skills.md", profile::skills(repos))),
            dir(PROJECTS_DIR, projects),
        ],
    );

    dir(
        "/",
        vec![
            dir("home", vec![home]),
            dir(
                "etc",
                vec![
                    stamp(Node::file("system-info", profile::system_info(repos, now))),
                    stamp(Node::file("profile", profile::shell_profile())),
                ],
            ),
            dir(
                "var",
                vec![dir(
                    "log",
                    vec![
                        stamp(Node::file("terminal.log", profile::terminal_log(now))),
                        stamp(Node::file("access.log", profile::access_log(now))),
                    ],
                )],
            ),
            dir(
                "usr",
                vec![dir(
                    "local",
                    vec![dir(
                        "bin",
                        vec![stamp(Node::file(USER_NAME, profile::executable()))],
                    )],
                )],
            ),
        ],
    )
}

/// `projects/<repo>/` for one listing.
fn repository_dir(listing: &RepositoryListing, now: u64) -> Node {
    let origin = Arc::new(listing.repo.clone());
    let modified = parse_iso_timestamp(&listing.repo.updated_at).or(Some(now));
    let tag = |node: Node| node.with_origin(Arc::clone(&origin)).with_modified(modified);

    let mut children: Vec<Node> = Vec::new();

    if listing.entries.is_empty() {
        children.push(tag(Node::file("README.md", profile::readme(&listing.repo))));
        children.push(tag(Node::file(
            "package.json",
            profile::package_json(&listing.repo),
        )));
    }

    for entry in &listing.entries {
        let parts: Vec<&str> = entry.path.split('/').filter(|s| !s.is_empty()).collect();
        let leaf = match entry.kind {
            TreeEntryKind::Blob => NodeKind::File { content: None },
            // Submodules show up as empty directories
            TreeEntryKind::Tree | TreeEntryKind::Commit => NodeKind::Directory {
                children: Vec::new(),
            },
        };
        insert_path(&mut children, &parts, leaf, entry.size, &tag);
    }

    tag(Node::directory(listing.repo.name.clone(), children))
}

/// Insert a path into the tree using iteration instead of recursion.
///
/// Missing parent directories are created. An entry that already exists is
/// left alone, and a file blocking a parent path skips the entry.
fn insert_path(
    tree: &mut Vec<Node>,
    parts: &[&str],
    leaf: NodeKind,
    size: Option<u64>,
    tag: &impl Fn(Node) -> Node,
) {
    let Some((last, parents)) = parts.split_last() else {
        return;
    };
    let mut current = tree;

    for part in parents {
        let idx = match current.iter().position(|n| n.name == *part) {
            Some(idx) => idx,
            None => {
                current.push(tag(Node::directory(*part, Vec::new())));
                current.len() - 1
            }
        };

        current = match &mut current[idx].kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => {
                tracing::warn!(path = %parts.join("/"), "listing conflict: blocked by a file");
                return;
            }
        };
    }

    if current.iter().any(|n| n.name == *last) {
        return;
    }

    let mut node = tag(Node::remote_file(*last)).with_listed_size(size);
    node.kind = leaf;
    current.push(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HOME_PATH, PROJECTS_PATH};
    use crate::models::TreeEntry;

    fn entry(path: &str, kind: TreeEntryKind) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            kind,
            size: None,
        }
    }

    fn listing() -> Vec<RepositoryListing> {
        let mut airdnd = Repository::named("AirDnD");
        airdnd.updated_at = "2024-01-01T00:00:00Z".to_string();
        vec![
            RepositoryListing::new(
                airdnd,
                vec![
                    entry("README.md", TreeEntryKind::Blob),
                    entry("src", TreeEntryKind::Tree),
                    entry("src/main.swift", TreeEntryKind::Blob),
                    entry("docs/guide/intro.md", TreeEntryKind::Blob),
                    entry("vendor/lib", TreeEntryKind::Commit),
                ],
            ),
            RepositoryListing::new(Repository::named("website"), vec![]),
        ]
    }

    #[test]
    fn test_basic_layout() {
        let fs = build_basic_file_system(0);
        for path in [
            "/home/obumbravit/about.md",
            "/home/obumbravit/resume.md",
            "/home/obumbravit/contact.txt",
            "/home/obumbravit/skills.md",
            "/home/obumbravit/projects/README.md",
            "/etc/system-info",
            "/etc/profile",
            "/var/log/terminal.log",
            "/var/log/access.log",
            "/usr/local/bin/obumbravit",
        ] {
            let node = fs.get(path).unwrap_or_else(|| panic!("{} should exist", path));
            assert!(node.content().is_some(), "{} should have content", path);
        }
        assert!(fs.is_directory(HOME_PATH));
        assert!(fs.is_directory(PROJECTS_PATH));
    }

    #[test]
    fn test_repository_tree() {
        let fs = build_file_system(&listing(), 100);
        let main = fs
            .get("/home/obumbravit/projects/AirDnD/src/main.swift")
            .expect("nested file should exist");
        assert_eq!(main.content(), None);
        assert_eq!(main.modified, Some(1704067200));
        assert_eq!(main.origin.as_ref().map(|r| r.name.as_str()), Some("AirDnD"));

        assert!(fs.is_directory("/home/obumbravit/projects/AirDnD/docs/guide"));
        assert!(fs.is_directory("/home/obumbravit/projects/AirDnD/vendor/lib"));
        assert!(fs.get("/home/obumbravit/projects/README.md").is_none());

        let src = fs
            .get("/home/obumbravit/projects/AirDnD/src")
            .expect("src should exist");
        assert_eq!(src.children().len(), 1);
    }

    #[test]
    fn test_unlisted_repository_gets_generated_files() {
        let fs = build_file_system(&listing(), 100);
        let readme = fs
            .get("/home/obumbravit/projects/website/README.md")
            .expect("generated README");
        assert!(readme.content().is_some_and(|c| c.starts_with("# website")));
        assert!(fs.get("/home/obumbravit/projects/website/package.json").is_some());
        assert_eq!(readme.modified, Some(100));
    }

    #[test]
    fn test_profile_uses_repositories() {
        let fs = build_file_system(&listing(), 0);
        let about = fs
            .get("/home/obumbravit/about.md")
            .and_then(Node::content)
            .expect("about.md content");
        assert!(about.contains("- **Total Repositories**: 2"));
    }

    #[test]
    fn test_listed_size_reaches_nodes() {
        let entries = vec![TreeEntry {
            path: "src/lib.rs".to_string(),
            kind: TreeEntryKind::Blob,
            size: Some(2048),
        }];
        let fs = build_file_system(
            &[RepositoryListing::new(Repository::named("tools"), entries)],
            0,
        );
        let lib = fs
            .get("/home/obumbravit/projects/tools/src/lib.rs")
            .expect("listed file");
        assert_eq!(lib.size(), 2048);
        assert_eq!(lib.content(), None);
    }

    #[test]
    fn test_insert_path_blocked_by_file() {
        let tag = |n: Node| n;
        let mut tree = vec![Node::file("a", "x")];
        insert_path(&mut tree, &["a", "b"], NodeKind::File { content: None }, None, &tag);
        assert_eq!(tree.len(), 1);
        assert!(tree[0].children().is_empty());
    }
}
