use std::collections::HashSet;
use std::sync::Arc;

use crate::core::path;
use crate::models::{Node, NodeKind};

/// Read-only virtual filesystem for one session.
///
/// The tree is built once and shared by reference; a reload replaces the
/// whole `VirtualFs`.
///
/// # Path Convention
///
/// - Root: `"/"`
/// - Every other path is absolute with no trailing slash
/// - `Node::path` always equals parent path + `/` + name
#[derive(Clone, Debug)]
pub struct VirtualFs {
    root: Arc<Node>,
}

impl VirtualFs {
    /// Mount a tree, enforcing its invariants.
    ///
    /// The root is forced to be a directory named `/`. Every node path is
    /// recomputed from its position, and later siblings that reuse a name
    /// are dropped.
    pub fn new(mut root: Node) -> Self {
        root.name = "/".to_string();
        if !root.is_directory() {
            tracing::warn!("root node is a file, mounting an empty directory instead");
            root.kind = NodeKind::Directory {
                children: Vec::new(),
            };
        }
        Self::mount(&mut root, "/");
        Self {
            root: Arc::new(root),
        }
    }

    /// Empty filesystem holding only the root directory.
    pub fn empty() -> Self {
        Self::new(Node::directory("/", Vec::new()))
    }

    fn mount(node: &mut Node, node_path: &str) {
        node.path = node_path.to_string();

        if let NodeKind::Directory { children } = &mut node.kind {
            let mut seen = HashSet::new();
            children.retain(|child| {
                let fresh = seen.insert(child.name.clone());
                if !fresh {
                    tracing::warn!(
                        dir = node_path,
                        name = %child.name,
                        "duplicate sibling dropped"
                    );
                }
                fresh
            });

            for child in children.iter_mut() {
                let child_path = path::join(node_path, &child.name);
                Self::mount(child, &child_path);
            }
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Look up a canonical absolute path.
    ///
    /// - `"/"` returns the root
    /// - `"/home/obumbravit"` returns the home directory
    /// - a missing segment, or a file indexed further, yields `None`
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut current: &Node = &self.root;

        for part in path::segments(path) {
            if !current.is_directory() {
                return None;
            }
            current = current.child(part)?;
        }

        Some(current)
    }

    /// Resolve user input against `current` and look the result up.
    pub fn lookup(&self, current: &str, input: &str) -> Option<&Node> {
        self.get(&path::resolve(current, input))
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        self.get(path).is_some_and(Node::is_directory)
    }

    /// Children of a directory, directories first then by name.
    ///
    /// Names compare by bytes, so uppercase sorts before lowercase.
    pub fn list_dir(&self, path: &str) -> Option<Vec<&Node>> {
        let node = self.get(path)?;
        if !node.is_directory() {
            return None;
        }
        let mut items: Vec<&Node> = node.children().iter().collect();
        sort_entries(&mut items);
        Some(items)
    }
}

/// Directories before files, then byte-lexicographic by name.
pub fn sort_entries(items: &mut [&Node]) {
    items.sort_by(|a, b| {
        b.is_directory()
            .cmp(&a.is_directory())
            .then_with(|| a.name.as_bytes().cmp(b.name.as_bytes()))
    });
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_fs() -> VirtualFs {
        VirtualFs::new(Node::directory(
            "",
            vec![
                Node::directory(
                    "home",
                    vec![Node::directory(
                        "obumbravit",
                        vec![
                            Node::file("about.md", "# About\nhello\n"),
                            Node::file(".profile", "export PS1"),
                            Node::directory(
                                "projects",
                                vec![Node::directory("AirDnD", vec![Node::remote_file("main.rs")])],
                            ),
                            Node::file("Zeta.txt", "z"),
                        ],
                    )],
                ),
                Node::directory("etc", vec![Node::file("profile", "PATH")]),
            ],
        ))
    }

    #[test]
    fn test_empty_fs() {
        let fs = VirtualFs::empty();
        let root = fs.get("/").expect("root should exist");
        assert!(root.is_directory());
        assert_eq!(root.path, "/");
        assert!(root.children().is_empty());
    }

    #[test]
    fn test_paths_are_recomputed() {
        let fs = create_test_fs();
        let about = fs.get("/home/obumbravit/about.md").expect("about.md should exist");
        assert_eq!(about.path, "/home/obumbravit/about.md");
        let main = fs
            .get("/home/obumbravit/projects/AirDnD/main.rs")
            .expect("nested file should exist");
        assert_eq!(main.path, "/home/obumbravit/projects/AirDnD/main.rs");
        assert_eq!(fs.root().path, "/");
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let fs = create_test_fs();
        assert!(fs.get("/etc/profile").is_some());
        assert!(fs.get("/ETC/profile").is_none());
    }

    #[test]
    fn test_get_through_file() {
        let fs = create_test_fs();
        assert!(fs.get("/etc/profile/more").is_none());
        assert!(fs.get("/missing").is_none());
    }

    #[test]
    fn test_is_directory() {
        let fs = create_test_fs();
        assert!(fs.is_directory("/"));
        assert!(fs.is_directory("/home/obumbravit/projects"));
        assert!(!fs.is_directory("/etc/profile"));
        assert!(!fs.is_directory("/nope"));
    }

    #[test]
    fn test_lookup_relative() {
        let fs = create_test_fs();
        let node = fs
            .lookup("/home/obumbravit", "projects/AirDnD")
            .expect("relative lookup should succeed");
        assert_eq!(node.path, "/home/obumbravit/projects/AirDnD");
        assert!(fs.lookup("/etc", "~/about.md").is_some());
    }

    #[test]
    fn test_list_dir_sorting() {
        let fs = create_test_fs();
        let names: Vec<_> = fs
            .list_dir("/home/obumbravit")
            .expect("should list directory")
            .iter()
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(names, vec!["projects", ".profile", "Zeta.txt", "about.md"]);
    }

    #[test]
    fn test_list_dir_on_file() {
        let fs = create_test_fs();
        assert!(fs.list_dir("/etc/profile").is_none());
    }

    #[test]
    fn test_duplicate_siblings_dropped() {
        let fs = VirtualFs::new(Node::directory(
            "/",
            vec![Node::file("a", "first"), Node::file("a", "second")],
        ));
        assert_eq!(fs.root().children().len(), 1);
        assert_eq!(fs.get("/a").and_then(Node::content), Some("first"));
    }

    #[test]
    fn test_file_root_replaced() {
        let fs = VirtualFs::new(Node::file("x", "y"));
        assert!(fs.root().is_directory());
    }
}
