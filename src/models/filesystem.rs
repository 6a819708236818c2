use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{GITHUB_USER, GITHUB_WEB_URL};

// =============================================================================
// Repository Metadata
// =============================================================================

/// A public repository as returned by the GitHub REST API.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    /// ISO 8601 timestamp of the last update.
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
}

impl Repository {
    /// Create a repository record known only by name (scraped listings).
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            html_url: format!("{}/{}/{}", GITHUB_WEB_URL, GITHUB_USER, name),
            name,
            description: None,
            homepage: None,
            language: None,
            stargazers_count: 0,
            forks_count: 0,
            updated_at: String::new(),
            topics: Vec::new(),
            private: false,
            fork: false,
        }
    }
}

/// Kind of an entry in a repository's git tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeEntryKind {
    Blob,
    Tree,
    Commit,
}

/// One entry of a recursive git tree listing.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TreeEntry {
    /// Path relative to the repository root (e.g. `src/main.rs`).
    pub path: String,
    #[serde(rename = "type")]
    pub kind: TreeEntryKind,
    #[serde(default)]
    pub size: Option<u64>,
}

/// A repository together with its file listing, input to the tree builder.
///
/// An empty `entries` list means the listing could not be fetched.
#[derive(Clone, Debug)]
pub struct RepositoryListing {
    pub repo: Repository,
    pub entries: Vec<TreeEntry>,
}

impl RepositoryListing {
    pub fn new(repo: Repository, entries: Vec<TreeEntry>) -> Self {
        Self { repo, entries }
    }
}

// =============================================================================
// Nodes
// =============================================================================

/// Payload of a node: file content or directory children.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    File {
        /// `None` means fetch on demand, or unavailable.
        content: Option<String>,
    },
    Directory {
        children: Vec<Node>,
    },
}

/// An entry in the virtual filesystem.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Segment label, unique among siblings.
    pub name: String,
    /// Canonical absolute path, kept in sync by `VirtualFs::new`.
    pub path: String,
    pub kind: NodeKind,
    /// Repository this node belongs to.
    pub origin: Option<Arc<Repository>>,
    /// Modification time as Unix timestamp.
    pub modified: Option<u64>,
    /// Byte size reported by the repository listing for unfetched files.
    pub listed_size: Option<u64>,
}

impl Node {
    /// Create a directory node. The path is assigned when the tree is mounted.
    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            path: String::new(),
            kind: NodeKind::Directory { children },
            origin: None,
            modified: None,
            listed_size: None,
        }
    }

    /// Create a file node with embedded content.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: String::new(),
            kind: NodeKind::File {
                content: Some(content.into()),
            },
            origin: None,
            modified: None,
            listed_size: None,
        }
    }

    /// Create a file node whose content is fetched on demand.
    pub fn remote_file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: String::new(),
            kind: NodeKind::File { content: None },
            origin: None,
            modified: None,
            listed_size: None,
        }
    }

    pub fn with_origin(mut self, origin: Arc<Repository>) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_modified(mut self, modified: Option<u64>) -> Self {
        self.modified = modified;
        self
    }

    pub fn with_listed_size(mut self, size: Option<u64>) -> Self {
        self.listed_size = size;
        self
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Dot-prefixed names are hidden from `ls` and `tree` unless `-a` is given.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Children of a directory; empty for files.
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::File { .. } => &[],
        }
    }

    /// Embedded content of a file.
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::File { content } => content.as_deref(),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Child with the exact given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Byte length of the embedded content, else the listed size, else 0.
    pub fn size(&self) -> u64 {
        match self.content() {
            Some(content) => content.len() as u64,
            None => self.listed_size.unwrap_or(0),
        }
    }

    pub fn permissions(&self) -> Permissions {
        Permissions {
            is_dir: self.is_directory(),
        }
    }
}

// =============================================================================
// Display Permissions
// =============================================================================

/// Unix-style permission string for `ls -l`. The tree is read-only for
/// visitors, so only the owner bits carry `w`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Permissions {
    pub is_dir: bool,
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dir {
            write!(f, "drwxr-xr-x")
        } else {
            write!(f, "-rw-r--r--")
        }
    }
}
