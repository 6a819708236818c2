//! GitHub collaborator: repository listing, file trees and file content.
//!
//! Everything here is best-effort. Failures are logged and degrade to an
//! empty listing or `None` content; they never reach the interpreter.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use serde::Deserialize;

use crate::config::{
    GITHUB_API_URL, GITHUB_RAW_URL, GITHUB_USER, GITHUB_WEB_URL, RAW_BRANCHES, REPOS_PER_PAGE,
    cache::REPOS_KEY,
};
use crate::core::source::ContentSource;
use crate::models::{Repository, RepositoryListing, TreeEntry};
use crate::utils::{cache, fetch};

// =============================================================================
// Response Shapes
// =============================================================================

/// `GET /repos/{owner}/{repo}/git/trees/{sha}?recursive=1`
#[derive(Debug, Deserialize)]
struct GitTree {
    #[serde(default)]
    tree: Vec<TreeEntry>,
    #[serde(default)]
    truncated: bool,
}

/// `GET /repos/{owner}/{repo}/contents/{path}` for a single file.
#[derive(Debug, Deserialize)]
struct FileContents {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    encoding: Option<String>,
}

// =============================================================================
// URLs
// =============================================================================

fn repos_url() -> String {
    format!(
        "{}/users/{}/repos?per_page={}&sort=updated",
        GITHUB_API_URL, GITHUB_USER, REPOS_PER_PAGE
    )
}

fn profile_url() -> String {
    format!("{}/{}", GITHUB_WEB_URL, GITHUB_USER)
}

fn tree_url(repo: &str) -> String {
    format!(
        "{}/repos/{}/{}/git/trees/HEAD?recursive=1",
        GITHUB_API_URL, GITHUB_USER, repo
    )
}

fn contents_url(repo: &str, path: &str) -> String {
    format!(
        "{}/repos/{}/{}/contents/{}",
        GITHUB_API_URL, GITHUB_USER, repo, path
    )
}

fn raw_url(repo: &str, branch: &str, path: &str) -> String {
    format!("{}/{}/{}/{}/{}", GITHUB_RAW_URL, GITHUB_USER, repo, branch, path)
}

// =============================================================================
// Parsing Helpers
// =============================================================================

/// Repository names linked from a profile page, in page order, deduplicated.
///
/// Only direct `/<user>/<name>` links count; deeper links and GitHub's own
/// tab pages are skipped.
fn parse_profile_links(html: &str) -> Vec<String> {
    let pattern = format!(r#"href="/{}/([^"/?#]+)""#, regex::escape(GITHUB_USER));
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };

    let mut names: Vec<String> = Vec::new();
    for caps in re.captures_iter(html) {
        let name = &caps[1];
        if is_reserved_link(name) || names.iter().any(|n| n == name) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}

fn is_reserved_link(name: &str) -> bool {
    matches!(
        name,
        "followers" | "following" | "repositories" | "stars" | "projects" | "packages"
    ) || name.starts_with('.')
}

/// Decode a base64 `contents` payload. GitHub wraps it at 60 columns.
fn decode_contents(contents: &FileContents) -> Option<String> {
    let content = contents.content.as_deref()?;
    if contents.encoding.as_deref().is_some_and(|e| e != "base64") {
        return None;
    }
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact).ok()?;
    String::from_utf8(bytes).ok()
}

// =============================================================================
// Client
// =============================================================================

/// Fetches profile data from GitHub for [`GITHUB_USER`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GithubClient;

impl GithubClient {
    pub fn new() -> Self {
        Self
    }

    /// Public repositories, most recently updated first.
    ///
    /// Order of attempts: session cache, REST API, profile page scraping.
    /// Returns an empty list when everything fails.
    pub async fn fetch_repositories(&self) -> Vec<Repository> {
        if let Some(cached) = cache::get::<Vec<Repository>>(REPOS_KEY) {
            tracing::debug!(count = cached.len(), "repositories from session cache");
            return cached;
        }

        let repos = match fetch::fetch_json::<Vec<Repository>>(&repos_url()).await {
            Ok(repos) => repos.into_iter().filter(|r| !r.private).collect(),
            Err(err) => {
                tracing::warn!(%err, "repository API failed, scraping profile");
                self.scrape_profile().await
            }
        };

        if !repos.is_empty()
            && let Err(err) = cache::set(REPOS_KEY, &repos)
        {
            tracing::warn!(%err, "could not cache repositories");
        }
        repos
    }

    async fn scrape_profile(&self) -> Vec<Repository> {
        match fetch::fetch_text(&profile_url(), fetch::Accept::Any).await {
            Ok(html) => parse_profile_links(&html)
                .into_iter()
                .map(Repository::named)
                .collect(),
            Err(err) => {
                tracing::warn!(%err, "profile scraping failed");
                Vec::new()
            }
        }
    }

    /// Recursive file tree of one repository.
    ///
    /// An empty entry list stands for "listing unavailable".
    pub async fn fetch_listing(&self, repo: Repository) -> RepositoryListing {
        match fetch::fetch_json::<GitTree>(&tree_url(&repo.name)).await {
            Ok(tree) => {
                if tree.truncated {
                    tracing::warn!(repo = %repo.name, "git tree truncated");
                }
                RepositoryListing::new(repo, tree.tree)
            }
            Err(err) => {
                tracing::warn!(repo = %repo.name, %err, "git tree unavailable");
                RepositoryListing::new(repo, Vec::new())
            }
        }
    }

    /// Repositories together with their listings, fetched concurrently.
    pub async fn fetch_all(&self) -> Vec<RepositoryListing> {
        let repos = self.fetch_repositories().await;
        futures::future::join_all(repos.into_iter().map(|repo| self.fetch_listing(repo))).await
    }

    /// Forget the cached repository list so the next fetch hits the network.
    pub fn clear_cache(&self) {
        cache::remove(REPOS_KEY);
    }
}

impl ContentSource for GithubClient {
    /// Contents API first, then raw content on each known branch.
    async fn fetch_file(&self, repo: &str, path: &str) -> Option<String> {
        match fetch::fetch_json::<FileContents>(&contents_url(repo, path)).await {
            Ok(contents) => {
                if let Some(text) = decode_contents(&contents) {
                    return Some(text);
                }
            }
            Err(err) => tracing::debug!(repo, path, %err, "contents API failed"),
        }

        for branch in RAW_BRANCHES {
            match fetch::fetch_text(&raw_url(repo, branch, path), fetch::Accept::Any).await {
                Ok(text) => return Some(text),
                Err(err) => tracing::debug!(repo, path, branch, %err, "raw fetch failed"),
            }
        }

        tracing::warn!(repo, path, "file content unavailable");
        None
    }
}
