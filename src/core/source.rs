//! On-demand file content for repository files.

use std::future::Future;

/// Supplies the content of files under `~/projects/<repo>/`.
///
/// Every failure (network, missing file, timeout) resolves to `None`;
/// `cat` reports it as unavailable content.
pub trait ContentSource {
    fn fetch_file(&self, repo: &str, path: &str) -> impl Future<Output = Option<String>>;
}

/// Source that never fetches, leaving `cat` with embedded content only.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoContentSource;

impl ContentSource for NoContentSource {
    async fn fetch_file(&self, _repo: &str, _path: &str) -> Option<String> {
        None
    }
}
