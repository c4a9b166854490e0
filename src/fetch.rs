//! Resource fetching abstraction.
//!
//! The engine never touches the filesystem (or network) directly; it
//! pulls the manifest and post bodies through a [`Fetcher`]. This keeps
//! the rendering pipeline pure enough to test with in-memory sources and
//! lets a host swap in whatever transport serves its static files.

use std::io;
use std::path::PathBuf;

/// Source of manifest and post file contents.
///
/// Paths are the `file` strings from the manifest (typically
/// `./posts/{year}/{name}.md`) or the manifest filename itself. A failed
/// fetch is terminal for the operation that requested it; there is no
/// retry policy at this layer or above.
pub trait Fetcher {
    fn fetch(&self, path: &str) -> io::Result<String>;
}

/// Fetcher that resolves paths against a blog directory on disk.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Fetcher for DirFetcher {
    fn fetch(&self, path: &str) -> io::Result<String> {
        let rel = path.strip_prefix("./").unwrap_or(path);
        std::fs::read_to_string(self.root.join(rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_relative_paths() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("posts/2024")).unwrap();
        fs::write(tmp.path().join("posts/2024/hello.md"), "# Hello").unwrap();

        let fetcher = DirFetcher::new(tmp.path());
        assert_eq!(fetcher.fetch("./posts/2024/hello.md").unwrap(), "# Hello");
        assert_eq!(fetcher.fetch("posts/2024/hello.md").unwrap(), "# Hello");
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let fetcher = DirFetcher::new(tmp.path());
        assert!(fetcher.fetch("./posts/2024/nope.md").is_err());
    }
}
