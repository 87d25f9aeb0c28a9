use std::path::{Path, PathBuf};

use anyhow::Context;

/// Maps request paths to filesystem paths confined to the document root.
///
/// Confinement is checked segment-wise on canonical paths: `..` can never
/// climb above the root, and a symlink below the root that points outside
/// it is rejected. A plain string-prefix comparison would wrongly admit a
/// sibling such as `/srv/http-secret` for root `/srv/http`;
/// `Path::starts_with` compares whole components.
pub struct PathResolver {
    root: PathBuf,
    index_file: String,
}

impl PathResolver {
    /// Creates a resolver rooted at `root`, which must exist.
    ///
    /// The root is canonicalized once so that every later confinement
    /// check compares canonical forms.
    pub fn new(root: impl AsRef<Path>, index_file: impl Into<String>) -> anyhow::Result<Self> {
        let root = std::fs::canonicalize(root.as_ref())
            .with_context(|| format!("document root {:?}", root.as_ref()))?;

        Ok(Self {
            root,
            index_file: index_file.into(),
        })
    }

    /// The canonical document root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a decoded request path.
    ///
    /// Returns `None` when the path is empty, escapes the root, or names a
    /// regular file with a trailing slash. The returned path is not
    /// guaranteed to exist: a directory without its index file resolves to
    /// a path that fails at open time, which callers surface as 404.
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        if path.is_empty() {
            return None;
        }
        let trailing_slash = path.ends_with('/');

        let mut resolved = self.root.clone();
        let mut depth = 0usize;
        for segment in path.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    if depth == 0 {
                        return None;
                    }
                    resolved.pop();
                    depth -= 1;
                }
                _ => {
                    resolved.push(segment);
                    depth += 1;
                }
            }
        }

        if resolved.is_dir() {
            resolved.push(&self.index_file);
        } else if trailing_slash && resolved.is_file() {
            // "page.html/" asks for a directory that cannot exist
            return None;
        }

        match std::fs::canonicalize(&resolved) {
            Ok(canonical) if canonical.starts_with(&self.root) => Some(canonical),
            Ok(_) => None,
            // nonexistent: already confined lexically, will 404 at open
            Err(_) => Some(resolved),
        }
    }
}
