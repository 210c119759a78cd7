//! Ordered search-path roots and the recursive scan over them.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::pattern::LiteralName;

/// Environment variable whose entries are searched before configured roots.
pub const UNS_PATH_ENV: &str = "UNS_PATH";

/// Ordered list of root directories; earlier roots take priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a platform path list (`:`-separated on Unix), skipping empty entries.
    pub fn from_path_list(list: &OsStr) -> Self {
        Self::new(std::env::split_paths(list).filter(|p| !p.as_os_str().is_empty()))
    }

    /// Roots listed in `UNS_PATH`, or an empty path when it is unset.
    pub fn from_env() -> Self {
        std::env::var_os(UNS_PATH_ENV)
            .map(|list| Self::from_path_list(&list))
            .unwrap_or_default()
    }

    pub fn push(&mut self, dir: impl Into<PathBuf>) {
        self.dirs.push(dir.into());
    }

    /// Puts `dirs` ahead of the current roots, keeping their order.
    pub fn prepend<I, P>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut front: Vec<PathBuf> = dirs.into_iter().map(Into::into).collect();
        front.append(&mut self.dirs);
        self.dirs = front;
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// First file named `name` under the first root that has one.
    pub fn find_first(&self, name: &LiteralName) -> Option<PathBuf> {
        self.dirs.iter().find_map(|root| find_in_root(root, name))
    }
}

/// Depth-first walk of `root`, following symlinks, in file-name order.
fn find_in_root(root: &Path, name: &LiteralName) -> Option<PathBuf> {
    if !root.is_dir() {
        tracing::debug!("skipping search root {} (not a directory)", root.display());
        return None;
    }
    tracing::debug!(
        "searching {} for {}",
        root.display(),
        name.as_os_str().to_string_lossy()
    );

    let walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("search walk error under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if name.matches(entry.file_name()) {
            return Some(entry.into_path());
        }
    }
    None
}
