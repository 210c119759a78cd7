//! Search-path resolution: identifier → resource file → loaded value.
//!
//! The resolver derives `file_name(id) + extension`, scans the search path in
//! order (each root recursively, following symlinks) and hands the first match
//! to its [`Loader`] together with a fresh [`ResultSlot`]. A miss is `Ok(None)`.

mod pattern;
mod search_path;

pub use pattern::{target_file_name, LiteralName};
pub use search_path::{SearchPath, UNS_PATH_ENV};

use std::path::PathBuf;
use thiserror::Error;

use crate::capture::ResultSlot;
use crate::config::{UnsConfig, DEFAULT_RESOURCE_EXTENSION};
use crate::identifier::{normalize, Identifier, IdentifierError, RawIdentifier};
use crate::loader::{LoadError, Loader};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Identifier(#[from] IdentifierError),
    #[error("load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },
}

/// Resolves identifiers against a search path using loader `L`.
#[derive(Debug, Clone)]
pub struct Resolver<L> {
    search_path: SearchPath,
    extension: String,
    loader: L,
}

impl<L: Loader> Resolver<L> {
    pub fn new(search_path: SearchPath, loader: L) -> Self {
        Self {
            search_path,
            extension: DEFAULT_RESOURCE_EXTENSION.to_string(),
            loader,
        }
    }

    /// Resolver over `cfg`'s effective search path (`UNS_PATH` first) and extension.
    pub fn from_config(cfg: &UnsConfig, loader: L) -> Self {
        Self::new(cfg.effective_search_path(), loader).with_extension(&cfg.resource_extension)
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Puts `dirs` ahead of the current search roots.
    pub fn prepend_roots<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_path.prepend(dirs);
        self
    }

    /// File name a resource for `raw` must carry on disk.
    pub fn target_file_name<'a>(
        &self,
        raw: impl Into<RawIdentifier<'a>>,
    ) -> Result<String, IdentifierError> {
        Ok(target_file_name(&normalize(raw)?, &self.extension))
    }

    /// Path of the resource file for `raw`, without loading it.
    pub fn locate<'a>(
        &self,
        raw: impl Into<RawIdentifier<'a>>,
    ) -> Result<Option<PathBuf>, ResolveError> {
        let id = normalize(raw)?;
        Ok(self.locate_identifier(&id))
    }

    fn locate_identifier(&self, id: &Identifier) -> Option<PathBuf> {
        let name = LiteralName::new(&target_file_name(id, &self.extension));
        self.search_path.find_first(&name)
    }

    /// Locates and loads the resource for `raw`, returning the value its unit
    /// reported. `Ok(None)` when no file matches, or when the unit reported nothing.
    pub fn resolve<'a>(
        &self,
        raw: impl Into<RawIdentifier<'a>>,
    ) -> Result<Option<L::Output>, ResolveError> {
        let id = normalize(raw)?;
        let Some(path) = self.locate_identifier(&id) else {
            tracing::debug!("no resource for {} on search path", id);
            return Ok(None);
        };

        tracing::info!("loading {} from {}", id, path.display());
        let mut slot = ResultSlot::new();
        self.loader
            .load(&id, &path, &mut slot)
            .map_err(|source| ResolveError::Load { path, source })?;

        let value = slot.take();
        if value.is_none() {
            tracing::debug!("resource for {} reported no result", id);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{loader_fn, TextLoader};
    use std::fs;
    use std::path::Path;

    fn write(path: &Path, body: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn miss_is_none() {
        let root = tempfile::tempdir().unwrap();
        let resolver = Resolver::new(SearchPath::new([root.path()]), TextLoader);
        assert_eq!(resolver.resolve("example.com/missing").unwrap(), None);
        assert_eq!(resolver.locate("example.com/missing").unwrap(), None);
    }

    #[test]
    fn empty_search_path_is_none() {
        let resolver = Resolver::new(SearchPath::default(), TextLoader);
        assert!(resolver.resolve("example.com").unwrap().is_none());
    }

    #[test]
    fn returns_value_set_by_unit() {
        let root = tempfile::tempdir().unwrap();
        write(&root.path().join("lib/example.com~a~b.toml"), "payload");
        let resolver = Resolver::new(SearchPath::new([root.path()]), TextLoader);
        assert_eq!(
            resolver.resolve("example.com~a~b").unwrap().as_deref(),
            Some("payload")
        );
        assert_eq!(
            resolver.resolve("https://example.com/a/b?ignored=1").unwrap().as_deref(),
            Some("payload")
        );
    }

    #[test]
    fn unit_that_reports_nothing_is_none() {
        let root = tempfile::tempdir().unwrap();
        write(&root.path().join("quiet.toml"), "");
        let loader = loader_fn(|_: &Identifier, _: &Path, slot: &mut ResultSlot<u32>| {
            slot.with_capture(|_| {});
            Ok(())
        });
        let resolver = Resolver::new(SearchPath::new([root.path()]), loader);
        assert_eq!(resolver.resolve("quiet").unwrap(), None);
    }

    #[test]
    fn custom_extension() {
        let root = tempfile::tempdir().unwrap();
        write(&root.path().join("example.com~x.unit"), "unit");
        write(&root.path().join("example.com~x.toml"), "toml");
        let resolver =
            Resolver::new(SearchPath::new([root.path()]), TextLoader).with_extension(".unit");
        assert_eq!(resolver.extension(), ".unit");
        assert_eq!(
            resolver.target_file_name("example.com/x").unwrap(),
            "example.com~x.unit"
        );
        assert_eq!(resolver.resolve("example.com/x").unwrap().as_deref(), Some("unit"));
    }

    #[test]
    fn identifier_errors_propagate() {
        let resolver = Resolver::new(SearchPath::default(), TextLoader);
        assert!(matches!(
            resolver.resolve("http://example.com/x"),
            Err(ResolveError::Identifier(IdentifierError::InputNotHttps { .. }))
        ));
        assert!(matches!(
            resolver.locate(""),
            Err(ResolveError::Identifier(IdentifierError::UriSyntax { .. }))
        ));
    }

    #[test]
    fn loader_errors_carry_path() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("bad.toml");
        write(&file, "");
        let loader = loader_fn(|_: &Identifier, _: &Path, _: &mut ResultSlot<()>| {
            Err(anyhow::anyhow!("refused").into())
        });
        let resolver = Resolver::new(SearchPath::new([root.path()]), loader);
        match resolver.resolve("bad") {
            Err(ResolveError::Load { path, source }) => {
                assert_eq!(path, file);
                assert_eq!(source.to_string(), "refused");
            }
            other => panic!("expected Load error, got {other:?}"),
        }
    }

    #[test]
    fn loader_sees_resolved_identifier() {
        let root = tempfile::tempdir().unwrap();
        write(&root.path().join("nested/example.com~who.toml"), "");
        let loader = loader_fn(|id: &Identifier, _: &Path, slot: &mut ResultSlot<String>| {
            slot.with_capture(|ctrl| {
                ctrl.set(id.uri().to_string());
            });
            Ok(())
        });
        let resolver = Resolver::new(SearchPath::new([root.path()]), loader);
        assert_eq!(
            resolver.resolve("example.com~who").unwrap().as_deref(),
            Some("https://example.com/who")
        );
    }

    #[test]
    fn prepended_roots_win() {
        let configured = tempfile::tempdir().unwrap();
        let extra = tempfile::tempdir().unwrap();
        write(&configured.path().join("example.com~p.toml"), "configured");
        write(&extra.path().join("example.com~p.toml"), "extra");
        let resolver = Resolver::new(SearchPath::new([configured.path()]), TextLoader)
            .prepend_roots([extra.path()]);
        assert_eq!(resolver.search_path().dirs()[0], extra.path());
        assert_eq!(resolver.resolve("example.com~p").unwrap().as_deref(), Some("extra"));
    }

    fn resolve_in(file: &str, raw: &str) -> Option<String> {
        let root = tempfile::tempdir().unwrap();
        write(&root.path().join(file), "found");
        Resolver::new(SearchPath::new([root.path()]), TextLoader)
            .resolve(raw)
            .unwrap()
    }

    #[test]
    fn lowercased_host_names_the_file() {
        assert_eq!(resolve_in("example.com~Docs.toml", "Example.COM~Docs").as_deref(), Some("found"));
        assert_eq!(resolve_in("Example.COM~Docs.toml", "Example.COM~Docs"), None);
    }

    #[test]
    fn dot_segments_are_removed_before_lookup() {
        assert_eq!(resolve_in("example.com~b.toml", "example.com/a/../b").as_deref(), Some("found"));
        assert_eq!(resolve_in("example.com~a~b.toml", "example.com/a/./b").as_deref(), Some("found"));
    }

    #[test]
    fn path_spaces_are_percent_encoded_before_lookup() {
        assert_eq!(resolve_in("example.com~a%20b.toml", "example.com/a b").as_deref(), Some("found"));
        assert_eq!(resolve_in("example.com~a b.toml", "example.com/a b"), None);
    }

    #[test]
    fn unicode_host_is_punycoded_before_lookup() {
        assert_eq!(resolve_in("xn--exmple-cua.com~x.toml", "exämple.com/x").as_deref(), Some("found"));
        assert_eq!(resolve_in("exämple.com~x.toml", "exämple.com/x"), None);
    }
}
