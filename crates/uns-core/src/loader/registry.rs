//! In-process entry points, registered by identifier.
//!
//! A resource file on the search path marks *where* a unit lives; the code that
//! runs for it is an entry point registered here under the same identifier.
//! Entries are keyed by file-name form, so identifiers that collide on disk
//! (`a~b` and `a/b`) also share one registry entry.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use super::{LoadError, Loader};
use crate::capture::{Controller, ResultSlot};
use crate::identifier::{normalize, Identifier, IdentifierError, RawIdentifier};

/// Entry point run when its resource file is resolved.
pub type EntryPoint<T> = Box<dyn Fn(&Path, &mut Controller<T>) -> anyhow::Result<()> + Send + Sync>;

pub struct EntryPointRegistry<T> {
    entries: HashMap<String, EntryPoint<T>>,
}

impl<T> Default for EntryPointRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EntryPointRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        f.debug_struct("EntryPointRegistry")
            .field("entries", &keys)
            .finish()
    }
}

impl<T> EntryPointRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers `entry` for the identifier `raw`. Returns true when an
    /// earlier entry for the same file name was replaced.
    pub fn register<'a, F>(
        &mut self,
        raw: impl Into<RawIdentifier<'a>>,
        entry: F,
    ) -> Result<bool, IdentifierError>
    where
        F: Fn(&Path, &mut Controller<T>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let key = normalize(raw)?.file_name();
        tracing::debug!("registered entry point {}", key);
        Ok(self.entries.insert(key, Box::new(entry)).is_some())
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.entries.contains_key(&id.file_name())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Loader for EntryPointRegistry<T> {
    type Output = T;

    fn load(
        &self,
        id: &Identifier,
        path: &Path,
        slot: &mut ResultSlot<T>,
    ) -> Result<(), LoadError> {
        let entry = self
            .entries
            .get(&id.file_name())
            .ok_or_else(|| LoadError::NotRegistered {
                identifier: id.concise(),
            })?;
        slot.try_with_capture(|ctrl| entry(path, ctrl))?;
        Ok(())
    }
}
