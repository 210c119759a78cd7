//! Loader that deserializes a resource file as a TOML document.

use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use super::{LoadError, Loader};
use crate::capture::ResultSlot;
use crate::identifier::Identifier;

/// Reads the matched file and reports it deserialized as `T`.
pub struct TomlLoader<T> {
    _output: PhantomData<fn() -> T>,
}

impl<T> TomlLoader<T> {
    pub fn new() -> Self {
        Self {
            _output: PhantomData,
        }
    }
}

impl<T> Default for TomlLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TomlLoader<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TomlLoader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TomlLoader")
    }
}

impl<T: DeserializeOwned> Loader for TomlLoader<T> {
    type Output = T;

    fn load(
        &self,
        _id: &Identifier,
        path: &Path,
        slot: &mut ResultSlot<T>,
    ) -> Result<(), LoadError> {
        let data = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: T = toml::from_str(&data).map_err(|source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        slot.with_capture(|ctrl| {
            ctrl.set(value);
        });
        Ok(())
    }
}
