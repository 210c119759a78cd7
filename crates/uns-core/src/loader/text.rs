//! Loader that reports a resource file's contents as text.

use std::path::Path;

use super::{LoadError, Loader};
use crate::capture::ResultSlot;
use crate::identifier::Identifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextLoader;

impl Loader for TextLoader {
    type Output = String;

    fn load(
        &self,
        _id: &Identifier,
        path: &Path,
        slot: &mut ResultSlot<String>,
    ) -> Result<(), LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        slot.with_capture(|ctrl| {
            ctrl.set(text);
        });
        Ok(())
    }
}
