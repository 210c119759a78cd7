//! Target file names and the exact-name matcher used to find them.

use std::ffi::{OsStr, OsString};

use crate::identifier::Identifier;

/// `file_name(id)` plus the resource extension. A leading `.` on `extension` is
/// optional; an empty extension leaves the bare file name.
pub fn target_file_name(id: &Identifier, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        id.file_name()
    } else {
        format!("{}.{}", id.file_name(), extension)
    }
}

/// Matches one file name exactly. No character is special: `.`, `*`, `?` and
/// brackets only match themselves, and case is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralName {
    name: OsString,
}

impl LiteralName {
    pub fn new(target: &str) -> Self {
        Self {
            name: OsString::from(target),
        }
    }

    pub fn matches(&self, file_name: &OsStr) -> bool {
        self.name.as_os_str() == file_name
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.name
    }
}
