//! Canonical HTTPS identifiers and their string encodings.
//!
//! An [`Identifier`] wraps a URL whose scheme is always `https` and derives
//! two strings from it:
//!
//! - the concise form, `host + path`, used for display;
//! - the file-name form, the concise form with every `/` turned into `~`,
//!   used as the on-disk name of a resource.
//!
//! Query strings and fragments never reach either form. The file-name form is
//! not injective: `a~b` and `a/b` both encode to `a~b`, because `~` in text
//! input is read as a path separator.
//!
//! Parsing follows the WHATWG URL rules, so both forms are read from the
//! rewritten URL, not the raw text:
//!
//! - the host is lowercased (`Example.COM` → `example.com`);
//! - internationalized hosts become punycode (`exämple.com` → `xn--exmple-cua.com`);
//! - `.` and `..` path segments are resolved (`/a/../b` → `/b`);
//! - spaces and other non-path characters are percent-encoded (`/a b` → `/a%20b`).

mod error;
mod prepare;

pub use error::IdentifierError;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Separator written in place of `/` in the file-name form.
pub const FILE_NAME_SEPARATOR: char = '~';

/// Raw input accepted by [`normalize`]: either an already parsed URL or text.
#[derive(Debug, Clone)]
pub enum RawIdentifier<'a> {
    Uri(Cow<'a, Url>),
    Text(Cow<'a, str>),
}

impl<'a> From<&'a Url> for RawIdentifier<'a> {
    fn from(uri: &'a Url) -> Self {
        RawIdentifier::Uri(Cow::Borrowed(uri))
    }
}

impl From<Url> for RawIdentifier<'_> {
    fn from(uri: Url) -> Self {
        RawIdentifier::Uri(Cow::Owned(uri))
    }
}

impl<'a> From<&'a str> for RawIdentifier<'a> {
    fn from(text: &'a str) -> Self {
        RawIdentifier::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for RawIdentifier<'a> {
    fn from(text: &'a String) -> Self {
        RawIdentifier::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for RawIdentifier<'_> {
    fn from(text: String) -> Self {
        RawIdentifier::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for RawIdentifier<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        RawIdentifier::Text(text)
    }
}

impl<'a> From<&'a Identifier> for RawIdentifier<'a> {
    fn from(id: &'a Identifier) -> Self {
        RawIdentifier::Uri(Cow::Borrowed(&id.uri))
    }
}

impl From<Identifier> for RawIdentifier<'_> {
    fn from(id: Identifier) -> Self {
        RawIdentifier::Uri(Cow::Owned(id.uri))
    }
}

impl RawIdentifier<'_> {
    /// Text input from anything with a string representation.
    pub fn display(value: &impl fmt::Display) -> Self {
        RawIdentifier::Text(Cow::Owned(value.to_string()))
    }
}

/// Canonical identifier: an owned `https` URL, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    uri: Url,
}

/// Normalizes raw input into an [`Identifier`].
///
/// A parsed URL is accepted only when its scheme is `https` and is copied, so
/// the caller's value is never shared. Text has every `~` replaced by `/`,
/// gets `https://` prepended unless it already starts with `http://` or
/// `https://` (any case), and is then parsed. Text that names `http://`
/// explicitly is rejected like a parsed `http` URL.
///
/// # Examples
///
/// - `normalize("example.com~sub~path")` → concise form `"example.com/sub/path"`
/// - `normalize("https://example.com/a/b")` → file-name form `"example.com~a~b"`
pub fn normalize<'a>(raw: impl Into<RawIdentifier<'a>>) -> Result<Identifier, IdentifierError> {
    match raw.into() {
        RawIdentifier::Uri(uri) => Identifier::from_https(uri.into_owned()),
        RawIdentifier::Text(text) => {
            let prepared = prepare::prepare_text(&text);
            let uri = Url::parse(&prepared).map_err(|source| IdentifierError::UriSyntax {
                input: prepared.clone(),
                source,
            })?;
            Identifier::from_https(uri)
        }
    }
}

impl Identifier {
    fn from_https(uri: Url) -> Result<Self, IdentifierError> {
        if uri.scheme() != "https" {
            return Err(IdentifierError::InputNotHttps {
                input: uri.to_string(),
            });
        }
        Ok(Self { uri })
    }

    /// The canonical `https` URL.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn into_uri(self) -> Url {
        self.uri
    }

    /// `host + path`. The lone root path `/` contributes nothing, so
    /// `example.com` and `example.com/` share the concise form `example.com`.
    pub fn concise(&self) -> String {
        let host = self.uri.host_str().unwrap_or_default();
        match self.uri.path() {
            "/" => host.to_string(),
            path => format!("{host}{path}"),
        }
    }

    /// Concise form with every `/` replaced by `~`.
    pub fn file_name(&self) -> String {
        self.concise().replace('/', &FILE_NAME_SEPARATOR.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.concise())
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

impl TryFrom<&str> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        normalize(value)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        normalize(value)
    }
}

impl TryFrom<Url> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: Url) -> Result<Self, Self::Error> {
        normalize(value)
    }
}

impl TryFrom<&Url> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        normalize(value)
    }
}

/// Canonical URL for `raw`.
pub fn uri<'a>(raw: impl Into<RawIdentifier<'a>>) -> Result<Url, IdentifierError> {
    normalize(raw).map(Identifier::into_uri)
}

/// Concise form for `raw`.
pub fn concise<'a>(raw: impl Into<RawIdentifier<'a>>) -> Result<String, IdentifierError> {
    normalize(raw).map(|id| id.concise())
}

/// File-name form for `raw`.
pub fn file_name<'a>(raw: impl Into<RawIdentifier<'a>>) -> Result<String, IdentifierError> {
    normalize(raw).map(|id| id.file_name())
}
