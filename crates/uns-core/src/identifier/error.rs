//! Errors raised while normalizing identifier input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentifierError {
    /// A parsed URL (or text with an explicit `http://` prefix) whose scheme is not `https`.
    #[error("input-not-https: {input}")]
    InputNotHttps { input: String },
    /// The prepared text did not parse as a URL.
    #[error("invalid identifier URI {input:?}: {source}")]
    UriSyntax {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
