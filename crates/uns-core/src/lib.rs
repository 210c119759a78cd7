pub mod config;
pub mod logging;

pub mod capture;
pub mod identifier;
pub mod loader;
pub mod resolver;

pub use capture::{Controller, ResultSlot};
pub use identifier::{normalize, Identifier, IdentifierError, RawIdentifier};
pub use loader::{LoadError, Loader};
pub use resolver::{ResolveError, Resolver, SearchPath};
