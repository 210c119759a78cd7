//! Loaders: turn a located resource file into a value through a [`ResultSlot`].
//!
//! The resolver only depends on the [`Loader`] trait and does not know how a
//! resource file is interpreted. Concrete loaders read TOML documents, plain
//! text, or dispatch to entry points registered in-process.

mod document;
mod error;
mod registry;
mod text;

pub use document::TomlLoader;
pub use error::LoadError;
pub use registry::{EntryPoint, EntryPointRegistry};
pub use text::TextLoader;

use std::marker::PhantomData;
use std::path::Path;

use crate::capture::ResultSlot;
use crate::identifier::Identifier;

/// Trait implemented by resource loaders.
///
/// `load` is called once per resolution with the identifier that was resolved,
/// the matched file, and a fresh slot. Whatever the loader leaves in the slot
/// becomes the resolver's result.
pub trait Loader {
    type Output;

    fn load(
        &self,
        id: &Identifier,
        path: &Path,
        slot: &mut ResultSlot<Self::Output>,
    ) -> Result<(), LoadError>;
}

impl<L: Loader + ?Sized> Loader for &L {
    type Output = L::Output;

    fn load(
        &self,
        id: &Identifier,
        path: &Path,
        slot: &mut ResultSlot<Self::Output>,
    ) -> Result<(), LoadError> {
        (**self).load(id, path, slot)
    }
}

/// Loader backed by a closure.
pub struct FnLoader<F, T> {
    f: F,
    _output: PhantomData<fn() -> T>,
}

/// Wraps `f` as a [`Loader`].
pub fn loader_fn<F, T>(f: F) -> FnLoader<F, T>
where
    F: Fn(&Identifier, &Path, &mut ResultSlot<T>) -> Result<(), LoadError>,
{
    FnLoader {
        f,
        _output: PhantomData,
    }
}

impl<F, T> Loader for FnLoader<F, T>
where
    F: Fn(&Identifier, &Path, &mut ResultSlot<T>) -> Result<(), LoadError>,
{
    type Output = T;

    fn load(
        &self,
        id: &Identifier,
        path: &Path,
        slot: &mut ResultSlot<T>,
    ) -> Result<(), LoadError> {
        (self.f)(id, path, slot)
    }
}
