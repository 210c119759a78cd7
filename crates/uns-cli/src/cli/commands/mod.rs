//! CLI command handlers, one per file.

mod concise;
mod file_name;
mod locate;
mod resolve;
mod uri;

pub use concise::run_concise;
pub use file_name::run_file_name;
pub use locate::run_locate;
pub use resolve::run_resolve;
pub use uri::run_uri;

use std::path::PathBuf;
use uns_core::config::UnsConfig;
use uns_core::loader::Loader;
use uns_core::resolver::Resolver;

/// Resolver over `cfg` with the `--path` roots searched first.
fn resolver_for<L: Loader>(cfg: &UnsConfig, extra: &[PathBuf], loader: L) -> Resolver<L> {
    Resolver::from_config(cfg, loader).prepend_roots(extra.iter().cloned())
}
