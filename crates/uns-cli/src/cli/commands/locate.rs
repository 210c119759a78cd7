//! `uns locate <identifier>` – print the matching resource file.

use anyhow::Result;
use std::path::PathBuf;
use uns_core::config::UnsConfig;
use uns_core::loader::TextLoader;

use super::resolver_for;

/// Path of the resource for `raw`, or an error naming the file that was searched for.
pub fn locate(raw: &str, cfg: &UnsConfig, extra: &[PathBuf]) -> Result<PathBuf> {
    let resolver = resolver_for(cfg, extra, TextLoader);
    match resolver.locate(raw)? {
        Some(path) => Ok(path),
        None => anyhow::bail!(
            "no {} on search path ({})",
            resolver.target_file_name(raw)?,
            count_roots(resolver.search_path().dirs().len())
        ),
    }
}

fn count_roots(n: usize) -> String {
    match n {
        1 => "1 root".to_string(),
        n => format!("{n} roots"),
    }
}

pub fn run_locate(raw: &str, cfg: &UnsConfig, extra: &[PathBuf]) -> Result<()> {
    let path = locate(raw, cfg, extra)?;
    println!("{}", path.display());
    Ok(())
}
