//! `uns resolve <identifier>` – load the resource and print it.

use anyhow::{Context, Result};
use std::path::PathBuf;
use uns_core::config::UnsConfig;
use uns_core::loader::{TextLoader, TomlLoader};

use super::resolver_for;

/// Loaded resource for `raw` rendered as text: raw contents, or the TOML
/// document re-serialized when `as_toml` is set.
pub fn render(raw: &str, cfg: &UnsConfig, extra: &[PathBuf], as_toml: bool) -> Result<String> {
    let found = if as_toml {
        resolver_for(cfg, extra, TomlLoader::<toml::Table>::new())
            .resolve(raw)?
            .map(|table| toml::to_string_pretty(&table))
            .transpose()
            .context("render TOML resource")?
    } else {
        resolver_for(cfg, extra, TextLoader).resolve(raw)?
    };
    found.with_context(|| format!("no resource for {raw} on search path"))
}

pub fn run_resolve(raw: &str, cfg: &UnsConfig, extra: &[PathBuf], as_toml: bool) -> Result<()> {
    let text = render(raw, cfg, extra, as_toml)?;
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
