//! `uns uri <identifier>` – print the canonical https URI.

use anyhow::Result;
use uns_core::identifier;

pub fn run_uri(raw: &str) -> Result<()> {
    println!("{}", identifier::uri(raw)?);
    Ok(())
}
