//! `uns concise <identifier>` – print host + path.

use anyhow::Result;
use uns_core::identifier;

pub fn run_concise(raw: &str) -> Result<()> {
    println!("{}", identifier::concise(raw)?);
    Ok(())
}
