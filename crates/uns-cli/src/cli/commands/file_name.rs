//! `uns file-name <identifier>` – print the on-disk name stem.

use anyhow::Result;
use uns_core::identifier;

pub fn run_file_name(raw: &str) -> Result<()> {
    println!("{}", identifier::file_name(raw)?);
    Ok(())
}
