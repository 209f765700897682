//! Digest command implementation

use std::path::PathBuf;

use winget_fs::digest_file;

use crate::error::Result;

/// Print `<hex>  <file>` for each file, in the order given
pub fn run_digest(files: &[PathBuf]) -> Result<()> {
    for file in files {
        let fingerprint = digest_file(file)?;
        println!("{}  {}", fingerprint.to_hex(), file.display());
    }
    Ok(())
}
