//! Render command implementation

use std::io::Write;
use std::path::Path;

use winget_core::Recipe;
use winget_manifest::{encode, to_json_dump};

use crate::error::Result;

/// Print the manifest a recipe produces, without touching its target
pub fn run_render(recipe_path: &Path, json: bool) -> Result<()> {
    let record = Recipe::load(recipe_path)?.build_record()?;

    let mut stdout = std::io::stdout().lock();
    if json {
        writeln!(stdout, "{}", to_json_dump(&record)?)?;
    } else {
        stdout.write_all(&encode(&record)?)?;
    }
    stdout.flush()?;

    Ok(())
}
