//! Sync command implementation

use std::path::Path;

use colored::Colorize;

use winget_core::{ManifestSync, Recipe, SyncOptions, SyncReport, SyncStatus};

use crate::error::Result;

/// Run the sync command
///
/// Loads the recipe, builds its record and writes the manifest only when
/// the canonical content differs from what is on disk.
pub fn run_sync(recipe_path: &Path, dry_run: bool, json: bool) -> Result<()> {
    let recipe = Recipe::load(recipe_path)?;
    let record = recipe.build_record()?;
    let target = recipe.target_path()?;

    let report = ManifestSync::new()
        .with_options(SyncOptions { dry_run })
        .sync(&record, &target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report)?)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn report_json(report: &SyncReport) -> Result<serde_json::Value> {
    let manifest: serde_json::Value = serde_json::from_str(&report.manifest_dump)?;
    let mut value = serde_json::to_value(report)?;
    // Embed the dump as an object rather than an escaped string. Keys keep
    // the manifest's order.
    if let Some(fields) = value.as_object_mut() {
        fields.remove("manifest_dump");
        fields.insert("manifest".into(), manifest);
    }
    Ok(value)
}

fn print_report(report: &SyncReport) {
    let tag = match report.status {
        SyncStatus::Created => "CREATED".green().bold(),
        SyncStatus::Updated => "UPDATED".yellow().bold(),
        SyncStatus::Unchanged => "OK".green().bold(),
    };
    println!("{} {}", tag, report.summary());
    println!("   {} {}", "fingerprint".dimmed(), report.fingerprint);
}
