//! The `list` command: browse the catalog, optionally filtered, grouped by
//! scale category.

use crate::commands::common::{Common, CommonArgs, detect_terminal_width, size_text, truncate};
use clap::Args;
use ohno::IntoAppError;
use sizewise::{ObjectRecord, ScaleCategory, effective_size};
use std::collections::HashSet;
use strum::IntoEnumIterator;

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

/// List catalog objects, optionally filtered
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Case-insensitive text to match against names and descriptions
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Only objects carrying at least one of these tags (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Lower size bound in meters
    #[arg(long, value_name = "METERS", requires = "max")]
    pub min: Option<f64>,

    /// Upper size bound in meters
    #[arg(long, value_name = "METERS", requires = "min")]
    pub max: Option<f64>,
}

pub fn list_objects(args: &ListArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let catalog = &common.catalog;

    let mut selected: Vec<&ObjectRecord> = match &args.search {
        Some(text) => catalog.search(text),
        None => catalog.all().iter().collect(),
    };

    if !args.tags.is_empty() {
        let tagged: HashSet<&str> = catalog.filter_by_tags(&args.tags).iter().map(|r| r.id.as_str()).collect();
        selected.retain(|r| tagged.contains(r.id.as_str()));
    }

    if let (Some(min), Some(max)) = (args.min, args.max) {
        let in_range: HashSet<&str> = catalog
            .find_by_size_range(min, max)
            .into_app_err("invalid size range")?
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        selected.retain(|r| in_range.contains(r.id.as_str()));
    }

    if selected.is_empty() {
        println!("No objects match.");
        return Ok(());
    }

    let description_width = detect_terminal_width().saturating_sub(6).max(20);

    for category in ScaleCategory::iter() {
        let members: Vec<_> = selected
            .iter()
            .filter(|r| ScaleCategory::for_size(effective_size(r)) == category)
            .collect();
        if members.is_empty() {
            continue;
        }

        println!("\n{}", common.bold(category.label()));
        for record in members {
            println!(
                "  {} {} - {}",
                record.name,
                common.dimmed(&format!("[{}]", record.id)),
                common.accent(&size_text(effective_size(record))?)
            );
            if !record.description.is_empty() {
                println!("    {}", common.dimmed(&truncate(&record.description, description_width)));
            }
        }
    }

    println!("\n{} object(s)", selected.len());
    Ok(())
}
