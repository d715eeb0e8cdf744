//! The `show` command: one catalog object in full.

use crate::commands::common::{Common, CommonArgs, size_text};
use clap::Args;
use ohno::IntoAppError;
use sizewise::{ScaleCategory, effective_size};

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

/// Show a single catalog object in detail
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Id of the object to show
    #[arg(value_name = "ID")]
    pub id: String,
}

pub fn show_object(args: &ShowArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let record = common
        .catalog
        .get(&args.id)
        .into_app_err_with(|| format!("unable to show '{}'", args.id))?;

    let size = effective_size(record);

    println!("{}", common.bold(&record.name));
    println!("Id         : {}", record.id);
    println!("Size       : {} ({:.4e} m)", common.accent(&size_text(size)?), size);
    if let Some(range) = &record.range {
        println!("Range      : {} to {}", size_text(range.min)?, size_text(range.max)?);
    }
    println!("Category   : {}", ScaleCategory::for_size(size).label());
    if !record.tags.is_empty() {
        let tags: Vec<_> = record.tags.iter().map(String::as_str).collect();
        println!("Tags       : {}", tags.join(", "));
    }
    if !record.description.is_empty() {
        println!("Description: {}", record.description);
    }

    Ok(())
}
