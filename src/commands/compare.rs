//! The `compare` command: pairwise size comparison of two objects.

use crate::commands::common::{Common, CommonArgs, size_text};
use clap::Args;
use ohno::IntoAppError;
use sizewise::{compare, effective_size};

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

/// Compare the sizes of two catalog objects
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Id of the first object
    #[arg(value_name = "A")]
    pub a: String,

    /// Id of the second object
    #[arg(value_name = "B")]
    pub b: String,

    /// Emit the comparison as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn compare_objects(args: &CompareArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let catalog = &common.catalog;

    let a = catalog.get(&args.a).into_app_err("unable to compare")?;
    let b = catalog.get(&args.b).into_app_err("unable to compare")?;
    let comparison = compare(a, b).into_app_err_with(|| format!("unable to compare '{}' with '{}'", a.id, b.id))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&comparison).into_app_err("unable to serialize comparison")?
        );
        return Ok(());
    }

    println!("{}: {}", common.bold(&a.name), common.accent(&size_text(effective_size(a))?));
    println!("{}: {}", common.bold(&b.name), common.accent(&size_text(effective_size(b))?));
    println!();
    println!("{}", comparison.summary);
    println!("Exact ratio: {:.4e}", comparison.ratio);

    Ok(())
}
