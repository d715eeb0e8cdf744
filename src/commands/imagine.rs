//! The `imagine` command: rescale the rest of the catalog as if one object
//! were the size of another.

use crate::commands::common::{Common, CommonArgs, size_text};
use clap::Args;
use core::cmp::Ordering;
use ohno::IntoAppError;
use sizewise::{effective_size, ratio};

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

/// Show the catalog as if TARGET were the size of REFERENCE
#[derive(Args, Debug)]
pub struct ImagineArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Id of the object being rescaled
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Id of the object lending its size
    #[arg(value_name = "REFERENCE")]
    pub reference: String,

    /// How many rescaled objects to show
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub count: usize,
}

pub fn imagine_scaling(args: &ImagineArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let catalog = &common.catalog;

    let target = catalog.get(&args.target).into_app_err("unable to rescale")?;
    let reference = catalog.get(&args.reference).into_app_err("unable to rescale")?;

    let scale_factor = ratio(effective_size(reference), effective_size(target))
        .into_app_err_with(|| format!("unable to rescale '{}' to '{}'", target.id, reference.id))?;

    // Every other object under the same shrink/grow factor, smallest first.
    let mut scaled: Vec<(&str, f64)> = catalog
        .all()
        .iter()
        .filter(|r| r.id != target.id && r.id != reference.id)
        .map(|r| (r.name.as_str(), effective_size(r) * scale_factor))
        .collect();
    scaled.sort_unstable_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    println!(
        "{}",
        common.bold(&format!("If {} were the size of a {}:", target.name, reference.name))
    );
    println!();
    println!("Reference: {}: {}", reference.name, common.accent(&size_text(effective_size(reference))?));
    println!("Scale factor: {scale_factor:.2e}");
    println!();

    for (name, size) in scaled.iter().take(args.count) {
        println!("- {}: {}", name, common.accent(&size_text(*size)?));
    }
    if scaled.len() > args.count {
        println!("... and {} more", scaled.len() - args.count);
    }

    Ok(())
}
