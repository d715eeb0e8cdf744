//! The `analogy` command: solve "A is to B as C is to ?" over the catalog.

use crate::commands::common::{Common, CommonArgs, size_text};
use clap::Args;
use ohno::IntoAppError;
use sizewise::{AnalogyResult, MatchPolicy, create_analogy, effective_size};

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

/// Complete a scale analogy: A is to B as C is to ?
#[derive(Args, Debug)]
pub struct AnalogyArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Id of the first known object
    #[arg(value_name = "A")]
    pub a: String,

    /// Id of the second known object
    #[arg(value_name = "B")]
    pub b: String,

    /// Id of the object to scale
    #[arg(value_name = "C")]
    pub c: String,

    /// Exclude A, B, and C themselves from the match candidates
    #[arg(long)]
    pub exclude_inputs: bool,

    /// Emit the result as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run_analogy(args: &AnalogyArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let policy = if args.exclude_inputs {
        MatchPolicy::ExcludeInputs
    } else {
        MatchPolicy::IncludeAll
    };

    let result = create_analogy(&common.catalog, &args.a, &args.b, &args.c, policy)
        .into_app_err_with(|| format!("unable to complete analogy {} : {} :: {} : ?", args.a, args.b, args.c))?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).into_app_err("unable to serialize analogy result")?
        );
        return Ok(());
    }

    render_analogy(&common, &args.a, &args.b, &args.c, &result)
}

/// Shared renderer, also used by the `explore` tour.
pub fn render_analogy(common: &Common, id_a: &str, id_b: &str, id_c: &str, result: &AnalogyResult) -> Result<()> {
    let catalog = &common.catalog;
    let a = catalog.get(id_a).into_app_err("unable to render analogy")?;
    let b = catalog.get(id_b).into_app_err("unable to render analogy")?;
    let c = catalog.get(id_c).into_app_err("unable to render analogy")?;
    let closest = catalog.get(&result.closest_match_id).into_app_err("unable to render analogy")?;

    println!("{}", common.bold("Scale Analogy:"));
    println!("   {} is to {}", a.name, b.name);
    println!("   as {} is to {}", c.name, common.bold(&closest.name));
    println!();
    println!("Object Sizes:");
    for record in [a, b, c, closest] {
        println!("   - {}: {}", record.name, common.accent(&size_text(effective_size(record))?));
    }
    println!();
    println!("Scale Factor  : {:.2e}", result.scale_factor);
    println!("Expected Size : {}", size_text(result.expected_size)?);
    println!("Match Accuracy: {}", common.accuracy(result.accuracy_percent));

    Ok(())
}
