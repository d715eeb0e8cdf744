//! The `explore` command: a curated tour of classic scale analogies plus a
//! summary of what the catalog covers.

use crate::commands::analogy::render_analogy;
use crate::commands::common::{Common, CommonArgs, size_text};
use clap::Args;
use ohno::IntoAppError;
use sizewise::{MatchPolicy, create_analogy, effective_size};

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

/// Classic triples worth showing. Any triple with an id missing from the
/// loaded catalog is skipped, so a custom catalog degrades gracefully.
const CLASSIC_ANALOGIES: [(&str, &str, &str, &str); 4] = [
    ("hydrogen_atom", "golf_ball", "earth", "If a hydrogen atom were a golf ball, Earth would be..."),
    ("earth", "golf_ball", "sun", "If Earth were a golf ball, the Sun would be..."),
    ("virus", "basketball", "earth", "If a virus were a basketball, Earth would be..."),
    ("moon", "tennis_ball", "jupiter", "If the Moon were a tennis ball, Jupiter would be..."),
];

const CROSS_SCALE_JOURNEYS: [(&str, &str, &str, &str); 4] = [
    ("planck_length", "proton", "hydrogen_atom", "Quantum foundations"),
    ("virus", "red_blood_cell", "human_hair", "Biological scales"),
    ("golf_ball", "earth", "solar_system", "Planetary to cosmic"),
    ("mount_everest", "earth", "milky_way_galaxy", "Geographic to galactic"),
];

/// Tour classic scale analogies and the catalog's coverage
#[derive(Args, Debug)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn explore_analogies(args: &ExploreArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    println!("{}", common.bold("CLASSIC SCALE ANALOGIES"));
    run_tour(&common, &CLASSIC_ANALOGIES)?;

    println!();
    println!("{}", common.bold("CROSS-SCALE JOURNEYS"));
    run_tour(&common, &CROSS_SCALE_JOURNEYS)?;

    print_coverage(&common)
}

fn run_tour(common: &Common, analogies: &[(&str, &str, &str, &str)]) -> Result<()> {
    let catalog = &common.catalog;
    for (a, b, c, description) in analogies {
        // Skip triples the loaded catalog can't satisfy.
        if catalog.get(a).is_err() || catalog.get(b).is_err() || catalog.get(c).is_err() {
            continue;
        }

        let result = create_analogy(catalog, a, b, c, MatchPolicy::IncludeAll)
            .into_app_err_with(|| format!("unable to complete analogy {a} : {b} :: {c} : ?"))?;

        println!();
        println!("{description}");
        render_analogy(common, a, b, c, &result)?;
    }
    Ok(())
}

fn print_coverage(common: &Common) -> Result<()> {
    let catalog = &common.catalog;
    let Some(smallest) = catalog.all().iter().min_by(|a, b| {
        effective_size(a)
            .partial_cmp(&effective_size(b))
            .unwrap_or(core::cmp::Ordering::Equal)
    }) else {
        return Ok(());
    };
    let Some(largest) = catalog.all().iter().max_by(|a, b| {
        effective_size(a)
            .partial_cmp(&effective_size(b))
            .unwrap_or(core::cmp::Ordering::Equal)
    }) else {
        return Ok(());
    };

    let span = effective_size(largest) / effective_size(smallest);

    println!();
    println!("{}", common.bold("CATALOG COVERAGE"));
    println!("   Smallest: {} ({})", smallest.name, size_text(effective_size(smallest))?);
    println!("   Largest : {} ({})", largest.name, size_text(effective_size(largest))?);
    println!("   Total span: {span:.2e} ({:.0} orders of magnitude)", span.log10().floor());

    Ok(())
}
