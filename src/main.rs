//! A tool to compare the sizes of physical objects across 61 orders of magnitude.
//!
//! # Overview
//!
//! `sizewise` answers questions about relative size over a catalog of
//! physical objects reaching from the Planck length (10^-35 m) to the
//! observable universe (10^26 m). Its centerpiece is the scale analogy:
//! given three objects A, B, and C, it computes what C would become if
//! scaled by the ratio B/A, then finds the real object closest to that
//! size and scores how good the match is.
//!
//! # Quick Start
//!
//! ```bash
//! sizewise analogy hydrogen_atom golf_ball earth
//! # Scale Analogy:
//! #    Hydrogen Atom is to Golf Ball
//! #    as Earth is to Light Year
//! ```
//!
//! # Commands
//!
//! **Browse the catalog:**
//! ```bash
//! sizewise list
//! sizewise list --search ball
//! sizewise list --tag planetary --tag stellar
//! sizewise list --min 1e-9 --max 1e-6
//! sizewise show blue_whale
//! ```
//!
//! **Compare two objects:**
//! ```bash
//! sizewise compare earth golf_ball
//! sizewise compare earth golf_ball --json
//! ```
//!
//! **Complete a scale analogy:**
//! ```bash
//! sizewise analogy hydrogen_atom golf_ball earth
//! sizewise analogy virus basketball earth --exclude-inputs
//! sizewise analogy moon tennis_ball jupiter --json
//! ```
//!
//! **Rescale the whole catalog:**
//! ```bash
//! sizewise imagine earth golf_ball
//! ```
//!
//! **Take the guided tour:**
//! ```bash
//! sizewise explore
//! ```
//!
//! # Catalogs
//!
//! Every command reads the built-in catalog by default. Point `--catalog`
//! (or `SIZEWISE_CATALOG`) at a JSON file to use your own; both the nested
//! metadata/objects format and the flat legacy format are accepted.

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

mod commands;

use crate::commands::{
    AnalogyArgs, CompareArgs, ExploreArgs, ImagineArgs, ListArgs, ShowArgs, compare_objects, explore_analogies,
    imagine_scaling, list_objects, run_analogy, show_object,
};

type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "sizewise", version, about)]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: SizewiseSubcommand,
}

#[derive(Subcommand, Debug)]
enum SizewiseSubcommand {
    /// List catalog objects, optionally filtered, grouped by scale
    List(ListArgs),
    /// Show a single catalog object in detail
    Show(ShowArgs),
    /// Compare the sizes of two catalog objects
    Compare(CompareArgs),
    /// Complete a scale analogy: A is to B as C is to ?
    Analogy(Box<AnalogyArgs>),
    /// Show the catalog as if one object were the size of another
    Imagine(ImagineArgs),
    /// Tour classic scale analogies and the catalog's coverage
    Explore(ExploreArgs),
}

fn main() -> Result<()> {
    match &Cli::parse().command {
        SizewiseSubcommand::List(list_args) => list_objects(list_args),
        SizewiseSubcommand::Show(show_args) => show_object(show_args),
        SizewiseSubcommand::Compare(compare_args) => compare_objects(compare_args),
        SizewiseSubcommand::Analogy(analogy_args) => run_analogy(analogy_args),
        SizewiseSubcommand::Imagine(imagine_args) => imagine_scaling(imagine_args),
        SizewiseSubcommand::Explore(explore_args) => explore_analogies(explore_args),
    }
}
