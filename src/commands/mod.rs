//! Command-line subcommands and their shared plumbing.

mod analogy;
mod common;
mod compare;
mod explore;
mod imagine;
mod list;
mod show;

pub use analogy::{AnalogyArgs, run_analogy};
pub use compare::{CompareArgs, compare_objects};
pub use explore::{ExploreArgs, explore_analogies};
pub use imagine::{ImagineArgs, imagine_scaling};
pub use list::{ListArgs, list_objects};
pub use show::{ShowArgs, show_object};
