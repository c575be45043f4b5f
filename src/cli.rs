use std::path::PathBuf;

use clap::{Parser, Subcommand};
use enumset::EnumSet;
use warehouse_costing::{model::ResourceKind, prelude::*, sample, site::Site};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the full report of every warehouse.
    #[clap(name = "report")]
    Report(SiteArgs),

    /// Print the total time and cost of every warehouse.
    #[clap(name = "totals")]
    Totals(TotalsArgs),

    /// Split every warehouse cost by resource kind.
    #[clap(name = "breakdown")]
    Breakdown(BreakdownArgs),
}

#[derive(Parser)]
pub struct SiteArgs {
    /// Site description in TOML. The built-in sample site is used when omitted.
    #[clap(long = "site", env = "WAREHOUSE_SITE")]
    pub path: Option<PathBuf>,
}

impl SiteArgs {
    pub fn load(&self) -> Result<Site> {
        match &self.path {
            Some(path) => Site::from_path(path),
            None => {
                info!("no site file given, using the sample site");
                Ok(sample::site()?)
            }
        }
    }
}

#[derive(Parser)]
pub struct TotalsArgs {
    #[clap(flatten)]
    pub site: SiteArgs,

    /// Print JSON lines instead of the table.
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct BreakdownArgs {
    #[clap(flatten)]
    pub site: SiteArgs,

    /// Resource kinds to show, all by default.
    #[clap(long = "kinds", env = "RESOURCE_KINDS", value_delimiter = ',', num_args = 1..)]
    pub kinds: Vec<ResourceKind>,
}

impl BreakdownArgs {
    #[must_use]
    pub fn kinds(&self) -> EnumSet<ResourceKind> {
        if self.kinds.is_empty() { EnumSet::all() } else { self.kinds.iter().copied().collect() }
    }
}
