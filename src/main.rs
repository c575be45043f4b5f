#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;

use clap::{Parser, crate_version};
use itertools::Itertools;
use warehouse_costing::{
    model::{Summary, Warehouse},
    prelude::*,
    tables::{build_breakdown_table, build_totals_table},
};

use crate::cli::{Args, Command};

const WAREHOUSE_SEPARATOR: &str = "\n\n====================================\n\n";

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Report(args) => {
            let site = args.load()?;
            println!("{}", site.warehouses.iter().map(Warehouse::report).join(WAREHOUSE_SEPARATOR));
        }
        Command::Totals(args) => {
            let site = args.site.load()?;
            let summaries: Vec<Summary> = site.warehouses.iter().map(Warehouse::summary).collect();
            if args.json {
                for summary in &summaries {
                    println!("{}", serde_json::to_string(summary)?);
                }
            } else {
                println!("{}", build_totals_table(&summaries));
            }
        }
        Command::Breakdown(args) => {
            let site = args.site.load()?;
            let kinds = args.kinds();
            for warehouse in &site.warehouses {
                info!(id = %warehouse.id, kind = %warehouse.kind, "breaking down…");
                let table =
                    build_breakdown_table(&warehouse.cost_by_kind(), warehouse.total_cost(), kinds);
                println!("{}\n{table}", warehouse.id);
            }
        }
    }

    info!("done!");
    Ok(())
}
