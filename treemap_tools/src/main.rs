/*
This file is part of Treemap Tools
Copyright (C) 2022 Novel-T

Treemap Tools is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/
use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use structopt::StructOpt;

use crate::cmd_bounds::{BoundsArgs, compute_bounds};
use crate::cmd_layout::{LayoutArgs, run_layout};
use crate::cmd_summary::{SummaryArgs, print_summary};

mod cmd_bounds;
mod cmd_layout;
mod cmd_summary;
mod config;
mod input_args;

#[derive(StructOpt)]
struct Cli {

    #[structopt(long, default_value = "Warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    cmd: Command
}

#[derive(StructOpt)]
enum Command {
    #[structopt(help="Slice and dice treemap of a CSV, outputs placements CSV and / or SVG")]
    Layout(LayoutArgs),

    #[structopt(help="Prints the canvas whose area is the total weight, for a given aspect ratio")]
    Bounds(BoundsArgs),

    #[structopt(help="Prints item count and total weight per group")]
    Summary(SummaryArgs),
}

fn run() -> Result<()> {
    let args = Cli::from_args();

    SimpleLogger::new().with_level(args.log_level).init()?;

    match &args.cmd {
        Command::Layout(r) => {
            run_layout(r)?;
        },
        Command::Bounds(r) => {
            compute_bounds(r)?;
        },
        Command::Summary(r) => {
            print_summary(r)?;
        },
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}
