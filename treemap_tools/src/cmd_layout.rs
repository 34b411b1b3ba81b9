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
use std::path::PathBuf;
use std::time::Instant;
use anyhow::Result;
use log::{debug, info, warn};
use structopt::StructOpt;

use treemap_util::geom::{bounding_squareish, Rect};
use treemap_util::io::write_layout_csv;
use treemap_util::layout::{group_by_field, layout_with, GroupKeyFn, Item, LayoutResult};
use treemap_util::render::write_svg;
use treemap_util::util::{format_duration, format_size};

use crate::config::LayoutConfig;
use crate::input_args::InputArgs;

#[derive(StructOpt)]
pub struct LayoutArgs {
    #[structopt(flatten)]
    pub(crate) input: InputArgs,

    #[structopt(long, help="Aggregate items under their group column.  Always on with --inventory")]
    pub(crate) group: bool,

    #[structopt(long, parse(from_os_str), help="TOML file with layout settings")]
    pub(crate) config: Option<PathBuf>,

    #[structopt(long)]
    pub(crate) width: Option<f64>,

    #[structopt(long)]
    pub(crate) height: Option<f64>,

    #[structopt(long, help="Size the canvas so its area equals the total weight")]
    pub(crate) auto_size: bool,

    #[structopt(long, help="Width / height ratio used with --auto-size")]
    pub(crate) aspect_ratio: Option<f64>,

    #[structopt(long, help="First cut is top / bottom instead of side by side")]
    pub(crate) vertical_first: bool,

    #[structopt(long, help="Heaviest children first instead of input order")]
    pub(crate) sort_by_weight: bool,

    #[structopt(long, parse(from_os_str), help="CSV output, one row per rectangle")]
    pub(crate) out_csv: Option<PathBuf>,

    #[structopt(long, parse(from_os_str), help="SVG rendering of the treemap")]
    pub(crate) out_svg: Option<PathBuf>,

    #[structopt(long)]
    pub(crate) title: Option<String>,
}

impl LayoutArgs {
    /// Config file values, overridden by whatever was given on the command line
    pub fn resolve_config(&self) -> Result<LayoutConfig> {
        let mut config = LayoutConfig::read_or_default(self.config.as_deref())?;

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(aspect_ratio) = self.aspect_ratio {
            config.aspect_ratio = aspect_ratio;
        }
        if self.vertical_first {
            config.horizontal_first = false;
        }
        if self.sort_by_weight {
            config.sort_by_weight = true;
        }
        if self.title.is_some() {
            config.title = self.title.clone();
        }

        Ok(config)
    }
}

pub fn canvas_bounds(items: &[Item], config: &LayoutConfig, auto_size: bool) -> Result<Rect> {
    if !auto_size {
        return Ok(Rect::from_size(config.width, config.height)?);
    }

    let total_weight: f64 = items
        .iter()
        .filter(|i| i.has_layout_weight())
        .map(|i| i.weight)
        .sum();

    Ok(bounding_squareish(total_weight, config.aspect_ratio)?)
}

pub fn run_layout(args: &LayoutArgs) -> Result<LayoutResult> {
    let config = args.resolve_config()?;
    debug!("Using {:?}", &config);

    let items = args.input.read_items()?;
    info!("Read {} items from {:?}", items.len(), &args.input.in_csv);

    let bounds = canvas_bounds(&items, &config, args.auto_size)?;

    let group_key: Option<GroupKeyFn> = if args.group || args.input.inventory {
        Some(&group_by_field as GroupKeyFn)
    } else {
        None
    };

    let now = Instant::now();
    let result = layout_with(&items, bounds, group_key, &config.layout_options())?;

    info!("Laid out {} rectangles, total {} in {} ({})",
        result.len(), format_size(result.total_weight()), bounds, format_duration(now.elapsed()));

    if result.is_empty() {
        warn!("No item with a positive size in {:?}, nothing to lay out", &args.input.in_csv);
    }

    if let Some(out_csv) = &args.out_csv {
        write_layout_csv(&result, out_csv)?;
        info!("Wrote {:?}", out_csv);
    }

    if let Some(out_svg) = &args.out_svg {
        write_svg(&result, bounds, config.title.as_deref(), out_svg)?;
        info!("Wrote {:?}", out_svg);
    }

    if args.out_csv.is_none() && args.out_svg.is_none() {
        for p in result.iter() {
            println!("{}\t{}\t{}\t{}",
                p.item.group.as_deref().unwrap_or(""), p.item.label, p.item.weight, p.rect);
        }
    }

    Ok(result)
}
