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
use anyhow::{bail, Result};
use log::info;
use structopt::StructOpt;

use treemap_util::geom::{bounding_squareish, Rect};
use treemap_util::io::{read_inventory_items, read_items_csv};

///
/// Prints the canvas whose area equals the total weight, for a given width / height ratio
#[derive(StructOpt)]
pub struct BoundsArgs {
    #[structopt(long, help="Total weight, taken as an area")]
    pub(crate) total_weight: Option<f64>,

    #[structopt(long, parse(from_os_str), help="Sum the weights of this CSV instead")]
    pub(crate) in_csv: Option<PathBuf>,

    #[structopt(long)]
    pub(crate) inventory: bool,

    #[structopt(long, default_value = "1.6")]
    pub(crate) aspect_ratio: f64,
}

pub fn compute_bounds(args: &BoundsArgs) -> Result<Rect> {
    let total_weight = match (args.total_weight, &args.in_csv) {
        (Some(w), _) => w,
        (None, Some(in_csv)) => {
            let items = if args.inventory {
                read_inventory_items(in_csv)?
            } else {
                read_items_csv(in_csv)?
            };
            items.iter().filter(|i| i.has_layout_weight()).map(|i| i.weight).sum()
        }
        (None, None) => bail!("Either --total-weight or --in-csv is required"),
    };

    info!("Total weight {}, aspect ratio {}", total_weight, args.aspect_ratio);

    let bounds = bounding_squareish(total_weight, args.aspect_ratio)?;

    println!("{}", bounds);
    println!("width: {:.3} height: {:.3}", bounds.width(), bounds.height());

    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use float_cmp::{ApproxEq, F64Margin};
    use treemap_util::util::get_temp_filename;
    use super::*;

    #[test]
    fn test_bounds_from_weight() {
        let args = BoundsArgs { total_weight: Some(400.), in_csv: None, inventory: false, aspect_ratio: 1. };
        assert_eq!(Rect::new(0., 0., 20., 20.).unwrap(), compute_bounds(&args).unwrap());
    }

    #[test]
    fn test_bounds_from_csv() {
        let in_csv = get_temp_filename("areas.csv");
        fs::write(&in_csv, "label,weight,group\na,100,x\nb,60,y\nc,-10,y\n").unwrap();

        let args = BoundsArgs { total_weight: None, in_csv: Some(in_csv), inventory: false, aspect_ratio: 1.6 };
        let bounds = compute_bounds(&args).unwrap();

        let margin = F64Margin { epsilon: 1e-9, ulps: 4 };
        assert!(bounds.area().approx_eq(160., margin));
        assert!(bounds.height().approx_eq(10., margin));
        assert!(bounds.width().approx_eq(16., margin));
    }

    #[test]
    fn test_bounds_needs_input() {
        let args = BoundsArgs { total_weight: None, in_csv: None, inventory: false, aspect_ratio: 1. };
        assert!(compute_bounds(&args).is_err());

        let args = BoundsArgs { total_weight: Some(10.), in_csv: None, inventory: false, aspect_ratio: -1. };
        assert!(compute_bounds(&args).is_err());
    }
}
