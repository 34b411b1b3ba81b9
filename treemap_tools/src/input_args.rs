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
use anyhow::Result;
use structopt::StructOpt;

use treemap_util::io::{read_inventory_items, read_items_csv};
use treemap_util::layout::Item;

#[derive(StructOpt)]
pub struct InputArgs {
    #[structopt(long, parse(from_os_str), help="Input CSV, label,weight[,group] unless --inventory")]
    pub(crate) in_csv: PathBuf,

    #[structopt(long, help="Input is a file inventory (path,nom,type,size,modification_time), grouped by folder")]
    pub(crate) inventory: bool,
}

impl InputArgs {
    pub fn read_items(&self) -> Result<Vec<Item>> {
        if self.inventory {
            read_inventory_items(&self.in_csv)
        } else {
            read_items_csv(&self.in_csv)
        }
    }
}
