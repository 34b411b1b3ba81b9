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
use std::path::Path;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use log::{debug, warn};

use crate::layout::Item;

///
/// Reads a `label,weight[,group]` CSV with a header row.  Rows that do not parse are logged
/// and skipped.
pub fn read_items_csv(csv_path: &Path) -> Result<Vec<Item>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Unable to open {:?}", csv_path))?;

    let mut items = Vec::new();

    for (row_idx, row) in rdr.deserialize::<Item>().enumerate() {
        match row {
            Ok(item) => items.push(item),
            Err(e) => warn!("Skipping row {} of {:?}: {}", row_idx + 1, csv_path, e),
        }
    }

    debug!("Read {} items from {:?}", items.len(), csv_path);

    Ok(items)
}
