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
use csv::WriterBuilder;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::layout::{LayoutResult, Placement};

/// One output row per laid out leaf
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlacementRecord {
    pub label: String,
    pub group: Option<String>,
    pub weight: f64,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub depth: usize,
    pub branch: usize,
}

impl From<&Placement> for PlacementRecord {
    fn from(p: &Placement) -> Self {
        PlacementRecord {
            label: p.item.label.clone(),
            group: p.item.group.clone(),
            weight: p.item.weight,
            x0: p.rect.x0,
            y0: p.rect.y0,
            x1: p.rect.x1,
            y1: p.rect.y1,
            depth: p.depth,
            branch: p.branch,
        }
    }
}

pub fn write_layout_csv(result: &LayoutResult, out_csv: &Path) -> Result<()> {
    debug!("Creating csv at {:?}", out_csv);

    let mut csv_f = WriterBuilder::new()
        .has_headers(true)
        .from_path(out_csv)
        .with_context(|| format!("Unable to create {:?}", out_csv))?;

    for p in result.iter() {
        csv_f.serialize(PlacementRecord::from(p))?;
    }

    csv_f.flush()?;

    Ok(())
}
