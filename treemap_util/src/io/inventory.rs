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
use serde::Deserialize;

use crate::layout::Item;

pub const UNKNOWN_FOLDER: &str = "Unknown";
pub const UNKNOWN_TYPE: &str = "unknown";

/// Row of a file inventory: path,nom,type,size,modification_time
#[derive(Deserialize)]
struct InventoryRow {
    path: Option<String>,
    #[serde(alias = "name")]
    nom: Option<String>,
    #[serde(rename = "type")]
    data_type: Option<String>,
    size: Option<String>,
    modification_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    /// Drive and first directory level, see `folder_of`
    pub folder: String,
    pub data_type: String,
    pub size: f64,
    /// With forward slashes
    pub path: String,
    pub name: String,
    pub modification_time: String,
}

impl InventoryRecord {
    /// Files are laid out by type, aggregated under their folder
    pub fn to_item(&self) -> Item {
        Item::new(self.data_type.clone(), self.size).with_group(self.folder.clone())
    }
}

///
/// "W:/projets/2021/a.shp" -> "W:/projets".  Backslashes count as separators and empty
/// segments are ignored, so UNC paths give "server/share".  Paths with fewer than 3 segments
/// have no folder.
pub fn folder_of(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let parts: Vec<&str> = normalized.split('/').filter(|p| !p.is_empty()).collect();

    if parts.len() >= 3 {
        format!("{}/{}", parts[0], parts[1])
    } else {
        UNKNOWN_FOLDER.to_string()
    }
}

///
/// Reads a file inventory CSV.  Rows without a path are skipped silently, rows whose size
/// is missing or not a number are skipped with a warning.
pub fn read_inventory_csv(csv_path: &Path) -> Result<Vec<InventoryRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("Unable to open {:?}", csv_path))?;

    let mut records = Vec::new();

    for (row_idx, row) in rdr.deserialize::<InventoryRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!("Error processing row {}: {}", row_idx + 1, e);
                continue;
            }
        };

        let path = match row.path.as_deref().map(str::trim) {
            Some(p) if !p.is_empty() => p.replace('\\', "/"),
            _ => continue,
        };

        let size = match row.size.as_deref().map(|s| s.trim().parse::<f64>()) {
            Some(Ok(size)) => size,
            _ => {
                warn!("Error processing row {}: invalid size {:?} for {}", row_idx + 1, row.size, path);
                continue;
            }
        };

        records.push(InventoryRecord {
            folder: folder_of(&path),
            data_type: row
                .data_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
            size,
            name: row.nom.unwrap_or_default(),
            modification_time: row.modification_time.unwrap_or_default(),
            path,
        });
    }

    debug!("Read {} inventory records from {:?}", records.len(), csv_path);

    Ok(records)
}

pub fn read_inventory_items(csv_path: &Path) -> Result<Vec<Item>> {
    Ok(read_inventory_csv(csv_path)?.iter().map(InventoryRecord::to_item).collect())
}
