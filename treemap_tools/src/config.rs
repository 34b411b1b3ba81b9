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
use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use serde::Deserialize;

use treemap_util::layout::LayoutOptions;

/// Layout settings read from a TOML file, every key is optional
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub horizontal_first: bool,
    pub sort_by_weight: bool,
    /// Width / height, used when the canvas is sized from the total weight
    pub aspect_ratio: f64,
    pub title: Option<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            width: 800.,
            height: 500.,
            horizontal_first: true,
            sort_by_weight: false,
            aspect_ratio: 1.6,
            title: None,
        }
    }
}

impl LayoutConfig {
    pub fn read(config_path: &Path) -> Result<LayoutConfig> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Unable to read config {:?}", config_path))?;

        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {:?}", config_path))?;

        Ok(config)
    }

    pub fn read_or_default(config_path: Option<&Path>) -> Result<LayoutConfig> {
        match config_path {
            Some(p) => LayoutConfig::read(p),
            None => Ok(LayoutConfig::default()),
        }
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            horizontal: self.horizontal_first,
            sort_by_weight: self.sort_by_weight,
        }
    }
}
