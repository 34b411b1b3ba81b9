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
use serde::Deserialize;

/// A weighted leaf to be laid out.  Labels need not be unique.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub label: String,
    pub weight: f64,
    #[serde(default)]
    pub group: Option<String>,
}

impl Item {
    pub fn new<S: Into<String>>(label: S, weight: f64) -> Self {
        Item {
            label: label.into(),
            weight,
            group: None,
        }
    }

    pub fn with_group<S: Into<String>>(mut self, group: S) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Only items passing this are laid out, the rest are silently dropped
    pub fn has_layout_weight(&self) -> bool {
        self.weight.is_finite() && self.weight > 0.
    }
}

/// Default group key, items without a group all land in the "" group
pub fn group_by_field(item: &Item) -> String {
    item.group.clone().unwrap_or_default()
}
