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
/// Slice and dice treemap layout

mod item;
mod tree;
mod partition;
mod result;

pub use item::*;
pub use tree::*;
pub use partition::*;
pub use result::*;

use log::debug;

use crate::errors::Result;
use crate::geom::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Orientation of the first split, true is side by side
    pub horizontal: bool,
    /// Lay out children heaviest first instead of in input order
    pub sort_by_weight: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            horizontal: true,
            sort_by_weight: false,
        }
    }
}

pub fn layout(items: &[Item], bounds: Rect, group_key: Option<GroupKeyFn>) -> Result<LayoutResult> {
    layout_with(items, bounds, group_key, &LayoutOptions::default())
}

///
/// Partitions `bounds` among the items with a positive weight.  Only a malformed `bounds`
/// is an error; empty input gives an empty result.
pub fn layout_with(
    items: &[Item],
    bounds: Rect,
    group_key: Option<GroupKeyFn>,
    options: &LayoutOptions,
) -> Result<LayoutResult> {
    bounds.validate()?;

    let mut root = build_tree(items, group_key);
    if options.sort_by_weight {
        root.sort_by_weight();
    }

    debug!("Tree has {} leaves out of {} items, total weight {}",
        root.leaf_count(), items.len(), root.weight());

    let result = partition(&root, bounds, options.horizontal);

    debug!("Laid out {} rectangles in {}", result.len(), bounds);

    Ok(result)
}
