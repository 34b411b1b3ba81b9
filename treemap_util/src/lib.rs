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
//! Slice and dice treemap layout of weighted items, used to chart how storage is spread
//! across project folders and data types.
//!
//! ```
//! use treemap_util::geom::Rect;
//! use treemap_util::layout::{layout, Item};
//!
//! let items = vec![Item::new("A", 75.), Item::new("B", 25.)];
//! let result = layout(&items, Rect::from_size(100., 50.)?, None)?;
//! assert_eq!(75., result.placements[0].rect.x1);
//! # Ok::<(), treemap_util::errors::TreemapError>(())
//! ```

pub mod errors;
pub mod geom;
pub mod layout;
pub mod io;
pub mod render;
pub mod util;
