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
use thiserror::Error;

#[derive(Clone, PartialEq, Debug, Error)]
pub enum TreemapError {
    #[error(
        "Invalid rectangle ({x0}, {y0}, {x1}, {y1}): expected x1 >= x0 and y1 >= y0"
    )]
    InvalidRect {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    },
    #[error("Aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f64),
}

pub type Result<T> = std::result::Result<T, TreemapError>;
