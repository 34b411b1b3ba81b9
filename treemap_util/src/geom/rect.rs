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
use std::fmt;

use crate::errors::{Result, TreemapError};

/// Axis aligned rectangle, (x0, y0) is the top left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Rect> {
        let r = Rect { x0, y0, x1, y1 };
        r.validate()?;
        Ok(r)
    }

    pub fn from_size(width: f64, height: f64) -> Result<Rect> {
        Rect::new(0., 0., width, height)
    }

    /// Fails if x1 < x0, y1 < y0 or any corner is NaN or infinite
    pub fn validate(&self) -> Result<()> {
        let finite = [self.x0, self.y0, self.x1, self.y1].iter().all(|c| c.is_finite());

        if finite && self.x1 >= self.x0 && self.y1 >= self.y0 {
            return Ok(());
        }

        Err(TreemapError::InvalidRect {
            x0: self.x0,
            y0: self.y0,
            x1: self.x1,
            y1: self.y1,
        })
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn is_degenerate(&self) -> bool {
        self.area() <= 0.
    }

    ///
    /// Side by side split, left rect gets `fraction` of the width
    pub fn split_vertical(&self, fraction: f64) -> (Rect, Rect) {
        let x_split = self.x0 + self.width() * fraction;
        (
            Rect { x1: x_split, ..*self },
            Rect { x0: x_split, ..*self },
        )
    }

    ///
    /// Top / bottom split, top rect gets `fraction` of the height
    pub fn split_horizontal(&self, fraction: f64) -> (Rect, Rect) {
        let y_split = self.y0 + self.height() * fraction;
        (
            Rect { y1: y_split, ..*self },
            Rect { y0: y_split, ..*self },
        )
    }

    /// Area shared with another rect, 0 if they only touch
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let w = self.x1.min(other.x1) - self.x0.max(other.x0);
        let h = self.y1.min(other.y1) - self.y0.max(other.y0);
        if w <= 0. || h <= 0. {
            return 0.;
        }
        w * h
    }

    /// Smallest rect containing both
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3}, {:.3})", self.x0, self.y0, self.x1, self.y1)
    }
}

///
/// Origin anchored rect whose area equals total_weight, weight being treated as an area
/// in the same units.  Used to size a canvas from summed feature areas.
pub fn bounding_squareish(total_weight: f64, aspect_ratio: f64) -> Result<Rect> {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0. {
        return Err(TreemapError::InvalidAspectRatio(aspect_ratio));
    }

    if !(total_weight > 0.) {
        return Ok(Rect::default());
    }

    let height = (total_weight / aspect_ratio).sqrt();
    let width = aspect_ratio * height;

    Rect::from_size(width, height)
}

#[cfg(test)]
mod tests {
    use float_cmp::{ApproxEq, F64Margin};
    use super::*;

    #[test]
    fn test_rect_validation() {
        assert!(Rect::new(0., 0., 10., 5.).is_ok());
        assert!(Rect::new(3., 3., 3., 3.).is_ok());

        assert_eq!(Rect::new(10., 0., 0., 5.).unwrap_err(),
                   TreemapError::InvalidRect { x0: 10., y0: 0., x1: 0., y1: 5. });
        assert!(Rect::new(0., 5., 10., 0.).is_err());
        assert!(Rect::new(0., f64::NAN, 10., 5.).is_err());
    }

    #[test]
    fn test_rect_rejects_infinite_corners() {
        assert_eq!(Rect::from_size(f64::INFINITY, 50.).unwrap_err(),
                   TreemapError::InvalidRect { x0: 0., y0: 0., x1: f64::INFINITY, y1: 50. });
        assert!(Rect::new(f64::NEG_INFINITY, 0., 10., 5.).is_err());
        assert!(Rect::new(0., 0., 10., f64::INFINITY).is_err());

        let unbounded = Rect { x0: 0., y0: 0., x1: f64::INFINITY, y1: 50. };
        assert!(unbounded.validate().is_err());
    }

    #[test]
    fn test_split_vertical() {
        let r = Rect::new(0., 0., 100., 50.).unwrap();
        let (left, right) = r.split_vertical(0.75);

        assert_eq!(left, Rect::new(0., 0., 75., 50.).unwrap());
        assert_eq!(right, Rect::new(75., 0., 100., 50.).unwrap());
    }

    #[test]
    fn test_split_horizontal() {
        let r = Rect::new(10., 20., 30., 60.).unwrap();
        let (top, bottom) = r.split_horizontal(0.25);

        assert_eq!(top, Rect::new(10., 20., 30., 30.).unwrap());
        assert_eq!(bottom, Rect::new(10., 30., 30., 60.).unwrap());
    }

    #[test]
    fn test_intersection_area() {
        let a = Rect::new(0., 0., 10., 10.).unwrap();
        let b = Rect::new(5., 5., 15., 15.).unwrap();
        let c = Rect::new(10., 0., 20., 10.).unwrap();

        assert_eq!(25., a.intersection_area(&b));
        //Shared edge only
        assert_eq!(0., a.intersection_area(&c));
        assert_eq!(Rect::new(0., 0., 20., 10.).unwrap(), a.union(&c));
    }

    #[test]
    fn test_bounding_squareish() {
        let margin = F64Margin { epsilon: 1e-9, ulps: 4 };

        let r = bounding_squareish(200., 2.).unwrap();
        assert!(r.height().approx_eq(10., margin));
        assert!(r.width().approx_eq(20., margin));
        assert!(r.area().approx_eq(200., margin));
        assert_eq!(0., r.x0);
        assert_eq!(0., r.y0);

        let r = bounding_squareish(1234.5, 1.6).unwrap();
        assert!(r.area().approx_eq(1234.5, margin));
        assert!((r.width() / r.height()).approx_eq(1.6, margin));
    }

    #[test]
    fn test_bounding_squareish_edge_cases() {
        assert_eq!(Rect::default(), bounding_squareish(0., 1.).unwrap());
        assert_eq!(Rect::default(), bounding_squareish(-5., 1.).unwrap());

        assert_eq!(TreemapError::InvalidAspectRatio(0.), bounding_squareish(10., 0.).unwrap_err());
        assert!(bounding_squareish(10., -1.).is_err());
        assert!(bounding_squareish(10., f64::INFINITY).is_err());
    }
}
