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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const PALETTE: [Rgb; 9] = [
    Rgb { r: 255, g: 127, b: 14 },
    Rgb { r: 44, g: 160, b: 44 },
    Rgb { r: 31, g: 119, b: 180 },
    Rgb { r: 255, g: 152, b: 150 },
    Rgb { r: 197, g: 27, b: 125 },
    Rgb { r: 227, g: 119, b: 194 },
    Rgb { r: 148, g: 103, b: 189 },
    Rgb { r: 140, g: 86, b: 75 },
    Rgb { r: 227, g: 119, b: 194 },
];

/// Lightening applied below the first level, in percent
pub const NESTED_LIGHTER_FACTOR: u32 = 130;

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    ///
    /// Scales the HSV value by factor / 100.  Once value saturates at 255 the overflow is
    /// taken off the saturation, so very light colours drift towards white.
    pub fn lighter(&self, factor: u32) -> Rgb {
        let (h, s, v) = self.to_hsv();

        let mut s = s as i64;
        let mut v = (factor as i64 * v as i64) / 100;
        if v > 255 {
            s -= v - 255;
            if s < 0 {
                s = 0;
            }
            v = 255;
        }

        Rgb::from_hsv(h, s as u8, v as u8)
    }

    /// Hue in degrees [0, 360), saturation and value in [0, 255]
    fn to_hsv(&self) -> (f64, u8, u8) {
        let r = self.r as f64;
        let g = self.g as f64;
        let b = self.b as f64;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max == 0. { 0. } else { 255. * delta / max };

        let h = if delta == 0. {
            0.
        } else if max == r {
            60. * ((g - b) / delta)
        } else if max == g {
            60. * ((b - r) / delta + 2.)
        } else {
            60. * ((r - g) / delta + 4.)
        };
        let h = if h < 0. { h + 360. } else { h };

        (h, s.round() as u8, v as u8)
    }

    fn from_hsv(h: f64, s: u8, v: u8) -> Rgb {
        let s = s as f64 / 255.;
        let v = v as f64;

        let c = v * s;
        let h_prime = (h / 60.) % 6.;
        let x = c * (1. - ((h_prime % 2.) - 1.).abs());
        let m = v - c;

        let (r, g, b) = match h_prime as u32 {
            0 => (c, x, 0.),
            1 => (x, c, 0.),
            2 => (0., c, x),
            3 => (0., x, c),
            4 => (x, 0., c),
            _ => (c, 0., x),
        };

        Rgb {
            r: (r + m).round().clamp(0., 255.) as u8,
            g: (g + m).round().clamp(0., 255.) as u8,
            b: (b + m).round().clamp(0., 255.) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

///
/// Colour of a laid out rect, only depends on where it sits in the tree.  Each top level
/// branch takes the next palette entry (starting at the second one, wrapping around) and
/// anything nested below the first level is a lighter shade of its branch colour.
pub fn color_for(depth: usize, branch: usize) -> Rgb {
    let base = PALETTE[(branch + 1) % PALETTE.len()];

    if depth <= 1 {
        base
    } else {
        base.lighter(NESTED_LIGHTER_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_for_cycles_palette() {
        assert_eq!(PALETTE[1], color_for(1, 0));
        assert_eq!(PALETTE[2], color_for(1, 1));
        assert_eq!(PALETTE[0], color_for(1, 8));
        assert_eq!(PALETTE[1], color_for(0, 9));
        //Same inputs, same colour
        assert_eq!(color_for(2, 4), color_for(2, 4));
    }

    #[test]
    fn test_nested_is_lighter() {
        let base = color_for(1, 1);
        let nested = color_for(2, 1);

        assert_ne!(base, nested);
        assert_eq!(base.lighter(NESTED_LIGHTER_FACTOR), nested);
        assert!(nested.r >= base.r && nested.g >= base.g && nested.b >= base.b);
    }

    #[test]
    fn test_lighter() {
        // value 180 -> 234, saturation unchanged
        let c = Rgb { r: 31, g: 119, b: 180 }.lighter(130);
        assert_eq!(234, c.b);
        assert!(c.r < c.g && c.g < c.b);

        // already at full value, overflow comes off the saturation
        let c = Rgb { r: 255, g: 0, b: 0 }.lighter(130);
        assert_eq!(Rgb { r: 255, g: 76, b: 76 }, c);

        assert_eq!(Rgb::BLACK, Rgb::BLACK.lighter(130));
        assert_eq!(Rgb { r: 200, g: 200, b: 200 }, Rgb { r: 100, g: 100, b: 100 }.lighter(200));
    }

    #[test]
    fn test_display_hex() {
        assert_eq!("#ff7f0e", PALETTE[0].to_string());
        assert_eq!("#000000", Rgb::BLACK.to_string());
    }
}
