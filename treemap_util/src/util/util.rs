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
use std::time::Duration;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

pub fn format_duration(d: Duration) -> String {
    let mut secs = d.as_secs();
    let hours = secs / 3600;
    secs %= 3600;
    let minutes = secs / 60;
    secs %= 60;

    let ms = d.as_millis() % 1000;

    format!("{}h {}m {}s {}ms", hours, minutes, secs, ms)
}

///
/// Human readable byte size, binary steps, GB being the largest unit
pub fn format_size(size: f64) -> String {
    if !(size > 0.) {
        return format!("0 {}", UNITS[0]);
    }

    let mut value = size;
    let mut unit_idx = 0;
    while value >= 1024. && unit_idx < UNITS.len() - 1 {
        value /= 1024.;
        unit_idx += 1;
    }

    format!("{:.1} {}", value, UNITS[unit_idx])
}

pub fn escape_xml(s: &str) -> String {
    let mut r = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => r.push_str("&amp;"),
            '<' => r.push_str("&lt;"),
            '>' => r.push_str("&gt;"),
            '"' => r.push_str("&quot;"),
            '\'' => r.push_str("&apos;"),
            _ => r.push(c),
        }
    }

    r
}
