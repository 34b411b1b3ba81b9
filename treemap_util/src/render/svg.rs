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
use std::fmt::{self, Write as FmtWrite};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use anyhow::{Context, Result};
use log::debug;

use crate::geom::Rect;
use crate::layout::LayoutResult;
use crate::render::{color_for, Rgb};
use crate::util::{escape_xml, format_size};

const TITLE_BAND_HEIGHT: f64 = 30.;
const LABEL_MIN_WIDTH: f64 = 30.;
const LABEL_MIN_HEIGHT: f64 = 20.;
const SIZE_MIN_WIDTH: f64 = 80.;
const SIZE_MIN_HEIGHT: f64 = 30.;
const FONT_SIZE: f64 = 11.;

///
/// Draws every placement filled with its colour, group outlines on top.  Labels are only
/// drawn when the rect is large enough to hold them.  `bounds` is the rect the layout was
/// computed in; a title adds a band above it.
pub fn render_svg(result: &LayoutResult, bounds: Rect, title: Option<&str>) -> String {
    let mut svg = String::new();

    // fmt::Write on a String never fails
    write_svg_document(&mut svg, result, bounds, title).unwrap();

    svg
}

fn write_svg_document(svg: &mut String, result: &LayoutResult, bounds: Rect, title: Option<&str>) -> fmt::Result {
    let title_height = if title.is_some() { TITLE_BAND_HEIGHT } else { 0. };
    let width = bounds.width();
    let height = bounds.height() + title_height;

    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.3}" height="{h:.3}" viewBox="0 0 {w:.3} {h:.3}" font-family="Arial, sans-serif">"#,
        w = width, h = height)?;

    if let Some(title) = title {
        writeln!(svg,
            r#"  <text x="{:.3}" y="{:.3}" font-size="14" font-weight="bold" text-anchor="middle">{}</text>"#,
            width / 2., TITLE_BAND_HEIGHT * 0.7, escape_xml(title))?;
    }

    writeln!(svg, r#"  <g transform="translate({:.3},{:.3})">"#, -bounds.x0, title_height - bounds.y0)?;

    for p in result.iter() {
        let r = &p.rect;
        let fill = color_for(p.depth, p.branch);

        writeln!(svg,
            r#"    <rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" fill="{}" stroke="{}" stroke-width="0.5"/>"#,
            r.x0, r.y0, r.width(), r.height(), fill, Rgb::BLACK)?;

        if r.width() > LABEL_MIN_WIDTH && r.height() > LABEL_MIN_HEIGHT {
            writeln!(svg,
                r#"    <text x="{:.3}" y="{:.3}" font-size="{}">{}</text>"#,
                r.x0 + 2., r.y0 + 2. + FONT_SIZE, FONT_SIZE, escape_xml(&p.item.label))?;

            if r.width() > SIZE_MIN_WIDTH && r.height() > SIZE_MIN_HEIGHT {
                writeln!(svg,
                    r#"    <text x="{:.3}" y="{:.3}" font-size="{}">{}</text>"#,
                    r.x0 + 2., r.y0 + 18. + FONT_SIZE, FONT_SIZE, format_size(p.item.weight))?;
            }
        }
    }

    for (group, r) in result.group_bounds() {
        writeln!(svg,
            r#"    <rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" fill="none" stroke="{}" stroke-width="1.5"><title>{}</title></rect>"#,
            r.x0, r.y0, r.width(), r.height(), Rgb::BLACK, escape_xml(&group))?;
    }

    writeln!(svg, "  </g>")?;
    writeln!(svg, "</svg>")
}

pub fn write_svg(result: &LayoutResult, bounds: Rect, title: Option<&str>, out_svg: &Path) -> Result<()> {
    debug!("Writing {} rects to {:?}", result.len(), out_svg);

    let mut f = BufWriter::new(File::create(out_svg)
        .with_context(|| format!("Unable to create {:?}", out_svg))?);
    f.write_all(render_svg(result, bounds, title).as_bytes())?;
    f.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use crate::layout::{group_by_field, layout, Item};
    use crate::util::get_temp_filename;
    use super::*;

    #[test]
    fn test_render_svg() {
        let items = vec![
            Item::new("Shapefile", 3. * 1024. * 1024.).with_group("W:/a"),
            Item::new("<tiny>", 1.).with_group("W:/a"),
            Item::new("Raster", 1024. * 1024.).with_group("W:/b & c"),
        ];
        let bounds = Rect::from_size(800., 500.).unwrap();
        let result = layout(&items, bounds, Some(&group_by_field)).unwrap();

        let svg = render_svg(&result, bounds, Some("Inventory"));

        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"height="530.000""#));
        assert!(svg.contains(">Inventory</text>"));
        // 3 leaves + 2 group outlines
        assert_eq!(5, svg.matches("<rect ").count());
        assert!(svg.contains(">Shapefile</text>"));
        assert!(svg.contains(">3.0 MB</text>"));
        //Too small for a label
        assert!(!svg.contains("&lt;tiny&gt;"));
        assert!(svg.contains("<title>W:/b &amp; c</title>"));
        assert!(svg.contains(&format!(r#"fill="{}""#, color_for(2, 1))));
    }

    #[test]
    fn test_flat_layout_has_no_outlines() {
        let items = vec![
            Item::new("a", 1.).with_group("X"),
            Item::new("b", 1.).with_group("Y"),
            Item::new("c", 1.).with_group("X"),
        ];
        let bounds = Rect::from_size(300., 300.).unwrap();
        let result = layout(&items, bounds, None).unwrap();

        let svg = render_svg(&result, bounds, None);

        assert_eq!(3, svg.matches("<rect ").count());
        assert!(!svg.contains("<title>"));
    }

    #[test]
    fn test_ungrouped_items_have_no_outline() {
        let items = vec![
            Item::new("a", 1.).with_group("X"),
            Item::new("b", 1.),
        ];
        let bounds = Rect::from_size(300., 300.).unwrap();
        let result = layout(&items, bounds, Some(&group_by_field)).unwrap();

        let svg = render_svg(&result, bounds, None);

        // 2 leaves + the outline of X
        assert_eq!(3, svg.matches("<rect ").count());
        assert!(svg.contains("<title>X</title>"));
        assert!(!svg.contains("<title></title>"));
    }

    #[test]
    fn test_render_empty() {
        let svg = render_svg(&LayoutResult::default(), Rect::from_size(10., 10.).unwrap(), None);
        assert_eq!(0, svg.matches("<rect ").count());
        assert!(svg.contains(r#"translate(-0.000,0.000)"#) || svg.contains(r#"translate(0.000,0.000)"#));
    }

    #[test]
    fn test_write_svg() {
        let items = vec![Item::new("a", 1.), Item::new("b", 2.)];
        let bounds = Rect::from_size(100., 100.).unwrap();
        let result = layout(&items, bounds, None).unwrap();

        let out = get_temp_filename("layout.svg");
        write_svg(&result, bounds, None, &out).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(render_svg(&result, bounds, None), content);
    }
}
