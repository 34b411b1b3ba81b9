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
use std::collections::HashMap;

use crate::geom::Rect;
use crate::layout::Item;

#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub item: Item,
    pub rect: Rect,
    /// Number of internal nodes above the leaf, 1 for a flat layout, 2 when grouped
    pub depth: usize,
    /// Index of the top level child (group) the leaf belongs to
    pub branch: usize,
}

/// Placements in depth first order, one per laid out leaf
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    pub placements: Vec<Placement>,
}

impl LayoutResult {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Placement> {
        self.placements.iter()
    }

    pub fn total_area(&self) -> f64 {
        self.placements.iter().map(|p| p.rect.area()).sum()
    }

    pub fn total_weight(&self) -> f64 {
        self.placements.iter().map(|p| p.item.weight).sum()
    }

    ///
    /// Bounding box of the leaves of each group, in the order groups first appear.  Only leaves
    /// laid out under a group node (depth 2 or more) count, so a flat layout has no groups
    /// whatever its items' group field says.  Leaves without a group are skipped.
    pub fn group_bounds(&self) -> Vec<(String, Rect)> {
        let mut bounds: Vec<(String, Rect)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for p in self.placements.iter().filter(|p| p.depth >= 2) {
            let group = match &p.item.group {
                Some(g) => g,
                None => continue,
            };

            match index.get(group.as_str()) {
                Some(&idx) => bounds[idx].1 = bounds[idx].1.union(&p.rect),
                None => {
                    index.insert(group.as_str(), bounds.len());
                    bounds.push((group.clone(), p.rect));
                }
            }
        }

        bounds
    }
}

impl IntoIterator for LayoutResult {
    type Item = Placement;
    type IntoIter = std::vec::IntoIter<Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.into_iter()
    }
}

impl<'a> IntoIterator for &'a LayoutResult {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::{group_by_field, layout};
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new("a", 1.).with_group("X"),
            Item::new("b", 1.).with_group("Y"),
            Item::new("c", 1.).with_group("X"),
            Item::new("d", 1.),
        ]
    }

    #[test]
    fn test_group_bounds() {
        let bounds = Rect::from_size(40., 10.).unwrap();
        let r = layout(&items(), bounds, Some(&group_by_field)).unwrap();

        // X weighs 2 of 4 and goes left, Y and the ungrouped leaf share the right half
        assert_eq!(vec![
            ("X".to_string(), Rect::new(0., 0., 20., 10.).unwrap()),
            ("Y".to_string(), Rect::new(20., 0., 40., 5.).unwrap()),
        ], r.group_bounds());
        assert_eq!(4., r.total_weight());
        assert_eq!(400., r.total_area());
    }

    #[test]
    fn test_flat_layout_has_no_group_bounds() {
        let r = layout(&items(), Rect::from_size(40., 10.).unwrap(), None).unwrap();

        assert_eq!(4, r.len());
        assert!(r.iter().any(|p| p.item.group.is_some()));
        assert!(r.group_bounds().is_empty());
    }
}
