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
use crate::geom::Rect;
use crate::layout::{LayoutNode, LayoutResult, Placement};

#[derive(Clone, Copy)]
struct Level {
    /// Internal nodes above the children being placed
    depth: usize,
    /// Index of the root child this subtree hangs off, None while still at the root
    branch: Option<usize>,
}

///
/// Slice and dice partition of `rect` among the leaves below `node`.
///
/// At each internal node the children are cut in 2 groups by running weight, the first
/// group being the shortest prefix holding at least half the weight.  When `horizontal` is
/// true the groups are placed side by side, otherwise one above the other; each group then
/// recurses with the orientation flipped.
///
/// Leaves are always emitted, whatever the size of their rect.  Subtrees without positive
/// weight emit nothing.  A zero area `rect` gives zero area rects for every leaf.
pub fn partition(node: &LayoutNode, rect: Rect, horizontal: bool) -> LayoutResult {
    let mut placements = Vec::with_capacity(node.leaf_count());

    partition_node(node, rect, horizontal, Level { depth: 0, branch: None }, &mut placements);

    LayoutResult { placements }
}

fn partition_node(node: &LayoutNode, rect: Rect, horizontal: bool, level: Level, out: &mut Vec<Placement>) {
    match node {
        LayoutNode::Leaf(item) => {
            out.push(Placement {
                item: item.clone(),
                rect,
                depth: level.depth,
                branch: level.branch.unwrap_or(0),
            });
        }
        LayoutNode::Internal { children, weight, .. } => {
            if !(*weight > 0.) || children.is_empty() {
                return;
            }

            let child_level = Level {
                depth: level.depth + 1,
                branch: level.branch,
            };

            if children.len() == 1 {
                place_child(&children[0], 0, rect, !horizontal, child_level, out);
                return;
            }

            let weights = sibling_weights(children);
            partition_siblings(children, &weights, 0, rect, horizontal, child_level, out);
        }
    }
}

fn place_child(child: &LayoutNode, index: usize, rect: Rect, horizontal: bool, level: Level, out: &mut Vec<Placement>) {
    let level = Level {
        depth: level.depth,
        branch: Some(level.branch.unwrap_or(index)),
    };
    partition_node(child, rect, horizontal, level, out);
}

///
/// Weights used to share a rect among siblings.  These are the node weights unless their sum
/// overflows, in which case every leaf weight is first divided by the heaviest leaf below the
/// siblings.
fn sibling_weights(siblings: &[LayoutNode]) -> Vec<f64> {
    let weights: Vec<f64> = siblings.iter().map(|s| s.weight()).collect();

    if weights.iter().sum::<f64>().is_finite() {
        return weights;
    }

    let scale = siblings.iter().map(max_leaf_weight).fold(0., f64::max);
    siblings.iter().map(|s| scaled_weight(s, scale)).collect()
}

fn max_leaf_weight(node: &LayoutNode) -> f64 {
    match node {
        LayoutNode::Leaf(item) => item.weight,
        LayoutNode::Internal { children, .. } => children.iter().map(max_leaf_weight).fold(0., f64::max),
    }
}

fn scaled_weight(node: &LayoutNode, scale: f64) -> f64 {
    match node {
        LayoutNode::Leaf(item) => item.weight / scale,
        LayoutNode::Internal { children, .. } => children.iter().map(|c| scaled_weight(c, scale)).sum(),
    }
}

/// `offset` is the index of siblings[0] among all children of the parent node, `weights` are
/// the matching entries of `sibling_weights`
fn partition_siblings(
    siblings: &[LayoutNode],
    weights: &[f64],
    offset: usize,
    rect: Rect,
    horizontal: bool,
    level: Level,
    out: &mut Vec<Placement>,
) {
    let total: f64 = weights.iter().sum();
    if !(total > 0.) {
        return;
    }

    let split_idx = split_index(weights, total);
    let (left, right) = siblings.split_at(split_idx);
    let (left_weights, right_weights) = weights.split_at(split_idx);

    let left_weight: f64 = left_weights.iter().sum();
    let fraction = left_weight / total;

    let (left_rect, right_rect) = if horizontal {
        rect.split_vertical(fraction)
    } else {
        rect.split_horizontal(fraction)
    };

    for (group, group_weights, group_rect, group_offset) in [
        (left, left_weights, left_rect, offset),
        (right, right_weights, right_rect, offset + split_idx),
    ] {
        match group {
            [] => {}
            [single] => place_child(single, group_offset, group_rect, !horizontal, level, out),
            _ => partition_siblings(group, group_weights, group_offset, group_rect, !horizontal, level, out),
        }
    }
}

///
/// Smallest k >= 1 with prefix_sum(k) >= total / 2.  The comparison is >= so a sibling landing
/// exactly on the half goes left.  Capped at len - 1 so the right group is never empty, else a
/// heavy last sibling would have the whole group recurse onto itself.
fn split_index(weights: &[f64], total: f64) -> usize {
    debug_assert!(weights.len() >= 2);

    let half = total / 2.;
    let mut running = 0.;

    for (idx, w) in weights.iter().enumerate() {
        running += w;
        if running >= half {
            return (idx + 1).min(weights.len() - 1);
        }
    }

    weights.len() - 1
}

#[cfg(test)]
mod tests {
    use crate::layout::Item;
    use super::*;

    fn leaves(weights: &[f64]) -> Vec<LayoutNode> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| LayoutNode::Leaf(Item::new(format!("n{}", i), *w)))
            .collect()
    }

    #[test]
    fn test_split_index() {
        assert_eq!(1, split_index(&[50., 50.], 100.));
        assert_eq!(1, split_index(&[75., 25.], 100.));
        assert_eq!(1, split_index(&[25., 75.], 100.));
        assert_eq!(2, split_index(&[10., 10., 10., 10.], 40.));
        assert_eq!(2, split_index(&[10., 10., 20.], 40.));
        assert_eq!(1, split_index(&[30., 5., 5.], 40.));
        //Heavy last sibling, right group keeps it
        assert_eq!(2, split_index(&[1., 1., 100.], 102.));
    }

    #[test]
    fn test_sibling_weights_near_max() {
        let plain = leaves(&[3., 1.]);
        assert_eq!(vec![3., 1.], sibling_weights(&plain));

        let huge = leaves(&[f64::MAX, f64::MAX, f64::MAX / 2.]);
        assert_eq!(vec![1., 1., 0.5], sibling_weights(&huge));

        // Group weights themselves overflow
        let g0 = LayoutNode::internal(Some("g0".to_string()), leaves(&[1e308, 1e308]));
        let g1 = LayoutNode::internal(Some("g1".to_string()), leaves(&[1e308]));
        assert!(g0.weight().is_infinite());
        assert_eq!(vec![2., 1.], sibling_weights(&[g0, g1]));
    }

    #[test]
    fn test_huge_weights_keep_positive_area() {
        let root = LayoutNode::internal(None, leaves(&[1e308, 1e308]));
        let r = partition(&root, Rect::from_size(100., 50.).unwrap(), true);

        assert_eq!(Rect::new(0., 0., 50., 50.).unwrap(), r.placements[0].rect);
        assert_eq!(Rect::new(50., 0., 100., 50.).unwrap(), r.placements[1].rect);

        let g0 = LayoutNode::internal(Some("g0".to_string()), leaves(&[f64::MAX, f64::MAX]));
        let g1 = LayoutNode::internal(Some("g1".to_string()), leaves(&[f64::MAX, f64::MAX]));
        let root = LayoutNode::internal(None, vec![g0, g1]);
        let r = partition(&root, Rect::from_size(100., 100.).unwrap(), true);

        assert_eq!(4, r.len());
        for p in r.iter() {
            assert_eq!(2500., p.rect.area(), "{} got {}", p.item.label, p.rect);
        }
    }

    #[test]
    fn test_leaf_root_gets_whole_rect() {
        let rect = Rect::new(1., 2., 3., 4.).unwrap();
        let r = partition(&LayoutNode::Leaf(Item::new("only", 0.)), rect, true);

        assert_eq!(1, r.len());
        assert_eq!(rect, r.placements[0].rect);
        assert_eq!(0, r.placements[0].depth);
    }

    #[test]
    fn test_zero_weight_internal_emits_nothing() {
        let node = LayoutNode::internal(None, leaves(&[0., 0.]));
        let r = partition(&node, Rect::from_size(10., 10.).unwrap(), true);
        assert!(r.is_empty());

        let node = LayoutNode::internal(None, vec![]);
        assert!(partition(&node, Rect::from_size(10., 10.).unwrap(), true).is_empty());
    }

    #[test]
    fn test_single_child_flips_orientation() {
        // root -> group -> [a, b] : the group gets the whole rect with a flipped orientation
        let group = LayoutNode::internal(Some("g".to_string()), leaves(&[1., 1.]));
        let root = LayoutNode::internal(None, vec![group]);

        let r = partition(&root, Rect::from_size(10., 10.).unwrap(), true);

        assert_eq!(Rect::new(0., 0., 10., 5.).unwrap(), r.placements[0].rect);
        assert_eq!(Rect::new(0., 5., 10., 10.).unwrap(), r.placements[1].rect);
        assert_eq!(2, r.placements[0].depth);
    }

    #[test]
    fn test_branch_tracks_root_child() {
        let g0 = LayoutNode::internal(Some("g0".to_string()), leaves(&[1., 1.]));
        let g1 = LayoutNode::internal(Some("g1".to_string()), leaves(&[1.]));
        let g2 = LayoutNode::internal(Some("g2".to_string()), leaves(&[2., 3.]));
        let root = LayoutNode::internal(None, vec![g0, g1, g2]);

        let r = partition(&root, Rect::from_size(100., 100.).unwrap(), true);

        let branches: Vec<usize> = r.iter().map(|p| p.branch).collect();
        assert_eq!(vec![0, 0, 1, 2, 2], branches);
        assert!(r.iter().all(|p| p.depth == 2));
    }
}
