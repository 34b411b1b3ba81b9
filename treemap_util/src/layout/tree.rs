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

use crate::layout::Item;

/// Maps an item to the label of the parent it is aggregated under
pub type GroupKeyFn<'a> = &'a dyn Fn(&Item) -> String;

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutNode {
    Leaf(Item),
    Internal {
        label: Option<String>,
        children: Vec<LayoutNode>,
        /// Sum of the descendant leaf weights
        weight: f64,
    },
}

impl LayoutNode {
    pub fn internal(label: Option<String>, children: Vec<LayoutNode>) -> Self {
        let weight = children.iter().map(|c| c.weight()).sum();
        LayoutNode::Internal {
            label,
            children,
            weight,
        }
    }

    pub fn weight(&self) -> f64 {
        match self {
            LayoutNode::Leaf(item) => item.weight,
            LayoutNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn children(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::Leaf(_) => &[],
            LayoutNode::Internal { children, .. } => children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, LayoutNode::Leaf(_))
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            LayoutNode::Leaf(_) => 1,
            LayoutNode::Internal { children, .. } => children.iter().map(|c| c.leaf_count()).sum(),
        }
    }

    ///
    /// Reorders children of every internal node by descending weight.  The sort is stable so
    /// equal weights keep their input order.
    pub fn sort_by_weight(&mut self) {
        if let LayoutNode::Internal { children, .. } = self {
            children.sort_by(|a, b| b.weight().total_cmp(&a.weight()));
            for child in children.iter_mut() {
                child.sort_by_weight();
            }
        }
    }
}

struct GroupAccumulator {
    label: String,
    leaves: Vec<Item>,
    leaf_index: HashMap<String, usize>,
}

impl GroupAccumulator {
    fn new(label: String) -> Self {
        GroupAccumulator {
            label,
            leaves: Vec::new(),
            leaf_index: HashMap::new(),
        }
    }

    /// Items sharing a label within the group are merged, weights summed
    fn add(&mut self, item: &Item) {
        if let Some(&idx) = self.leaf_index.get(&item.label) {
            self.leaves[idx].weight += item.weight;
            return;
        }

        self.leaf_index.insert(item.label.clone(), self.leaves.len());
        self.leaves.push(Item {
            label: item.label.clone(),
            weight: item.weight,
            group: Some(self.label.clone()).filter(|g| !g.is_empty()),
        });
    }

    fn into_node(self) -> LayoutNode {
        let children = self.leaves.into_iter().map(LayoutNode::Leaf).collect();
        LayoutNode::internal(Some(self.label), children)
    }
}

///
/// Builds a one level tree (no group key) or a two level tree (root -> group -> leaf).
///
/// Items without a positive finite weight are dropped first.  Groups and the leaves inside
/// them keep the order in which they were first seen.  If everything is dropped the root has
/// no children and a weight of 0.
pub fn build_tree(items: &[Item], group_key: Option<GroupKeyFn>) -> LayoutNode {
    let kept = items.iter().filter(|i| i.has_layout_weight());

    let key_fn = match group_key {
        None => {
            let children = kept.cloned().map(LayoutNode::Leaf).collect();
            return LayoutNode::internal(None, children);
        }
        Some(f) => f,
    };

    let mut groups: Vec<GroupAccumulator> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();

    for item in kept {
        let key = key_fn(item);
        let idx = match group_index.get(&key) {
            Some(&idx) => idx,
            None => {
                group_index.insert(key.clone(), groups.len());
                groups.push(GroupAccumulator::new(key));
                groups.len() - 1
            }
        };
        groups[idx].add(item);
    }

    let children = groups
        .into_iter()
        .map(GroupAccumulator::into_node)
        .filter(|g| g.weight() > 0.)
        .collect();

    LayoutNode::internal(None, children)
}
