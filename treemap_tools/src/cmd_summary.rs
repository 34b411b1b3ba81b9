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
use anyhow::Result;
use itertools::Itertools;
use structopt::StructOpt;

use treemap_util::layout::{group_by_field, Item};
use treemap_util::util::format_size;

use crate::input_args::InputArgs;

#[derive(StructOpt)]
pub struct SummaryArgs {
    #[structopt(flatten)]
    pub(crate) input: InputArgs,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub group: String,
    pub count: usize,
    pub total_weight: f64,
}

///
/// Count and total weight of the positive items of each group, groups in first seen order
pub fn summarize(items: &[Item]) -> Vec<GroupSummary> {
    let kept = items.iter().filter(|i| i.has_layout_weight()).collect_vec();

    kept.iter()
        .map(|i| group_by_field(i))
        .unique()
        .map(|group| {
            let members = kept.iter().filter(|i| group_by_field(i) == group).collect_vec();
            GroupSummary {
                count: members.len(),
                total_weight: members.iter().map(|i| i.weight).sum(),
                group,
            }
        })
        .collect()
}

pub fn print_summary(args: &SummaryArgs) -> Result<()> {
    let items = args.input.read_items()?;
    let summaries = summarize(&items);

    let fmt_weight = |w: f64| if args.input.inventory { format_size(w) } else { format!("{}", w) };

    for s in summaries.iter() {
        println!("{}\t{} items\t{}", s.group, s.count, fmt_weight(s.total_weight));
    }

    let total: f64 = summaries.iter().map(|s| s.total_weight).sum();
    let count: usize = summaries.iter().map(|s| s.count).sum();
    println!("Total\t{} items\t{}", count, fmt_weight(total));

    if count < items.len() {
        println!("Ignored {} items without a positive size", items.len() - count);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        let items = vec![
            Item::new("shp", 10.).with_group("W:/b"),
            Item::new("tif", 5.).with_group("W:/a"),
            Item::new("shp", 1.).with_group("W:/b"),
            Item::new("gpkg", 0.).with_group("W:/c"),
            Item::new("csv", 2.),
        ];

        let s = summarize(&items);

        assert_eq!(vec![
            GroupSummary { group: "W:/b".to_string(), count: 2, total_weight: 11. },
            GroupSummary { group: "W:/a".to_string(), count: 1, total_weight: 5. },
            GroupSummary { group: "".to_string(), count: 1, total_weight: 2. },
        ], s);

        assert!(summarize(&[]).is_empty());
    }
}
