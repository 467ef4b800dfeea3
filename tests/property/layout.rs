// tests/property/layout.rs

use std::collections::HashSet;

use proptest::prelude::*;
use taskgrid::graph::annotate;
use taskgrid::layout::normalize_columns;
use taskgrid::types::GridPos;
use taskgrid::{compute_layout, Node};
use taskgrid_test_utils::builders::NodeBuilder;

// Strategy to generate an acyclic task set rooted at task_0.
// We ensure acyclicity by only allowing task N to require tasks N+1.. ; some
// tasks also get a dangling dependency, and some are unreachable from the root.
fn task_set_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<Node>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..4),
            num_tasks,
        );
        let closed_strat = proptest::collection::vec(any::<bool>(), num_tasks);
        let dangling_strat = proptest::collection::vec(any::<bool>(), num_tasks);

        (deps_strat, closed_strat, dangling_strat).prop_map(move |(raw_deps, closed, dangling)| {
            raw_deps
                .into_iter()
                .enumerate()
                .map(|(i, potential_deps)| {
                    let mut builder = NodeBuilder::new(&format!("task_{i}")).closed(closed[i]);
                    let remaining = num_tasks - i - 1;
                    for dep in potential_deps {
                        if remaining > 0 {
                            builder = builder.requires(&format!("task_{}", i + 1 + dep % remaining));
                        }
                    }
                    if dangling[i] {
                        builder = builder.requires(&format!("ghost_{i}"));
                    }
                    builder.build()
                })
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn every_reachable_task_gets_one_distinct_cell(
        nodes in task_set_strategy(14),
        columns in 0usize..10,
    ) {
        let graph = annotate(&nodes, "task_0").unwrap();
        let layout = compute_layout(&nodes, "task_0", columns).unwrap();

        prop_assert_eq!(layout.columns(), normalize_columns(columns));
        prop_assert_eq!(layout.len(), graph.reachable_count());

        let mut cells: HashSet<GridPos> = HashSet::new();
        for alloc in layout.allocations() {
            prop_assert!(graph.get(&alloc.id).unwrap().is_reachable());
            prop_assert!(alloc.x >= 0 && (alloc.x as usize) < layout.columns());
            prop_assert!(alloc.y >= 0);
            prop_assert!(cells.insert(alloc.pos()), "cell {} used twice", alloc.pos());
        }
    }

    #[test]
    fn root_is_alone_in_top_row_centre(
        nodes in task_set_strategy(14),
        columns in 0usize..10,
    ) {
        let layout = compute_layout(&nodes, "task_0", columns).unwrap();
        let cols = layout.columns() as i32;

        let first = &layout.allocations()[0];
        prop_assert_eq!(first.id.as_str(), "task_0");
        prop_assert_eq!(first.pos(), GridPos::new(cols / 2, 0));
        prop_assert!(layout.allocations()[1..].iter().all(|a| a.y > 0));
    }

    #[test]
    fn every_task_sits_below_some_dependent(
        nodes in task_set_strategy(14),
        columns in 0usize..10,
    ) {
        let graph = annotate(&nodes, "task_0").unwrap();
        let layout = compute_layout(&nodes, "task_0", columns).unwrap();

        for alloc in &layout.allocations()[1..] {
            let node = graph.get(&alloc.id).unwrap();
            let above = node
                .required_by
                .iter()
                .filter_map(|id| layout.get(id))
                .any(|dependent| dependent.y < alloc.y);
            prop_assert!(above, "{} has no placed dependent above it", alloc.id);
        }
    }

    #[test]
    fn depth_is_one_more_than_deepest_dependency(nodes in task_set_strategy(14)) {
        let graph = annotate(&nodes, "task_0").unwrap();

        for node in graph.iter().filter(|n| n.is_reachable()) {
            let deps: Vec<u32> = node
                .node
                .requires
                .iter()
                .filter_map(|id| graph.get(id))
                .filter_map(|dep| dep.depth())
                .collect();

            let expected_depth = deps.iter().max().map_or(0, |d| d + 1);
            prop_assert_eq!(node.depth(), Some(expected_depth));

            for dep in &deps {
                prop_assert!(node.depth().unwrap() > *dep);
            }
        }
    }

    #[test]
    fn active_means_some_closed_leaf_below(nodes in task_set_strategy(14)) {
        let graph = annotate(&nodes, "task_0").unwrap();

        for node in graph.iter().filter(|n| n.is_reachable()) {
            let deps: Vec<_> = node.node.requires.iter().filter_map(|id| graph.get(id)).collect();
            let expected = if deps.is_empty() {
                node.node.closed
            } else {
                deps.iter().any(|d| d.is_active())
            };
            prop_assert_eq!(node.is_active(), expected, "active mismatch for {}", node.id());
        }
    }

    #[test]
    fn layout_is_reproducible(
        nodes in task_set_strategy(14),
        columns in 0usize..10,
    ) {
        let first = compute_layout(&nodes, "task_0", columns).unwrap();
        let second = compute_layout(&nodes, "task_0", columns).unwrap();
        prop_assert_eq!(first.allocations(), second.allocations());
    }
}
