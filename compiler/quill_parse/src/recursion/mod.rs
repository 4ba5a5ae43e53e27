//! Left-recursion detection.
//!
//! A recursive-descent matcher recurses into the leftmost symbol of a rule
//! before consuming anything, so a non-terminal that can reach itself in
//! leftmost position never terminates. The checker builds the graph with
//! an edge `A -> B` whenever `B` can be the leftmost non-terminal of some
//! alternative of `A`, looking past leading clauses that can match empty
//! input, and reports every elementary cycle in it.

use quill_ir::{ParserConfiguration, TokenKind};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Check `configuration` for left recursion.
///
/// Returns whether any cycle exists and every elementary cycle, each
/// starting and ending with the same non-terminal (`["a", "b", "a"]`).
/// Cycles are reported from their earliest-declared member, in
/// declaration order.
pub fn check_left_recursion<K: TokenKind, OUT>(
    configuration: &ParserConfiguration<K, OUT>,
) -> (bool, Vec<Vec<String>>) {
    let names: Vec<&str> = configuration
        .non_terminals()
        .map(|nt| nt.name.as_str())
        .collect();
    let graph = leftmost_graph(configuration);
    let cycles: Vec<Vec<String>> = elementary_cycles(&graph)
        .into_iter()
        .map(|cycle| cycle.into_iter().map(|i| names[i].to_string()).collect())
        .collect();

    if !cycles.is_empty() {
        debug!(cycles = cycles.len(), "left recursion found");
    }
    (!cycles.is_empty(), cycles)
}

/// Render cycles as `a > b > a`, one per line.
pub fn render_cycles(cycles: &[Vec<String>]) -> String {
    cycles
        .iter()
        .map(|cycle| cycle.join(" > "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Non-terminals that can match empty input, computed to a fixpoint.
pub fn nullable_non_terminals<K: TokenKind, OUT>(
    configuration: &ParserConfiguration<K, OUT>,
) -> FxHashSet<String> {
    let mut nullable: FxHashSet<String> = FxHashSet::default();
    loop {
        let mut changed = false;
        for nt in configuration.non_terminals() {
            if nullable.contains(&nt.name) {
                continue;
            }
            if nt.can_derive_empty(&|name: &str| nullable.contains(name)) {
                nullable.insert(nt.name.clone());
                changed = true;
            }
        }
        if !changed {
            return nullable;
        }
    }
}

/// Adjacency lists by declaration index, edges deduplicated in first-seen
/// order. References to undefined non-terminals have no edge.
fn leftmost_graph<K: TokenKind, OUT>(configuration: &ParserConfiguration<K, OUT>) -> Vec<Vec<usize>> {
    let nullable = nullable_non_terminals(configuration);
    let is_nullable = |name: &str| nullable.contains(name);

    configuration
        .non_terminals()
        .map(|nt| {
            let mut edges = Vec::new();
            for rule in &nt.rules {
                for target in rule.leftmost_references(&is_nullable) {
                    if let Some(index) = configuration.index_of(target) {
                        if !edges.contains(&index) {
                            edges.push(index);
                        }
                    }
                }
            }
            edges
        })
        .collect()
}

/// Every elementary cycle of `graph`.
///
/// For each start node `s`, a depth-first search with an explicit stack
/// follows only nodes after `s`, so each cycle is found once, from its
/// lowest-index member.
fn elementary_cycles(graph: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut cycles = Vec::new();
    let mut on_path = vec![false; graph.len()];

    for start in 0..graph.len() {
        let mut path = vec![start];
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        on_path[start] = true;

        while let Some(&(node, next_edge)) = stack.last() {
            let Some(&target) = graph[node].get(next_edge) else {
                stack.pop();
                if let Some(done) = path.pop() {
                    on_path[done] = false;
                }
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            if target == start {
                let mut cycle = path.clone();
                cycle.push(start);
                cycles.push(cycle);
            } else if target > start && !on_path[target] {
                on_path[target] = true;
                path.push(target);
                stack.push((target, 0));
            }
        }
    }
    cycles
}
