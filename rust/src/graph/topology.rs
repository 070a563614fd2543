//! Topological ordering and longest remaining chain per course.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;

use crate::interner::CourseSlot;
use crate::models::{Course, CourseId, Edge};

use super::index::CourseGraph;

/// Result of Kahn's algorithm over a course graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologicalOrder {
    /// Slots in dependency order (prerequisites before dependents).
    pub order: Vec<CourseSlot>,
    /// Slots that never reached indegree zero (members of, or downstream of, a cycle).
    pub unresolved: Vec<CourseSlot>,
}

impl TopologicalOrder {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Perform a topological sort using Kahn's algorithm.
///
/// Courses caught in a cycle keep a positive indegree and are reported in
/// `unresolved` instead of `order`.
pub fn topological_order(graph: &CourseGraph) -> TopologicalOrder {
    let mut in_degree: Vec<usize> = graph.prerequisites.iter().map(|p| p.len()).collect();

    let mut queue: VecDeque<CourseSlot> = graph
        .slots()
        .filter(|&slot| in_degree[slot as usize] == 0)
        .collect();

    let mut order = Vec::with_capacity(graph.len());

    while let Some(slot) = queue.pop_front() {
        order.push(slot);

        for &next in &graph.dependents[slot as usize] {
            let degree = &mut in_degree[next as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(next);
            }
        }
    }

    let unresolved = graph
        .slots()
        .filter(|&slot| in_degree[slot as usize] > 0)
        .collect();

    TopologicalOrder { order, unresolved }
}

/// Longest chain of dependents ahead of each slot, indexed by slot.
///
/// Sinks get 0. Unresolved slots keep 0 and do not extend the chain of any
/// prerequisite pointing at them.
pub fn distances_by_slot(graph: &CourseGraph, topo: &TopologicalOrder) -> Vec<u32> {
    let mut distance = vec![0u32; graph.len()];
    let mut ordered = vec![false; graph.len()];
    for &slot in &topo.order {
        ordered[slot as usize] = true;
    }

    for &slot in topo.order.iter().rev() {
        distance[slot as usize] = graph.dependents[slot as usize]
            .iter()
            .filter(|&&next| ordered[next as usize])
            .map(|&next| distance[next as usize])
            .max()
            .map_or(0, |d| d + 1);
    }

    distance
}

/// Compute, per course, how many more sequential courses depend on it.
///
/// Every course in `courses` is present in the result. Courses that sit in a
/// cycle are excluded from the ordering and get distance 0.
pub fn compute_distance_to_sink(courses: &[Course], edges: &[Edge]) -> FxHashMap<CourseId, u32> {
    let graph = CourseGraph::new(courses, edges);
    let topo = topological_order(&graph);
    let distance = distances_by_slot(&graph, &topo);

    graph
        .slots()
        .map(|slot| (graph.id(slot).to_string(), distance[slot as usize]))
        .collect()
}
