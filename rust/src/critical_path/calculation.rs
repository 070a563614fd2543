//! Critical path extraction over longest-path distances.

use rustc_hash::FxHashMap;

use crate::graph::{distances_by_slot, topological_order, CourseGraph, TopologicalOrder};
use crate::interner::CourseSlot;
use crate::log_debug;
use crate::models::{Course, CourseId, Edge};

use super::types::CriticalPath;

/// Pre-computed graph, ordering and distances for one course snapshot.
///
/// Build this once and reuse it for the critical path and for scoring.
#[derive(Debug, Clone)]
pub struct PathAnalysis {
    pub graph: CourseGraph,
    pub topo: TopologicalOrder,
    /// Distance-to-sink indexed by slot.
    pub distance: Vec<u32>,
    ordered: Vec<bool>,
}

impl PathAnalysis {
    pub fn new(courses: &[Course], edges: &[Edge]) -> Self {
        let graph = CourseGraph::new(courses, edges);
        let topo = topological_order(&graph);
        let distance = distances_by_slot(&graph, &topo);

        let mut ordered = vec![false; graph.len()];
        for &slot in &topo.order {
            ordered[slot as usize] = true;
        }

        Self {
            graph,
            topo,
            distance,
            ordered,
        }
    }

    /// Distance-to-sink of a course (0 for unknown ids).
    pub fn distance_of(&self, course_id: &str) -> u32 {
        self.graph
            .index
            .get(course_id)
            .map_or(0, |slot| self.distance[slot as usize])
    }

    /// Longest distance-to-sink across the snapshot.
    pub fn critical_length(&self) -> u32 {
        self.distance.iter().copied().max().unwrap_or(0)
    }

    pub fn distances(&self) -> FxHashMap<CourseId, u32> {
        self.graph
            .slots()
            .map(|slot| (self.graph.id(slot).to_string(), self.distance[slot as usize]))
            .collect()
    }

    /// Pick the candidate with the most direct dependents; earlier slots win ties.
    fn best_by_unlock_count(&self, candidates: impl Iterator<Item = CourseSlot>) -> Option<CourseSlot> {
        candidates.fold(None, |best, slot| match best {
            Some(b) if self.graph.unlock_count(slot) <= self.graph.unlock_count(b) => Some(b),
            _ => Some(slot),
        })
    }

    /// Walk the longest chain greedily, preferring courses that gate the most
    /// subsequent options at every step.
    pub fn critical_path(&self, verbosity: u8) -> CriticalPath {
        let length = self.critical_length();
        if self.graph.edge_count() == 0 || length == 0 {
            return CriticalPath::default();
        }

        let Some(start) = self.best_by_unlock_count(
            self.graph
                .slots()
                .filter(|&slot| self.distance[slot as usize] == length),
        ) else {
            return CriticalPath::default();
        };

        log_debug!(
            verbosity,
            "critical path: length {}, starting at {}",
            length,
            self.graph.id(start)
        );

        let mut result = CriticalPath {
            length,
            ..CriticalPath::default()
        };
        result.node_ids.insert(self.graph.id(start).to_string());
        result.path.push(self.graph.id(start).to_string());

        let mut current = start;
        loop {
            let current_distance = self.distance[current as usize];
            if current_distance == 0 {
                break;
            }
            let next = self.best_by_unlock_count(
                self.graph.dependents[current as usize]
                    .iter()
                    .copied()
                    .filter(|&n| {
                        self.ordered[n as usize] && self.distance[n as usize] == current_distance - 1
                    }),
            );
            let Some(next) = next else {
                break;
            };

            let edge = Edge::new(self.graph.id(current), self.graph.id(next));
            log_debug!(verbosity, "critical path: {}", edge.id());
            result.edge_ids.insert(edge.id());
            result.node_ids.insert(edge.to.clone());
            result.path.push(edge.to);
            current = next;
        }

        result
    }
}

/// Select the single longest, most structurally important remaining chain.
///
/// Returns empty sets when the graph has no edges.
pub fn get_critical_path(courses: &[Course], edges: &[Edge]) -> CriticalPath {
    PathAnalysis::new(courses, edges).critical_path(0)
}
