//! Index-based course graph.

use crate::interner::{CourseIdInterner, CourseSlot};
use crate::models::{Course, Edge};

/// Course graph with interned ids and vector adjacency.
///
/// Slots follow course input order, so iteration over slots is
/// deterministic. Edges whose endpoints are not in the course set are ignored,
/// as are repeated edges.
#[derive(Debug, Clone, Default)]
pub struct CourseGraph {
    pub index: CourseIdInterner,
    /// Direct prerequisites per slot.
    pub prerequisites: Vec<Vec<CourseSlot>>,
    /// Direct dependents per slot, in edge order.
    pub dependents: Vec<Vec<CourseSlot>>,
    edge_count: usize,
}

impl CourseGraph {
    pub fn new(courses: &[Course], edges: &[Edge]) -> Self {
        let mut index = CourseIdInterner::with_capacity(courses.len());
        for course in courses {
            index.intern(&course.id);
        }

        let n = index.len();
        let mut prerequisites: Vec<Vec<CourseSlot>> = vec![Vec::new(); n];
        let mut dependents: Vec<Vec<CourseSlot>> = vec![Vec::new(); n];
        let mut edge_count = 0;

        for edge in edges {
            let (Some(from), Some(to)) = (index.get(&edge.from), index.get(&edge.to)) else {
                continue;
            };
            if dependents[from as usize].contains(&to) {
                continue;
            }
            dependents[from as usize].push(to);
            prerequisites[to as usize].push(from);
            edge_count += 1;
        }

        Self {
            index,
            prerequisites,
            dependents,
            edge_count,
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of courses that directly require this one.
    #[inline]
    pub fn unlock_count(&self, slot: CourseSlot) -> usize {
        self.dependents[slot as usize].len()
    }

    #[inline]
    pub fn id(&self, slot: CourseSlot) -> &str {
        self.index.resolve(slot).unwrap_or_default()
    }

    pub fn slots(&self) -> impl Iterator<Item = CourseSlot> {
        0..self.len() as CourseSlot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseStatus;

    fn course(id: &str) -> Course {
        Course::new(id, id, id, 1, CourseStatus::Pending, vec![])
    }

    #[test]
    fn test_adjacency() {
        let courses = vec![course("a"), course("b"), course("c")];
        let edges = vec![Edge::new("a", "b"), Edge::new("a", "c"), Edge::new("b", "c")];
        let graph = CourseGraph::new(&courses, &edges);

        let a = graph.index.get("a").unwrap();
        let c = graph.index.get("c").unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.unlock_count(a), 2);
        assert_eq!(graph.prerequisites[c as usize].len(), 2);
        assert_eq!(graph.id(a), "a");
    }

    #[test]
    fn test_foreign_and_repeated_edges_ignored() {
        let courses = vec![course("a"), course("b")];
        let edges = vec![
            Edge::new("a", "b"),
            Edge::new("a", "b"),
            Edge::new("a", "ghost"),
            Edge::new("ghost", "b"),
        ];
        let graph = CourseGraph::new(&courses, &edges);
        assert_eq!(graph.edge_count(), 1);
    }
}
