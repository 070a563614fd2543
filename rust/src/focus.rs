//! Hover/unlock analysis for a focal course.
//!
//! Purely advisory data for highlighting; it never affects status or scoring.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::{HashSet, VecDeque};

use crate::models::{CourseId, Edge};

/// Direct prerequisite and dependent maps derived from an edge set.
#[derive(Debug, Clone, Default)]
pub struct RelationMaps<'a> {
    /// course -> direct prerequisites
    pub parent_map: FxHashMap<&'a str, FxHashSet<&'a str>>,
    /// course -> direct dependents
    pub child_map: FxHashMap<&'a str, FxHashSet<&'a str>>,
}

impl<'a> RelationMaps<'a> {
    pub fn from_edges(edges: &'a [Edge]) -> Self {
        let mut maps = Self::default();
        for edge in edges {
            maps.parent_map
                .entry(edge.to.as_str())
                .or_default()
                .insert(edge.from.as_str());
            maps.child_map
                .entry(edge.from.as_str())
                .or_default()
                .insert(edge.to.as_str());
        }
        maps
    }

    /// All direct and indirect prerequisites of `course_id`, excluding itself.
    pub fn ancestors(&self, course_id: &str) -> FxHashSet<&'a str> {
        let mut visited: FxHashSet<&'a str> = FxHashSet::default();
        let mut queue: VecDeque<&'a str> = VecDeque::new();

        if let Some(parents) = self.parent_map.get(course_id) {
            queue.extend(parents.iter().copied());
        }

        while let Some(id) = queue.pop_front() {
            if id == course_id || !visited.insert(id) {
                continue;
            }
            if let Some(parents) = self.parent_map.get(id) {
                queue.extend(parents.iter().copied().filter(|p| !visited.contains(p)));
            }
        }

        visited
    }
}

// Note: std HashSet here for PyO3 interface compatibility

/// Highlighting data for a focal course.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusAnalysis {
    /// Every course that must be completed before the focal course.
    #[cfg_attr(feature = "python", pyo3(get))]
    pub ancestors: HashSet<CourseId>,
    /// Direct dependents whose only prerequisite is the focal course.
    #[cfg_attr(feature = "python", pyo3(get))]
    pub fully_unlocked: HashSet<CourseId>,
    /// Direct dependents that also need other prerequisites.
    #[cfg_attr(feature = "python", pyo3(get))]
    pub partially_unlocked: HashSet<CourseId>,
}

#[cfg(feature = "python")]
#[pymethods]
impl FocusAnalysis {
    fn __repr__(&self) -> String {
        format!(
            "FocusAnalysis(ancestors={}, fully_unlocked={}, partially_unlocked={})",
            self.ancestors.len(),
            self.fully_unlocked.len(),
            self.partially_unlocked.len()
        )
    }
}

/// Classify the ancestors and direct dependents of `focal_id`.
///
/// Dependents are classified one hop only.
pub fn analyze_focus(edges: &[Edge], focal_id: &str) -> FocusAnalysis {
    analyze_with_maps(&RelationMaps::from_edges(edges), focal_id)
}

/// Same as [`analyze_focus`] over maps built once for many hover events.
pub fn analyze_with_maps(maps: &RelationMaps<'_>, focal_id: &str) -> FocusAnalysis {
    let ancestors = maps
        .ancestors(focal_id)
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut fully_unlocked = HashSet::new();
    let mut partially_unlocked = HashSet::new();

    if let Some(children) = maps.child_map.get(focal_id) {
        for &child in children {
            let prerequisite_count = maps.parent_map.get(child).map_or(0, |p| p.len());
            if prerequisite_count <= 1 {
                fully_unlocked.insert(child.to_string());
            } else {
                partially_unlocked.insert(child.to_string());
            }
        }
    }

    FocusAnalysis {
        ancestors,
        fully_unlocked,
        partially_unlocked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn catalog_edges() -> Vec<Edge> {
        // a -> d, b -> d, d -> e, c -> a
        vec![
            Edge::new("a", "d"),
            Edge::new("b", "d"),
            Edge::new("d", "e"),
            Edge::new("c", "a"),
        ]
    }

    #[test]
    fn test_partially_unlocked() {
        let analysis = analyze_focus(&catalog_edges(), "a");
        assert_eq!(analysis.partially_unlocked, set(&["d"]));
        assert!(analysis.fully_unlocked.is_empty());
        assert_eq!(analysis.ancestors, set(&["c"]));
    }

    #[test]
    fn test_fully_unlocked() {
        let analysis = analyze_focus(&catalog_edges(), "d");
        assert_eq!(analysis.fully_unlocked, set(&["e"]));
        assert!(analysis.partially_unlocked.is_empty());
    }

    #[test]
    fn test_transitive_ancestors() {
        let analysis = analyze_focus(&catalog_edges(), "e");
        assert_eq!(analysis.ancestors, set(&["a", "b", "c", "d"]));
        assert!(analysis.fully_unlocked.is_empty());
    }

    #[test]
    fn test_one_hop_only() {
        let analysis = analyze_focus(&catalog_edges(), "c");
        assert_eq!(analysis.fully_unlocked, set(&["a"]));
        assert!(!analysis.fully_unlocked.contains("d"));
        assert!(!analysis.partially_unlocked.contains("d"));
    }

    #[test]
    fn test_unknown_focus_and_cycles() {
        assert_eq!(analyze_focus(&catalog_edges(), "zzz"), FocusAnalysis::default());

        let cyclic = vec![Edge::new("x", "y"), Edge::new("y", "x")];
        let analysis = analyze_focus(&cyclic, "x");
        assert_eq!(analysis.ancestors, set(&["y"]));
    }

    #[test]
    fn test_reused_maps() {
        let edges = catalog_edges();
        let maps = RelationMaps::from_edges(&edges);
        assert_eq!(analyze_with_maps(&maps, "a"), analyze_focus(&edges, "a"));
        assert_eq!(maps.child_map["a"].len(), 1);
    }
}
