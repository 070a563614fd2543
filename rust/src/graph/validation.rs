//! Opt-in catalog integrity checks.
//!
//! The derivations never call these; they silently drop dangling references
//! and exclude cyclic courses. Callers that care about data integrity can
//! surface the same problems as a report or an error.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::CurriculumError;
use crate::models::{Course, CourseId, Edge};

use super::edges::{build_edges, plan_code_index};
use super::index::CourseGraph;
use super::topology::topological_order;

/// Integrity problems found in a course catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    /// (course id, correlative code) pairs whose code matches no course.
    pub dangling: Vec<(CourseId, String)>,
    /// Plan codes carried by more than one course.
    pub duplicate_plan_codes: Vec<String>,
    /// Courses that can never be ordered because of a cycle upstream.
    pub cycle_members: Vec<CourseId>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty()
            && self.duplicate_plan_codes.is_empty()
            && self.cycle_members.is_empty()
    }
}

/// Inspect a catalog for dangling references, duplicate plan codes and cycles.
pub fn validate_catalog(courses: &[Course]) -> CatalogReport {
    let code_to_id = plan_code_index(courses);

    let dangling = courses
        .iter()
        .flat_map(|c| {
            c.correlative_ids
                .iter()
                .filter(|code| !code_to_id.contains_key(code.as_str()))
                .map(|code| (c.id.clone(), code.clone()))
        })
        .collect();

    let mut code_counts: FxHashMap<&str, usize> = FxHashMap::default();
    for course in courses {
        *code_counts.entry(course.plan_code.as_str()).or_default() += 1;
    }
    let mut reported: FxHashSet<&str> = FxHashSet::default();
    let duplicate_plan_codes = courses
        .iter()
        .map(|c| c.plan_code.as_str())
        .filter(|&code| code_counts[code] > 1 && reported.insert(code))
        .map(str::to_string)
        .collect();

    let edges = build_edges(courses);
    let cycle_members = unresolved_ids(courses, &edges);

    CatalogReport {
        dangling,
        duplicate_plan_codes,
        cycle_members,
    }
}

/// Fail with [`CurriculumError::CircularDependency`] if any course cannot be
/// topologically ordered.
pub fn ensure_acyclic(courses: &[Course], edges: &[Edge]) -> Result<(), CurriculumError> {
    let unresolved = unresolved_ids(courses, edges);
    if unresolved.is_empty() {
        Ok(())
    } else {
        Err(CurriculumError::CircularDependency(unresolved))
    }
}

fn unresolved_ids(courses: &[Course], edges: &[Edge]) -> Vec<CourseId> {
    let graph = CourseGraph::new(courses, edges);
    topological_order(&graph)
        .unresolved
        .iter()
        .map(|&slot| graph.id(slot).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseStatus;

    fn course(id: &str, code: &str, reqs: &[&str]) -> Course {
        Course::new(
            id,
            code,
            id,
            1,
            CourseStatus::Pending,
            reqs.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_clean_catalog() {
        let courses = vec![course("a", "1", &[]), course("b", "2", &["1"])];
        let report = validate_catalog(&courses);
        assert!(report.is_clean());
        assert!(ensure_acyclic(&courses, &build_edges(&courses)).is_ok());
    }

    #[test]
    fn test_reports_each_problem() {
        let courses = vec![
            course("a", "1", &["3"]),
            course("b", "2", &["1", "404"]),
            course("c", "3", &["2"]),
            course("d", "4", &[]),
            course("e", "4", &[]),
        ];
        let report = validate_catalog(&courses);

        assert_eq!(report.dangling, vec![("b".to_string(), "404".to_string())]);
        assert_eq!(report.duplicate_plan_codes, vec!["4".to_string()]);
        assert_eq!(
            report.cycle_members,
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn test_ensure_acyclic_error() {
        let courses = vec![course("a", "1", &["2"]), course("b", "2", &["1"])];
        let err = ensure_acyclic(&courses, &build_edges(&courses)).unwrap_err();
        assert_eq!(
            err,
            CurriculumError::CircularDependency(vec!["a".to_string(), "b".to_string()])
        );
    }
}
