//! Prerequisite edge construction.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::{Course, Edge};

/// Map each plan code to the id of the course carrying it.
///
/// When two courses share a plan code the later one wins.
pub fn plan_code_index(courses: &[Course]) -> FxHashMap<&str, &str> {
    courses
        .iter()
        .map(|c| (c.plan_code.as_str(), c.id.as_str()))
        .collect()
}

/// Build the prerequisite edge set from each course's correlative codes.
///
/// Emits `(required_id, course_id)` for every correlative code that resolves
/// to a course in `courses`; unresolvable codes are dropped. A correlative
/// listed twice on the same course produces a single edge. Output order is
/// course order, then correlative order.
pub fn build_edges(courses: &[Course]) -> Vec<Edge> {
    let code_to_id = plan_code_index(courses);
    let mut seen: FxHashSet<(&str, &str)> = FxHashSet::default();
    let mut edges = Vec::new();

    for course in courses {
        for code in &course.correlative_ids {
            let Some(&required_id) = code_to_id.get(code.as_str()) else {
                continue;
            };
            if seen.insert((required_id, course.id.as_str())) {
                edges.push(Edge::new(required_id, course.id.as_str()));
            }
        }
    }

    edges
}
