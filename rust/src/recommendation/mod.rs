//! Recommendation scoring for currently takeable courses.
//!
//! Two variants share one spine (filter, score, sort, truncate):
//! - [`get_recommendations`]: every AVAILABLE course, distance plus the
//!   critical-path bonus.
//! - [`get_reasoned_recommendations`]: additionally requires every correlative
//!   to be APPROVED (when configured), adds capstone and intermediate-degree
//!   bonuses, and records why each bonus was applied.
//!
//! "Takeable" (the availability pass) and "worth recommending now" are
//! intentionally different: the stricter filter is not an availability rule.

mod scoring;
mod sorting;

#[cfg(feature = "python")]
use pyo3::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::RecommendationConfig;
use crate::critical_path::{CriticalPath, PathAnalysis};
use crate::models::{Course, CourseId, CourseStatus, Edge};
use crate::{log_changes, log_checks};

pub use scoring::{score_course, unlocks_capstone, Capstone, ScoreBreakdown};
pub use sorting::RankKey;

/// A recommended course with its score and the reasons behind it.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    #[cfg_attr(feature = "python", pyo3(get))]
    pub course: Course,
    #[cfg_attr(feature = "python", pyo3(get))]
    pub score: u32,
    #[cfg_attr(feature = "python", pyo3(get))]
    pub reasons: Vec<String>,
}

#[cfg(feature = "python")]
#[pymethods]
impl Recommendation {
    fn __repr__(&self) -> String {
        format!(
            "Recommendation(course={:?}, score={}, reasons={})",
            self.course.id,
            self.score,
            self.reasons.len()
        )
    }
}

/// Whether every correlative of `course` resolves to an APPROVED course.
fn correlatives_approved(course: &Course, status_by_code: &FxHashMap<&str, CourseStatus>) -> bool {
    course.correlative_ids.iter().all(|code| {
        status_by_code
            .get(code.as_str())
            .is_some_and(|&status| status == CourseStatus::Approved)
    })
}

/// Rank candidates against a pre-computed analysis and critical path.
///
/// Never returns a course that is not AVAILABLE, never more than
/// `desired_count`, and never the same course id twice.
pub fn rank_with_analysis(
    courses: &[Course],
    analysis: &PathAnalysis,
    critical: &CriticalPath,
    desired_count: usize,
    excluded: &FxHashSet<CourseId>,
    config: &RecommendationConfig,
) -> Vec<Recommendation> {
    if desired_count == 0 {
        return Vec::new();
    }

    let verbosity = config.verbosity;
    let status_by_code: FxHashMap<&str, CourseStatus> = courses
        .iter()
        .map(|c| (c.plan_code.as_str(), c.status))
        .collect();
    let capstone = Capstone::resolve(courses, analysis, config);

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut ranked: Vec<(RankKey, usize, ScoreBreakdown)> = Vec::new();

    for (position, course) in courses.iter().enumerate() {
        if course.status != CourseStatus::Available || !seen.insert(course.id.as_str()) {
            continue;
        }
        if excluded.contains(&course.id) {
            log_checks!(verbosity, "  skip {}: excluded by caller", course.id);
            continue;
        }
        if config.require_approved_correlatives && !correlatives_approved(course, &status_by_code)
        {
            log_checks!(verbosity, "  skip {}: correlatives not all approved", course.id);
            continue;
        }

        let breakdown = score_course(course, analysis, critical, capstone.as_ref(), config);
        log_checks!(
            verbosity,
            "  candidate {}: distance {}, score {}",
            course.id,
            breakdown.distance,
            breakdown.score
        );
        ranked.push((
            RankKey::new(breakdown.score, course.year, course.id.as_str()),
            position,
            breakdown,
        ));
    }

    ranked.sort_by(|a, b| a.0.cmp(&b.0));
    ranked.truncate(desired_count);

    ranked
        .into_iter()
        .map(|(key, position, breakdown)| {
            log_changes!(verbosity, "Recommend {} (score {})", key.course_id, key.score);
            Recommendation {
                course: courses[position].clone(),
                score: breakdown.score,
                reasons: breakdown.reasons,
            }
        })
        .collect()
}

/// Rank currently available courses by distance-to-sink plus bonuses.
pub fn get_reasoned_recommendations(
    courses: &[Course],
    edges: &[Edge],
    desired_count: usize,
    excluded: &FxHashSet<CourseId>,
    config: &RecommendationConfig,
) -> Vec<Recommendation> {
    let analysis = PathAnalysis::new(courses, edges);
    let critical = analysis.critical_path(config.verbosity);
    rank_with_analysis(
        courses,
        &analysis,
        &critical,
        desired_count,
        excluded,
        config,
    )
}

/// Rank AVAILABLE courses by distance-to-sink plus the critical-path bonus.
pub fn get_recommendations(
    courses: &[Course],
    edges: &[Edge],
    desired_count: usize,
    excluded: &FxHashSet<CourseId>,
) -> Vec<Course> {
    get_reasoned_recommendations(
        courses,
        edges,
        desired_count,
        excluded,
        &RecommendationConfig::basic(),
    )
    .into_iter()
    .map(|r| r.course)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_edges;

    fn course(id: &str, year: u32, status: CourseStatus, reqs: &[&str]) -> Course {
        Course::new(
            id,
            id,
            id,
            year,
            status,
            reqs.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.id.as_str()).collect()
    }

    /// A -> B -> Y -> Z with A also unlocking W (so A's chain is critical),
    /// and an independent X -> X1 -> X2 -> X3 chain.
    fn tie_catalog() -> Vec<Course> {
        vec![
            course("a", 1, CourseStatus::Approved, &[]),
            course("w", 1, CourseStatus::Pending, &["a"]),
            course("b", 1, CourseStatus::Approved, &["a"]),
            course("y", 1, CourseStatus::Available, &["b"]),
            course("z", 2, CourseStatus::Pending, &["y"]),
            course("x", 2, CourseStatus::Available, &[]),
            course("x1", 3, CourseStatus::Pending, &["x"]),
            course("x2", 4, CourseStatus::Pending, &["x1"]),
            course("x3", 5, CourseStatus::Pending, &["x2"]),
        ]
    }

    #[test]
    fn test_critical_bonus_tie_resolved_by_year() {
        let courses = tie_catalog();
        let edges = build_edges(&courses);
        let critical = crate::critical_path::get_critical_path(&courses, &edges);
        assert!(critical.contains("y"));
        assert!(!critical.contains("x"));

        let recs = get_reasoned_recommendations(
            &courses,
            &edges,
            2,
            &FxHashSet::default(),
            &RecommendationConfig::basic(),
        );
        // y: 1 + 2 = 3, x: 3 + 0 = 3, y is in an earlier year
        assert_eq!(recs[0].course.id, "y");
        assert_eq!(recs[0].score, 3);
        assert_eq!(recs[1].course.id, "x");
        assert_eq!(recs[1].score, 3);

        let top = get_recommendations(&courses, &edges, 1, &FxHashSet::default());
        assert_eq!(ids(&top), vec!["y"]);
    }

    #[test]
    fn test_only_available_and_bounded() {
        let courses = tie_catalog();
        let edges = build_edges(&courses);
        let recs = get_recommendations(&courses, &edges, 10, &FxHashSet::default());
        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|c| c.status == CourseStatus::Available));
    }

    #[test]
    fn test_zero_count_and_empty_catalog() {
        let courses = tie_catalog();
        let edges = build_edges(&courses);
        assert!(get_recommendations(&courses, &edges, 0, &FxHashSet::default()).is_empty());
        assert!(get_recommendations(&[], &[], 5, &FxHashSet::default()).is_empty());
    }

    #[test]
    fn test_excluded_courses_filtered() {
        let courses = tie_catalog();
        let edges = build_edges(&courses);
        let excluded: FxHashSet<CourseId> = ["y".to_string()].into_iter().collect();
        let recs = get_recommendations(&courses, &edges, 5, &excluded);
        assert_eq!(ids(&recs), vec!["x"]);
    }

    #[test]
    fn test_duplicate_ids_returned_once() {
        let mut courses = tie_catalog();
        courses.push(course("x", 2, CourseStatus::Available, &[]));
        let edges = build_edges(&courses);
        let recs = get_recommendations(&courses, &edges, 10, &FxHashSet::default());
        let unique: FxHashSet<&str> = recs.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(unique.len(), recs.len());
    }

    #[test]
    fn test_strict_variant_requires_approved_correlatives() {
        let courses = vec![
            course("a", 1, CourseStatus::Regularized, &[]),
            course("b", 2, CourseStatus::Available, &["a"]),
            course("c", 1, CourseStatus::Available, &[]),
        ];
        let edges = build_edges(&courses);

        let strict = get_reasoned_recommendations(
            &courses,
            &edges,
            5,
            &FxHashSet::default(),
            &RecommendationConfig::default(),
        );
        let strict_ids: Vec<&str> = strict.iter().map(|r| r.course.id.as_str()).collect();
        assert_eq!(strict_ids, vec!["c"]);

        // b sits on the critical path a -> b: 0 + 2 beats c's 0
        let basic = get_recommendations(&courses, &edges, 5, &FxHashSet::default());
        assert_eq!(ids(&basic), vec!["b", "c"]);
    }

    #[test]
    fn test_capstone_and_intermediate_bonuses_with_reasons() {
        let mut courses = vec![
            course("base", 1, CourseStatus::Approved, &[]),
            course("seminar", 4, CourseStatus::Available, &["base"]),
            course("elective", 2, CourseStatus::Available, &["base"]),
            course("tech", 3, CourseStatus::Available, &["base"]),
            course("thesis", 5, CourseStatus::Pending, &["seminar"]),
        ];
        courses[3].is_intermediate_degree = true;
        let edges = build_edges(&courses);
        let config = RecommendationConfig::default().with_capstone("thesis");

        let recs =
            get_reasoned_recommendations(&courses, &edges, 3, &FxHashSet::default(), &config);
        let order: Vec<&str> = recs.iter().map(|r| r.course.id.as_str()).collect();
        // seminar: 1 + 2 (critical) + 5 (capstone) = 8; tech: 0 + 4 = 4; elective: 0
        assert_eq!(order, vec!["seminar", "tech", "elective"]);
        assert_eq!(recs[0].score, 8);
        assert_eq!(recs[0].reasons.len(), 2);
        assert_eq!(recs[1].score, 4);
        assert_eq!(
            recs[1].reasons,
            vec!["Grants the intermediate degree (+4)".to_string()]
        );
        assert!(recs[2].reasons.is_empty());
    }
}
