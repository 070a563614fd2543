//! Curriculum planning engine.
//!
//! Given a catalog of courses and their prerequisite (correlative)
//! relationships, this crate determines which courses are takeable, which
//! chain of courses is the longest remaining obstacle to graduation, and which
//! takeable courses are most valuable to take next.
//!
//! Every function is a pure computation over a course snapshot. Callers must
//! run the availability pass after each mutation before deriving anything
//! else; [`CurriculumEngine::plan`] does this in one call.

// Allow clippy warning triggered by PyO3 macro expansion
#![cfg_attr(feature = "python", allow(clippy::useless_conversion))]

pub mod availability;
mod config;
pub mod critical_path;
pub mod engine;
mod error;
pub mod focus;
pub mod graph;
mod interner;
pub mod logging;
mod models;
pub mod mutation;
pub mod recommendation;

pub use availability::{recalculate_availability, recalculate_availability_with};
pub use config::{
    EngineConfig, RecommendationConfig, UnlockPolicy, CAPSTONE_BONUS, CRITICAL_BONUS,
    INTERMEDIATE_DEGREE_BONUS,
};
pub use critical_path::{get_critical_path, CriticalPath};
pub use engine::{CurriculumEngine, GuestModeFn, GuestModeProvider, PlanSnapshot, RegisteredUser};
pub use error::CurriculumError;
pub use focus::{analyze_focus, FocusAnalysis, RelationMaps};
pub use graph::{build_edges, compute_distance_to_sink, ensure_acyclic, validate_catalog, CatalogReport};
pub use interner::{CourseIdInterner, CourseSlot};
pub use models::{Course, CourseId, CourseStatus, Edge};
pub use mutation::{apply_patch, replace_all, CoursePatch};
pub use recommendation::{get_reasoned_recommendations, get_recommendations, Recommendation};

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;
    use rustc_hash::FxHashSet;
    use std::collections::{HashMap, HashSet};

    use crate::{
        Course, CourseStatus, CriticalPath, Edge, FocusAnalysis, Recommendation,
        RecommendationConfig, UnlockPolicy,
    };

    /// Build the prerequisite edge set from course correlatives.
    #[pyfunction]
    fn build_edges(courses: Vec<Course>) -> Vec<Edge> {
        crate::build_edges(&courses)
    }

    /// Recompute PENDING/AVAILABLE statuses.
    ///
    /// # Arguments
    /// * `courses` - Current course snapshot
    /// * `policy` - Unlock policy (defaults to the permissive policy)
    #[pyfunction]
    #[pyo3(signature = (courses, policy=None))]
    fn recalculate_availability(courses: Vec<Course>, policy: Option<UnlockPolicy>) -> Vec<Course> {
        crate::recalculate_availability_with(&courses, &policy.unwrap_or_default())
    }

    /// Longest chain of dependents ahead of each course.
    #[pyfunction]
    fn compute_distance_to_sink(courses: Vec<Course>, edges: Vec<Edge>) -> HashMap<String, u32> {
        crate::compute_distance_to_sink(&courses, &edges)
            .into_iter()
            .collect()
    }

    /// Longest, best-connected remaining chain.
    #[pyfunction]
    fn get_critical_path(courses: Vec<Course>, edges: Vec<Edge>) -> CriticalPath {
        crate::get_critical_path(&courses, &edges)
    }

    /// Rank available courses.
    ///
    /// # Arguments
    /// * `courses` - Course snapshot (after the availability pass)
    /// * `edges` - Edge set from `build_edges`
    /// * `desired_count` - Maximum number of recommendations
    /// * `excluded` - Course ids the student has deferred
    /// * `config` - Scoring configuration (None = distance + critical bonus only)
    #[pyfunction]
    #[pyo3(signature = (courses, edges, desired_count, excluded=HashSet::new(), config=None))]
    fn get_recommendations(
        courses: Vec<Course>,
        edges: Vec<Edge>,
        desired_count: usize,
        excluded: HashSet<String>,
        config: Option<RecommendationConfig>,
    ) -> Vec<Recommendation> {
        let excluded: FxHashSet<String> = excluded.into_iter().collect();
        let config = config.unwrap_or_else(RecommendationConfig::basic);
        crate::get_reasoned_recommendations(&courses, &edges, desired_count, &excluded, &config)
    }

    /// Ancestors and direct-dependent classification for a focal course.
    #[pyfunction]
    fn analyze_focus(edges: Vec<Edge>, focal_id: &str) -> FocusAnalysis {
        crate::analyze_focus(&edges, focal_id)
    }

    /// Raise ValueError if any course sits in (or behind) a prerequisite cycle.
    #[pyfunction]
    fn ensure_acyclic(courses: Vec<Course>, edges: Vec<Edge>) -> PyResult<()> {
        crate::ensure_acyclic(&courses, &edges)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    /// The curriculum.rust Python module.
    #[pymodule]
    fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Core data types
        m.add_class::<CourseStatus>()?;
        m.add_class::<Course>()?;
        m.add_class::<Edge>()?;
        m.add_class::<CriticalPath>()?;
        m.add_class::<Recommendation>()?;
        m.add_class::<FocusAnalysis>()?;

        // Config types
        m.add_class::<UnlockPolicy>()?;
        m.add_class::<RecommendationConfig>()?;

        // Algorithms
        m.add_function(wrap_pyfunction!(build_edges, m)?)?;
        m.add_function(wrap_pyfunction!(recalculate_availability, m)?)?;
        m.add_function(wrap_pyfunction!(compute_distance_to_sink, m)?)?;
        m.add_function(wrap_pyfunction!(get_critical_path, m)?)?;
        m.add_function(wrap_pyfunction!(get_recommendations, m)?)?;
        m.add_function(wrap_pyfunction!(analyze_focus, m)?)?;
        m.add_function(wrap_pyfunction!(ensure_acyclic, m)?)?;

        Ok(())
    }
}
