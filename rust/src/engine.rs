//! Curriculum engine façade.
//!
//! Bundles configuration and the caller's guest-mode capability, and derives
//! every output from one freshly recomputed snapshot so consumers never act on
//! stale availability.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::availability::recalculate_availability_with;
use crate::config::{EngineConfig, UnlockPolicy};
use crate::critical_path::{CriticalPath, PathAnalysis};
use crate::error::CurriculumError;
use crate::graph::build_edges;
use crate::models::{Course, CourseId, Edge};
use crate::mutation::{apply_patch, CoursePatch};
use crate::recommendation::{rank_with_analysis, Recommendation};
use crate::{log_changes, log_debug};

/// Tells the engine whether the current session belongs to a guest.
pub trait GuestModeProvider {
    fn is_guest(&self) -> bool;
}

impl GuestModeProvider for bool {
    fn is_guest(&self) -> bool {
        *self
    }
}

/// Provider for sessions that always belong to a registered student.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegisteredUser;

impl GuestModeProvider for RegisteredUser {
    fn is_guest(&self) -> bool {
        false
    }
}

/// Provider backed by a closure, for callers whose session state can change.
pub struct GuestModeFn<F>(pub F);

impl<F: Fn() -> bool> GuestModeProvider for GuestModeFn<F> {
    fn is_guest(&self) -> bool {
        (self.0)()
    }
}

/// Everything derived from one course snapshot.
#[derive(Clone, Debug)]
pub struct PlanSnapshot {
    /// Input courses after the availability pass.
    pub courses: Vec<Course>,
    pub edges: Vec<Edge>,
    pub distances: FxHashMap<CourseId, u32>,
    pub critical_path: CriticalPath,
    pub recommendations: Vec<Recommendation>,
    /// Courses left out of path computations because of a cycle.
    pub unresolved: Vec<CourseId>,
    /// Whether the snapshot was computed for a guest session.
    pub guest: bool,
}

pub struct CurriculumEngine<G: GuestModeProvider> {
    config: EngineConfig,
    guest_mode: G,
}

impl<G: GuestModeProvider> CurriculumEngine<G> {
    pub fn new(config: EngineConfig, guest_mode: G) -> Self {
        Self { config, guest_mode }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_guest(&self) -> bool {
        self.guest_mode.is_guest()
    }

    /// Unlock policy for the current session.
    pub fn unlock_policy(&self) -> &UnlockPolicy {
        if self.is_guest() {
            &self.config.guest_unlock_policy
        } else {
            &self.config.unlock_policy
        }
    }

    /// Availability pass under the session's unlock policy.
    pub fn recalculate(&self, courses: &[Course]) -> Vec<Course> {
        let updated = recalculate_availability_with(courses, self.unlock_policy());
        for (before, after) in courses.iter().zip(&updated) {
            if before.status != after.status {
                log_changes!(
                    self.config.verbosity,
                    "{}: {} -> {}",
                    after.id,
                    before.status,
                    after.status
                );
            }
        }
        updated
    }

    /// Patch one course and recompute availability.
    pub fn apply_patch(
        &self,
        courses: &[Course],
        course_id: &str,
        patch: CoursePatch,
    ) -> Result<Vec<Course>, CurriculumError> {
        apply_patch(courses, course_id, patch, self.unlock_policy())
    }

    /// Recompute availability, then derive edges, distances, the critical
    /// path and recommendations from the same snapshot.
    pub fn plan(
        &self,
        courses: &[Course],
        desired_count: usize,
        excluded: &FxHashSet<CourseId>,
    ) -> PlanSnapshot {
        let verbosity = self.config.verbosity;
        let guest = self.is_guest();
        log_debug!(
            verbosity,
            "planning {} courses (guest: {})",
            courses.len(),
            guest
        );

        let courses = self.recalculate(courses);
        let edges = build_edges(&courses);
        let analysis = PathAnalysis::new(&courses, &edges);
        let critical_path = analysis.critical_path(verbosity);

        let mut recommendation_config = self.config.recommendation.clone();
        recommendation_config.verbosity = recommendation_config.verbosity.max(verbosity);
        let recommendations = rank_with_analysis(
            &courses,
            &analysis,
            &critical_path,
            desired_count,
            excluded,
            &recommendation_config,
        );

        let unresolved = analysis
            .topo
            .unresolved
            .iter()
            .map(|&slot| analysis.graph.id(slot).to_string())
            .collect();

        PlanSnapshot {
            distances: analysis.distances(),
            courses,
            edges,
            critical_path,
            recommendations,
            unresolved,
            guest,
        }
    }
}

impl Default for CurriculumEngine<RegisteredUser> {
    fn default() -> Self {
        Self::new(EngineConfig::default(), RegisteredUser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseStatus;
    use std::cell::Cell;

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

    fn catalog() -> Vec<Course> {
        vec![
            course("a", 1, CourseStatus::Approved, &[]),
            course("b", 1, CourseStatus::Regularized, &[]),
            course("c", 2, CourseStatus::Pending, &["a"]),
            course("d", 2, CourseStatus::Pending, &["b"]),
            course("e", 3, CourseStatus::Pending, &["c", "d"]),
        ]
    }

    #[test]
    fn test_plan_recomputes_before_deriving() {
        let engine = CurriculumEngine::<RegisteredUser>::default();
        let snapshot = engine.plan(&catalog(), 5, &FxHashSet::default());

        let status = |id: &str| snapshot.courses.iter().find(|c| c.id == id).unwrap().status;
        assert_eq!(status("c"), CourseStatus::Available);
        assert_eq!(status("d"), CourseStatus::Available);
        assert_eq!(status("e"), CourseStatus::Pending);

        assert_eq!(snapshot.edges.len(), 4);
        assert_eq!(snapshot.distances["a"], 2);
        assert_eq!(snapshot.critical_path.length, 2);
        assert!(snapshot.unresolved.is_empty());
        assert!(!snapshot.guest);

        // Default reasoned config: d's correlative b is only regularized.
        let recommended: Vec<&str> = snapshot
            .recommendations
            .iter()
            .map(|r| r.course.id.as_str())
            .collect();
        assert_eq!(recommended, vec!["c"]);
    }

    #[test]
    fn test_guest_policy_selected_by_provider() {
        let config = EngineConfig {
            unlock_policy: UnlockPolicy::approved_only(),
            guest_unlock_policy: UnlockPolicy::permissive(),
            ..EngineConfig::default()
        };
        let guest = Cell::new(false);
        let engine = CurriculumEngine::new(config, GuestModeFn(|| guest.get()));

        let registered = engine.recalculate(&catalog());
        assert_eq!(registered[3].status, CourseStatus::Pending);

        guest.set(true);
        let as_guest = engine.recalculate(&catalog());
        assert_eq!(as_guest[3].status, CourseStatus::Available);
        assert!(engine.plan(&catalog(), 1, &FxHashSet::default()).guest);
    }

    #[test]
    fn test_bool_provider() {
        assert!(true.is_guest());
        assert!(!RegisteredUser.is_guest());
    }

    #[test]
    fn test_apply_patch_uses_session_policy() {
        let engine = CurriculumEngine::new(
            EngineConfig {
                unlock_policy: UnlockPolicy::approved_only(),
                ..EngineConfig::default()
            },
            false,
        );
        let out = engine
            .apply_patch(
                &catalog(),
                "b",
                CoursePatch::Status {
                    status: CourseStatus::InProgress,
                    date: None,
                },
            )
            .unwrap();
        assert_eq!(out[3].status, CourseStatus::Pending);
    }

    #[test]
    fn test_plan_reports_cycles() {
        let courses = vec![
            course("x", 1, CourseStatus::Pending, &["y"]),
            course("y", 1, CourseStatus::Pending, &["x"]),
        ];
        let engine = CurriculumEngine::<RegisteredUser>::default();
        let snapshot = engine.plan(&courses, 3, &FxHashSet::default());
        assert_eq!(snapshot.unresolved, vec!["x".to_string(), "y".to_string()]);
        assert!(snapshot.critical_path.is_empty());
        assert!(snapshot.recommendations.is_empty());
    }
}
