//! Configuration types for the curriculum engine.

#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::models::CourseStatus;

/// Score bonus for courses on the critical path.
pub const CRITICAL_BONUS: u32 = 2;
/// Score bonus for courses that directly unlock the capstone course.
pub const CAPSTONE_BONUS: u32 = 5;
/// Score bonus for courses that grant the intermediate degree.
pub const INTERMEDIATE_DEGREE_BONUS: u32 = 4;

/// Which statuses of a prerequisite count as satisfying it when unlocking
/// downstream courses.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnlockPolicy {
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub satisfying: Vec<CourseStatus>,
}

impl UnlockPolicy {
    /// Anything the student has started or earned credit for unlocks
    /// dependents, including in-progress and retake attempts.
    pub fn permissive() -> Self {
        Self {
            satisfying: vec![
                CourseStatus::Regularized,
                CourseStatus::Approved,
                CourseStatus::Equivalence,
                CourseStatus::Retake,
                CourseStatus::InProgress,
            ],
        }
    }

    /// Only final approval (or an equivalence) unlocks dependents.
    pub fn approved_only() -> Self {
        Self {
            satisfying: vec![CourseStatus::Approved, CourseStatus::Equivalence],
        }
    }

    pub fn satisfies(&self, status: CourseStatus) -> bool {
        self.satisfying.contains(&status)
    }
}

impl Default for UnlockPolicy {
    fn default() -> Self {
        Self::permissive()
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl UnlockPolicy {
    #[new]
    #[pyo3(signature = (satisfying=None))]
    fn py_new(satisfying: Option<Vec<CourseStatus>>) -> Self {
        satisfying.map_or_else(Self::permissive, |satisfying| Self { satisfying })
    }

    #[staticmethod]
    #[pyo3(name = "approved_only")]
    fn py_approved_only() -> Self {
        Self::approved_only()
    }

    fn __repr__(&self) -> String {
        let names: Vec<&str> = self.satisfying.iter().map(|s| s.as_str()).collect();
        format!("UnlockPolicy(satisfying={:?})", names)
    }
}

/// Scoring parameters for recommendations.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationConfig {
    /// Bonus for courses on the critical path.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub critical_bonus: u32,
    /// Bonus for courses with a direct edge to the capstone course.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub capstone_bonus: u32,
    /// Bonus for courses that grant the intermediate degree.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub intermediate_degree_bonus: u32,
    /// Plan code of the capstone/thesis course (None disables the capstone bonus).
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub capstone_plan_code: Option<String>,
    /// Require every correlative to be APPROVED, not merely unlocking.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub require_approved_correlatives: bool,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub verbosity: u8,
}

impl RecommendationConfig {
    /// Distance plus critical-path bonus only, over every AVAILABLE course.
    pub fn basic() -> Self {
        Self {
            capstone_bonus: 0,
            intermediate_degree_bonus: 0,
            capstone_plan_code: None,
            require_approved_correlatives: false,
            ..Self::default()
        }
    }

    pub fn with_capstone(mut self, plan_code: impl Into<String>) -> Self {
        self.capstone_plan_code = Some(plan_code.into());
        self
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            critical_bonus: CRITICAL_BONUS,
            capstone_bonus: CAPSTONE_BONUS,
            intermediate_degree_bonus: INTERMEDIATE_DEGREE_BONUS,
            capstone_plan_code: None,
            require_approved_correlatives: true,
            verbosity: 0,
        }
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl RecommendationConfig {
    #[new]
    #[pyo3(signature = (
        critical_bonus=None,
        capstone_bonus=None,
        intermediate_degree_bonus=None,
        capstone_plan_code=None,
        require_approved_correlatives=None,
        verbosity=0
    ))]
    fn py_new(
        critical_bonus: Option<u32>,
        capstone_bonus: Option<u32>,
        intermediate_degree_bonus: Option<u32>,
        capstone_plan_code: Option<String>,
        require_approved_correlatives: Option<bool>,
        verbosity: u8,
    ) -> Self {
        let defaults = Self::default();
        Self {
            critical_bonus: critical_bonus.unwrap_or(defaults.critical_bonus),
            capstone_bonus: capstone_bonus.unwrap_or(defaults.capstone_bonus),
            intermediate_degree_bonus: intermediate_degree_bonus
                .unwrap_or(defaults.intermediate_degree_bonus),
            capstone_plan_code,
            require_approved_correlatives: require_approved_correlatives
                .unwrap_or(defaults.require_approved_correlatives),
            verbosity,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "RecommendationConfig(critical_bonus={}, capstone_bonus={}, intermediate_degree_bonus={}, capstone={:?})",
            self.critical_bonus,
            self.capstone_bonus,
            self.intermediate_degree_bonus,
            self.capstone_plan_code
        )
    }
}

/// Configuration for [`crate::engine::CurriculumEngine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Unlock policy for registered students.
    pub unlock_policy: UnlockPolicy,
    /// Unlock policy used while the guest-mode provider reports a guest.
    pub guest_unlock_policy: UnlockPolicy,
    pub recommendation: RecommendationConfig,
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            unlock_policy: UnlockPolicy::permissive(),
            guest_unlock_policy: UnlockPolicy::permissive(),
            recommendation: RecommendationConfig::default(),
            verbosity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permissive_policy() {
        let policy = UnlockPolicy::default();
        assert!(policy.satisfies(CourseStatus::InProgress));
        assert!(policy.satisfies(CourseStatus::Retake));
        assert!(policy.satisfies(CourseStatus::Regularized));
        assert!(!policy.satisfies(CourseStatus::Pending));
        assert!(!policy.satisfies(CourseStatus::Available));
    }

    #[test]
    fn test_approved_only_policy() {
        let policy = UnlockPolicy::approved_only();
        assert!(policy.satisfies(CourseStatus::Approved));
        assert!(!policy.satisfies(CourseStatus::Regularized));
        assert!(!policy.satisfies(CourseStatus::InProgress));
    }

    #[test]
    fn test_recommendation_defaults() {
        let config = RecommendationConfig::default();
        assert_eq!(config.critical_bonus, 2);
        assert!(config.capstone_bonus > config.critical_bonus);
        assert!(config.intermediate_degree_bonus > config.critical_bonus);
        assert!(config.require_approved_correlatives);

        let basic = RecommendationConfig::basic();
        assert_eq!(basic.critical_bonus, 2);
        assert_eq!(basic.capstone_bonus, 0);
        assert!(!basic.require_approved_correlatives);
    }
}
