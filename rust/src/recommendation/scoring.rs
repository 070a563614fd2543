//! Scoring functions for course recommendations.
//!
//! Score = distance-to-sink + fixed bonuses:
//!
//! ```text
//! score = distance
//!       + critical_bonus             (course is on the critical path)
//!       + capstone_bonus             (course directly unlocks the capstone)
//!       + intermediate_degree_bonus  (course grants the intermediate degree)
//! ```

use crate::config::RecommendationConfig;
use crate::critical_path::{CriticalPath, PathAnalysis};
use crate::interner::CourseSlot;
use crate::models::Course;

/// Capstone course resolved against the current snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Capstone<'a> {
    pub slot: CourseSlot,
    pub name: &'a str,
}

impl<'a> Capstone<'a> {
    /// Locate the course carrying `config.capstone_plan_code`, if any.
    ///
    /// When several courses share the code the last one wins, matching the
    /// edge builder.
    pub fn resolve(
        courses: &'a [Course],
        analysis: &PathAnalysis,
        config: &RecommendationConfig,
    ) -> Option<Self> {
        let code = config.capstone_plan_code.as_deref()?;
        let course = courses.iter().rev().find(|c| c.plan_code == code)?;
        let slot = analysis.graph.index.get(&course.id)?;
        Some(Self {
            slot,
            name: &course.name,
        })
    }
}

/// Score of a single course and the bonuses that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub distance: u32,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Whether `course` has a direct edge into the capstone course.
pub fn unlocks_capstone(course: &Course, analysis: &PathAnalysis, capstone: &Capstone<'_>) -> bool {
    analysis
        .graph
        .index
        .get(&course.id)
        .is_some_and(|slot| analysis.graph.dependents[slot as usize].contains(&capstone.slot))
}

/// Score a course, recording a reason for every bonus applied.
pub fn score_course(
    course: &Course,
    analysis: &PathAnalysis,
    critical: &CriticalPath,
    capstone: Option<&Capstone<'_>>,
    config: &RecommendationConfig,
) -> ScoreBreakdown {
    let distance = analysis.distance_of(&course.id);
    let mut score = distance;
    let mut reasons = Vec::new();

    if config.critical_bonus > 0 && critical.contains(&course.id) {
        score += config.critical_bonus;
        reasons.push(format!("On the critical path (+{})", config.critical_bonus));
    }

    if let Some(capstone) = capstone {
        if config.capstone_bonus > 0 && unlocks_capstone(course, analysis, capstone) {
            score += config.capstone_bonus;
            reasons.push(format!(
                "Directly unlocks {} (+{})",
                capstone.name, config.capstone_bonus
            ));
        }
    }

    if config.intermediate_degree_bonus > 0 && course.is_intermediate_degree {
        score += config.intermediate_degree_bonus;
        reasons.push(format!(
            "Grants the intermediate degree (+{})",
            config.intermediate_degree_bonus
        ));
    }

    ScoreBreakdown {
        distance,
        score,
        reasons,
    }
}
