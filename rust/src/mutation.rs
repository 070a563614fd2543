//! Snapshot mutations followed by a full availability pass.
//!
//! Derived statuses are never patched incrementally: every mutation returns a
//! new snapshot that has already been through
//! [`recalculate_availability_with`].

use chrono::NaiveDate;

use crate::availability::recalculate_availability_with;
use crate::config::UnlockPolicy;
use crate::error::CurriculumError;
use crate::models::{Course, CourseStatus};

/// Single-field update of one course.
#[derive(Clone, Debug, PartialEq)]
pub enum CoursePatch {
    Status {
        status: CourseStatus,
        date: Option<NaiveDate>,
    },
    Grade(Option<f64>),
    Difficulty(Option<f64>),
    Notes(Option<String>),
}

fn check_finite(field: &'static str, value: Option<f64>) -> Result<(), CurriculumError> {
    match value {
        Some(v) if !v.is_finite() => Err(CurriculumError::InvalidValue { field, value: v }),
        _ => Ok(()),
    }
}

/// Apply `patch` to the course with id `course_id`, then recompute availability.
///
/// Every course sharing the id receives the patch.
pub fn apply_patch(
    courses: &[Course],
    course_id: &str,
    patch: CoursePatch,
    policy: &UnlockPolicy,
) -> Result<Vec<Course>, CurriculumError> {
    if !courses.iter().any(|c| c.id == course_id) {
        return Err(CurriculumError::CourseNotFound(course_id.to_string()));
    }
    match &patch {
        CoursePatch::Grade(value) => check_finite("grade", *value)?,
        CoursePatch::Difficulty(value) => check_finite("difficulty", *value)?,
        _ => {}
    }

    let patched: Vec<Course> = courses
        .iter()
        .map(|course| {
            let mut course = course.clone();
            if course.id == course_id {
                match &patch {
                    CoursePatch::Status { status, date } => {
                        course.status = *status;
                        course.status_date = *date;
                    }
                    CoursePatch::Grade(grade) => course.grade = *grade,
                    CoursePatch::Difficulty(difficulty) => course.difficulty = *difficulty,
                    CoursePatch::Notes(notes) => course.notes = notes.clone(),
                }
            }
            course
        })
        .collect();

    Ok(recalculate_availability_with(&patched, policy))
}

/// Batch replace: adopt `courses` as the new snapshot and recompute availability.
pub fn replace_all(courses: Vec<Course>, policy: &UnlockPolicy) -> Vec<Course> {
    recalculate_availability_with(&courses, policy)
}
