//! Availability resolution: keeps the locked/unlocked frontier consistent
//! with the latest known outcomes.

use rustc_hash::FxHashSet;

use crate::config::UnlockPolicy;
use crate::models::{Course, CourseStatus};

/// Plan codes of courses whose status satisfies `policy`.
pub fn passed_codes<'a>(courses: &'a [Course], policy: &UnlockPolicy) -> FxHashSet<&'a str> {
    courses
        .iter()
        .filter(|c| policy.satisfies(c.status))
        .map(|c| c.plan_code.as_str())
        .collect()
}

/// Whether every correlative of `course` is in `passed`.
///
/// A correlative code that matches no course is never passed, so it keeps
/// the course locked.
pub fn is_unlocked(course: &Course, passed: &FxHashSet<&str>) -> bool {
    course
        .correlative_ids
        .iter()
        .all(|code| passed.contains(code.as_str()))
}

/// Recompute PENDING/AVAILABLE statuses with the default (permissive) policy.
pub fn recalculate_availability(courses: &[Course]) -> Vec<Course> {
    recalculate_availability_with(courses, &UnlockPolicy::default())
}

/// Recompute PENDING/AVAILABLE statuses under `policy`.
///
/// Courses the student has not actioned become AVAILABLE when all their
/// correlatives are passed (or they have none) and PENDING otherwise. Every
/// other status is returned unchanged. The pass reads the whole input, so
/// running it on its own output is a no-op.
pub fn recalculate_availability_with(courses: &[Course], policy: &UnlockPolicy) -> Vec<Course> {
    let passed = passed_codes(courses, policy);

    courses
        .iter()
        .map(|course| {
            if !course.status.is_unactioned() {
                return course.clone();
            }
            let status = if is_unlocked(course, &passed) {
                CourseStatus::Available
            } else {
                CourseStatus::Pending
            };
            Course {
                status,
                ..course.clone()
            }
        })
        .collect()
}
