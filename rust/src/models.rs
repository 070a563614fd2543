//! Core data types for the curriculum engine.

use chrono::NaiveDate;
#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CurriculumError;

/// Opaque, stable course identifier.
pub type CourseId = String;

/// Status of a course in the student's history.
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    Pending,
    Available,
    InProgress,
    Regularized,
    Approved,
    Retake,
    Equivalence,
}

impl CourseStatus {
    pub const ALL: [CourseStatus; 7] = [
        CourseStatus::Pending,
        CourseStatus::Available,
        CourseStatus::InProgress,
        CourseStatus::Regularized,
        CourseStatus::Approved,
        CourseStatus::Retake,
        CourseStatus::Equivalence,
    ];

    /// Statuses the availability pass is allowed to rewrite.
    ///
    /// Anything else has been actioned by the student and is left alone.
    pub fn is_unactioned(self) -> bool {
        matches!(self, CourseStatus::Pending | CourseStatus::Available)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CourseStatus::Pending => "PENDING",
            CourseStatus::Available => "AVAILABLE",
            CourseStatus::InProgress => "IN_PROGRESS",
            CourseStatus::Regularized => "REGULARIZED",
            CourseStatus::Approved => "APPROVED",
            CourseStatus::Retake => "RETAKE",
            CourseStatus::Equivalence => "EQUIVALENCE",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseStatus {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CurriculumError::UnknownStatus(s.to_string()))
    }
}

/// A catalog entry together with the student's progress on it.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub id: CourseId,
    /// Code used by other courses to express prerequisites (distinct from `id`).
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub plan_code: String,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub name: String,
    /// Curriculum year the course is placed in.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub year: u32,
    /// Credit weight.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub hours: u32,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub status: CourseStatus,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default)]
    pub grade: Option<f64>,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default)]
    pub difficulty: Option<f64>,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default)]
    pub status_date: Option<NaiveDate>,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default)]
    pub notes: Option<String>,
    /// Plan codes of the courses this one requires, in catalog order.
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default)]
    pub correlative_ids: Vec<String>,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default)]
    pub is_optional: bool,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    #[serde(default)]
    pub is_intermediate_degree: bool,
}

impl Course {
    /// Create a course with no grade, notes or classification flags.
    pub fn new(
        id: impl Into<String>,
        plan_code: impl Into<String>,
        name: impl Into<String>,
        year: u32,
        status: CourseStatus,
        correlative_ids: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            plan_code: plan_code.into(),
            name: name.into(),
            year,
            hours: 0,
            status,
            grade: None,
            difficulty: None,
            status_date: None,
            notes: None,
            correlative_ids,
            is_optional: false,
            is_intermediate_degree: false,
        }
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Course {
    #[new]
    #[pyo3(signature = (
        id,
        plan_code,
        name,
        year,
        status,
        correlative_ids=Vec::new(),
        hours=0,
        grade=None,
        difficulty=None,
        status_date=None,
        notes=None,
        is_optional=false,
        is_intermediate_degree=false
    ))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        id: String,
        plan_code: String,
        name: String,
        year: u32,
        status: CourseStatus,
        correlative_ids: Vec<String>,
        hours: u32,
        grade: Option<f64>,
        difficulty: Option<f64>,
        status_date: Option<NaiveDate>,
        notes: Option<String>,
        is_optional: bool,
        is_intermediate_degree: bool,
    ) -> Self {
        Self {
            id,
            plan_code,
            name,
            year,
            hours,
            status,
            grade,
            difficulty,
            status_date,
            notes,
            correlative_ids,
            is_optional,
            is_intermediate_degree,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Course(id={:?}, plan_code={:?}, status={}, correlatives={})",
            self.id,
            self.plan_code,
            self.status,
            self.correlative_ids.len()
        )
    }
}

/// Directed prerequisite relation: `from` must be satisfied before `to`.
#[cfg_attr(feature = "python", pyclass(eq, hash, frozen))]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    #[cfg_attr(feature = "python", pyo3(get))]
    pub from: CourseId,
    #[cfg_attr(feature = "python", pyo3(get))]
    pub to: CourseId,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Stable identifier used in edge-id sets.
    pub fn id(&self) -> String {
        format!("{}->{}", self.from, self.to)
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Edge {
    #[new]
    fn py_new(from: String, to: String) -> Self {
        Self { from, to }
    }

    #[pyo3(name = "id")]
    fn py_id(&self) -> String {
        self.id()
    }

    fn __repr__(&self) -> String {
        format!("Edge(from={:?}, to={:?})", self.from, self.to)
    }
}
