//! Types for critical path extraction.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use std::collections::HashSet;

use crate::models::CourseId;

// Note: std HashSet here for PyO3 interface compatibility

/// The single longest, best-connected chain through the remaining curriculum.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CriticalPath {
    /// Course ids on the path.
    #[cfg_attr(feature = "python", pyo3(get))]
    pub node_ids: HashSet<CourseId>,
    /// Edge ids (see [`crate::models::Edge::id`]) on the path.
    #[cfg_attr(feature = "python", pyo3(get))]
    pub edge_ids: HashSet<String>,
    /// Course ids in walk order, from the start course to the sink.
    #[cfg_attr(feature = "python", pyo3(get))]
    pub path: Vec<CourseId>,
    /// Longest distance-to-sink in the graph; equals the path's edge count.
    #[cfg_attr(feature = "python", pyo3(get))]
    pub length: u32,
}

impl CriticalPath {
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.node_ids.contains(course_id)
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl CriticalPath {
    fn __repr__(&self) -> String {
        format!("CriticalPath(length={}, path={:?})", self.length, self.path)
    }
}
