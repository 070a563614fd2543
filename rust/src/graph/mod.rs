//! Prerequisite graph construction and ordering.
//!
//! Edges are derived from each course's correlative plan codes on every call;
//! all path computations run on the interned [`CourseGraph`].

mod edges;
mod index;
mod topology;
mod validation;

pub use edges::{build_edges, plan_code_index};
pub use index::CourseGraph;
pub use topology::{compute_distance_to_sink, distances_by_slot, topological_order, TopologicalOrder};
pub use validation::{ensure_acyclic, validate_catalog, CatalogReport};
