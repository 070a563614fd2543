//! Critical path extraction.
//!
//! The critical path is the longest chain of prerequisite relationships in the
//! curriculum, chosen deterministically among equally long chains by
//! preferring courses that directly unlock the most other courses.

mod calculation;
mod types;

pub use calculation::{get_critical_path, PathAnalysis};
pub use types::CriticalPath;
