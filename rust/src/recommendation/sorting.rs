//! Rank keys for recommendation ordering.

use std::cmp::Ordering;

/// Sort key for a scored course.
///
/// Implements `Ord` so candidates can be sorted (lower = recommended first):
/// higher score first, then earlier curriculum year, then course id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankKey {
    pub score: u32,
    pub year: u32,
    pub course_id: String,
}

impl RankKey {
    pub fn new(score: u32, year: u32, course_id: impl Into<String>) -> Self {
        Self {
            score,
            year,
            course_id: course_id.into(),
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(self.year.cmp(&other.year))
            .then(self.course_id.cmp(&other.course_id))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_score_first() {
        let mut keys = vec![RankKey::new(1, 1, "a"), RankKey::new(5, 3, "b")];
        keys.sort();
        assert_eq!(keys[0].course_id, "b");
    }

    #[test]
    fn test_year_breaks_score_ties() {
        let mut keys = vec![RankKey::new(3, 2, "x"), RankKey::new(3, 1, "y")];
        keys.sort();
        assert_eq!(keys[0].course_id, "y");
    }

    #[test]
    fn test_id_breaks_remaining_ties() {
        let mut keys = vec![RankKey::new(3, 1, "b"), RankKey::new(3, 1, "a")];
        keys.sort();
        assert_eq!(keys[0].course_id, "a");
    }
}
