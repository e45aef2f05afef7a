use super::value_objects::{CourseId, Difficulty};

/// A catalog course. Read-only for everything in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub domain: String,
    /// Length in hours.
    pub duration: u32,
    /// Difficulty label as stored in the catalog.
    pub difficulty: String,
    pub prerequisites: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub rating: f64,
    pub students_count: u64,
    pub price: f64,
    pub url: Option<String>,
}

impl Course {
    /// Parsed difficulty, `None` when the catalog label is not recognised.
    pub fn difficulty_level(&self) -> Option<Difficulty> {
        self.difficulty.parse().ok()
    }

    pub fn has_difficulty(&self, difficulty: Difficulty) -> bool {
        self.difficulty_level() == Some(difficulty)
    }
}
