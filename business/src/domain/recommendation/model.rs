use crate::domain::course::model::Course;
use crate::domain::course::value_objects::CourseId;
use crate::domain::shared::value_objects::UserId;

pub const DEFAULT_DOMAIN: &str = "Programming";
pub const DEFAULT_DIFFICULTY: &str = "Beginner";

/// Attributes of the course the user just finished.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub domain: String,
    pub difficulty: String,
    pub user_id: Option<UserId>,
}

impl RecommendationRequest {
    /// Builds a request, falling back to `Programming` / `Beginner` when the
    /// caller did not say which course was completed.
    pub fn new(domain: Option<String>, difficulty: Option<String>, user_id: Option<UserId>) -> Self {
        Self {
            domain: domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            difficulty: difficulty.unwrap_or_else(|| DEFAULT_DIFFICULTY.to_string()),
            user_id,
        }
    }
}

/// Display copy of a recommended course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub id: CourseId,
    pub name: String,
    pub domain: String,
    pub duration: u32,
    pub difficulty: String,
    pub prerequisites: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub rating: f64,
    pub url: Option<String>,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            name: course.name.clone(),
            domain: course.domain.clone(),
            duration: course.duration,
            difficulty: course.difficulty.clone(),
            prerequisites: course.prerequisites.clone(),
            description: course.description.clone(),
            instructor: course.instructor.clone(),
            rating: course.rating,
            url: course.url.clone(),
        }
    }
}
