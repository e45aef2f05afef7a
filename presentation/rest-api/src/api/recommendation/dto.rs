use poem_openapi::Object;

use business::domain::recommendation::model::{CourseSummary, RecommendationRequest};
use business::domain::shared::value_objects::UserId;

/// Attributes of the course the learner just completed.
#[derive(Debug, Clone, Object)]
pub struct RecommendationRequestBody {
    /// Domain of the completed course (default: "Programming")
    #[oai(skip_serializing_if_is_none)]
    pub domain: Option<String>,
    /// Difficulty of the completed course (default: "Beginner")
    #[oai(skip_serializing_if_is_none)]
    pub difficulty: Option<String>,
    /// Learner whose completed courses are excluded
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
}

impl From<RecommendationRequestBody> for RecommendationRequest {
    fn from(body: RecommendationRequestBody) -> Self {
        RecommendationRequest::new(body.domain, body.difficulty, user_id_from(body.user_id))
    }
}

/// Blank identifiers count as anonymous.
pub fn user_id_from(raw: Option<String>) -> Option<UserId> {
    raw.map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .map(UserId::from)
}

/// A suggested next course.
#[derive(Debug, Clone, Object)]
pub struct CourseSummaryResponse {
    pub id: i64,
    pub name: String,
    pub domain: String,
    /// Duration in hours
    pub duration: u32,
    pub difficulty: String,
    #[oai(skip_serializing_if_is_none)]
    pub prerequisites: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub instructor: Option<String>,
    pub rating: f64,
    #[oai(skip_serializing_if_is_none)]
    pub url: Option<String>,
}

impl From<CourseSummary> for CourseSummaryResponse {
    fn from(summary: CourseSummary) -> Self {
        Self {
            id: summary.id.value(),
            name: summary.name,
            domain: summary.domain,
            duration: summary.duration,
            difficulty: summary.difficulty,
            prerequisites: summary.prerequisites,
            description: summary.description,
            instructor: summary.instructor,
            rating: summary.rating,
            url: summary.url,
        }
    }
}
