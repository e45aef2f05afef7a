use async_trait::async_trait;

use crate::domain::recommendation::model::{CourseSummary, RecommendationRequest};

/// Next-course suggestions after a completion. Always answers, with 0 to 2
/// courses.
#[async_trait]
pub trait RecommendCoursesUseCase: Send + Sync {
    async fn execute(&self, request: RecommendationRequest) -> Vec<CourseSummary>;
}
