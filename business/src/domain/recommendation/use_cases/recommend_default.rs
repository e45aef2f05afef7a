use async_trait::async_trait;

use crate::domain::recommendation::model::CourseSummary;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct RecommendDefaultParams {
    pub user_id: Option<UserId>,
}

/// Catalog-wide suggestions. Always answers, with 0 to 2 courses.
#[async_trait]
pub trait RecommendDefaultCoursesUseCase: Send + Sync {
    async fn execute(&self, params: RecommendDefaultParams) -> Vec<CourseSummary>;
}
