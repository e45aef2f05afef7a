use async_trait::async_trait;

use crate::domain::course::errors::CourseError;
use crate::domain::course::value_objects::CourseId;
use crate::domain::recommendation::model::CourseSummary;

pub struct RecommendForCourseParams {
    pub course_id: CourseId,
}

#[async_trait]
pub trait RecommendForCourseUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecommendForCourseParams,
    ) -> Result<Vec<CourseSummary>, CourseError>;
}
