use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::course::errors::CourseError;
use crate::domain::course::repository::CourseRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recommendation::model::{CourseSummary, RecommendationRequest};
use crate::domain::recommendation::use_cases::recommend::RecommendCoursesUseCase;
use crate::domain::recommendation::use_cases::recommend_for_course::{
    RecommendForCourseParams, RecommendForCourseUseCase,
};

pub struct RecommendForCourseUseCaseImpl {
    pub repository: Arc<dyn CourseRepository>,
    pub recommender: Arc<dyn RecommendCoursesUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecommendForCourseUseCase for RecommendForCourseUseCaseImpl {
    async fn execute(
        &self,
        params: RecommendForCourseParams,
    ) -> Result<Vec<CourseSummary>, CourseError> {
        self.logger
            .info(&format!("Recommending follow-ups for course: {}", params.course_id));

        let course = self
            .repository
            .get_by_id(params.course_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CourseError::NotFound,
                other => CourseError::Repository(other),
            })?;

        Ok(self
            .recommender
            .execute(RecommendationRequest::new(
                Some(course.domain),
                Some(course.difficulty),
                None,
            ))
            .await)
    }
}
