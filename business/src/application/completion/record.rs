use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::{CompletionRecord, NewCompletionProps};
use crate::domain::completion::repository::CompletionRepository;
use crate::domain::completion::use_cases::record::{
    RecordCompletionParams, RecordCompletionUseCase, RecordedCompletion,
};
use crate::domain::course::repository::CourseRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recommendation::model::RecommendationRequest;
use crate::domain::recommendation::use_cases::recommend::RecommendCoursesUseCase;

pub struct RecordCompletionUseCaseImpl {
    pub course_repository: Arc<dyn CourseRepository>,
    pub completion_repository: Arc<dyn CompletionRepository>,
    pub recommender: Arc<dyn RecommendCoursesUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecordCompletionUseCase for RecordCompletionUseCaseImpl {
    async fn execute(
        &self,
        params: RecordCompletionParams,
    ) -> Result<RecordedCompletion, CompletionError> {
        self.logger.info(&format!(
            "Recording completion of course {} for user {}",
            params.course_id, params.user_id
        ));

        let record = CompletionRecord::new(NewCompletionProps {
            user_id: params.user_id,
            course_id: params.course_id,
            performance_score: params.performance_score,
            feedback: params.feedback,
        })?;

        let course = self
            .course_repository
            .get_by_id(record.course_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CompletionError::CourseNotFound,
                other => CompletionError::Repository(other),
            })?;

        self.completion_repository.save(&record).await?;
        self.logger
            .info(&format!("Completion recorded with id: {}", record.id));

        let recommendations = self
            .recommender
            .execute(RecommendationRequest::new(
                Some(course.domain),
                Some(course.difficulty),
                Some(record.user_id.clone()),
            ))
            .await;

        Ok(RecordedCompletion {
            record,
            recommendations,
        })
    }
}
