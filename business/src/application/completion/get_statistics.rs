use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::attach_courses;
use crate::domain::completion::repository::CompletionRepository;
use crate::domain::completion::statistics::{CompletionStatistics, compute_statistics};
use crate::domain::completion::use_cases::get_statistics::{
    GetCompletionStatisticsParams, GetCompletionStatisticsUseCase,
};
use crate::domain::course::repository::CourseRepository;
use crate::domain::logger::Logger;

pub struct GetCompletionStatisticsUseCaseImpl {
    pub course_repository: Arc<dyn CourseRepository>,
    pub completion_repository: Arc<dyn CompletionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCompletionStatisticsUseCase for GetCompletionStatisticsUseCaseImpl {
    async fn execute(
        &self,
        params: GetCompletionStatisticsParams,
    ) -> Result<CompletionStatistics, CompletionError> {
        self.logger
            .info(&format!("Computing statistics for user: {}", params.user_id));

        let records = self.completion_repository.get_by_user(&params.user_id).await?;
        if records.is_empty() {
            return Ok(compute_statistics(&[]));
        }

        let completed = attach_courses(records, self.course_repository.get_all().await?);
        Ok(compute_statistics(&completed))
    }
}
