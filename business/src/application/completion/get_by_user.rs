use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::{CompletedCourse, attach_courses};
use crate::domain::completion::repository::CompletionRepository;
use crate::domain::completion::use_cases::get_by_user::{
    GetUserCompletionsParams, GetUserCompletionsUseCase,
};
use crate::domain::course::repository::CourseRepository;
use crate::domain::logger::Logger;

pub struct GetUserCompletionsUseCaseImpl {
    pub course_repository: Arc<dyn CourseRepository>,
    pub completion_repository: Arc<dyn CompletionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserCompletionsUseCase for GetUserCompletionsUseCaseImpl {
    async fn execute(
        &self,
        params: GetUserCompletionsParams,
    ) -> Result<Vec<CompletedCourse>, CompletionError> {
        self.logger
            .info(&format!("Fetching completions for user: {}", params.user_id));

        let records = self.completion_repository.get_by_user(&params.user_id).await?;
        let total = records.len();
        let completed = attach_courses(records, self.course_repository.get_all().await?);

        if completed.len() < total {
            self.logger.warn(&format!(
                "{} completions refer to courses missing from the catalog",
                total - completed.len()
            ));
        }
        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{InMemoryCompletionRepository, InMemoryCourseRepository, course, mock_logger};

    #[tokio::test]
    async fn should_list_completions_with_course_details() {
        let use_case = GetUserCompletionsUseCaseImpl {
            course_repository: Arc::new(InMemoryCourseRepository::new(vec![
                course(1, "Data Analysis", "Beginner", 4.0, 10),
                course(2, "Machine Learning", "Advanced", 4.5, 20),
            ])),
            completion_repository: Arc::new(InMemoryCompletionRepository::with_completed(
                "learner",
                &[2, 3],
            )),
            logger: mock_logger(),
        };

        let completed = use_case
            .execute(GetUserCompletionsParams {
                user_id: UserId::new("learner"),
            })
            .await
            .unwrap();

        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].course.name, "Machine Learning Advanced #2");
    }

    #[tokio::test]
    async fn should_return_empty_for_user_without_history() {
        let use_case = GetUserCompletionsUseCaseImpl {
            course_repository: Arc::new(InMemoryCourseRepository::new(vec![])),
            completion_repository: Arc::new(InMemoryCompletionRepository::default()),
            logger: mock_logger(),
        };

        let completed = use_case
            .execute(GetUserCompletionsParams {
                user_id: UserId::new("newcomer"),
            })
            .await
            .unwrap();

        assert!(completed.is_empty());
    }
}
