use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::repository::CompletionRepository;
use crate::domain::course::model::Course;
use crate::domain::course::repository::CourseRepository;
use crate::domain::logger::Logger;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::CourseSummary;
use crate::domain::recommendation::random::RandomSource;
use crate::domain::recommendation::scoring::rank;
use crate::domain::recommendation::selection::{DEFAULT_SAMPLE_SIZE, DEFAULT_TOP_K, sample_top};
use crate::domain::recommendation::use_cases::recommend_default::{
    RecommendDefaultCoursesUseCase, RecommendDefaultParams,
};
use crate::domain::shared::value_objects::UserId;

pub struct RecommendDefaultCoursesUseCaseImpl {
    pub course_repository: Arc<dyn CourseRepository>,
    pub completion_repository: Arc<dyn CompletionRepository>,
    pub random: Arc<dyn RandomSource>,
    pub logger: Arc<dyn Logger>,
}

impl RecommendDefaultCoursesUseCaseImpl {
    async fn recommend(
        &self,
        user_id: Option<&UserId>,
    ) -> Result<Vec<CourseSummary>, RecommendationError> {
        let completed = match user_id {
            Some(id) => self.completion_repository.get_completed_course_ids(id).await?,
            None => HashSet::new(),
        };

        let mut available: Vec<Course> = self
            .course_repository
            .get_all()
            .await?
            .into_iter()
            .filter(|c| !completed.contains(&c.id))
            .collect();

        if available.is_empty() {
            return Err(RecommendationError::NoCandidatesAtAll);
        }

        rank(&mut available);

        Ok(sample_top(
            &available,
            DEFAULT_TOP_K,
            DEFAULT_SAMPLE_SIZE,
            self.random.as_ref(),
        )
        .into_iter()
        .map(CourseSummary::from)
        .collect())
    }
}

#[async_trait]
impl RecommendDefaultCoursesUseCase for RecommendDefaultCoursesUseCaseImpl {
    async fn execute(&self, params: RecommendDefaultParams) -> Vec<CourseSummary> {
        self.logger.info("Getting default recommendations");

        match self.recommend(params.user_id.as_ref()).await {
            Ok(recommendations) => {
                self.logger.info(&format!(
                    "Returning {} default recommendations",
                    recommendations.len()
                ));
                recommendations
            }
            Err(RecommendationError::NoCandidatesAtAll) => {
                self.logger
                    .info("No available courses for default recommendations");
                vec![]
            }
            Err(err) => {
                self.logger
                    .error(&format!("Error getting default recommendations: {}", err));
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::value_objects::CourseId;
    use crate::domain::errors::RepositoryError;
    use crate::domain::recommendation::random::{SeededRandom, ThreadRandom};
    use crate::test_support::{
        FirstPick, InMemoryCompletionRepository, InMemoryCourseRepository, LastPick,
        MockCompletionRepo, MockCourseRepo, course, mock_logger,
    };

    fn catalog() -> Vec<Course> {
        vec![
            course(1, "Data Analysis", "Beginner", 4.9, 80_000),
            course(2, "Machine Learning", "Advanced", 4.8, 60_000),
            course(3, "Full-Stack Development", "Intermediate", 4.7, 40_000),
            course(4, "Data Analysis", "Advanced", 4.6, 20_000),
            course(5, "Machine Learning", "Beginner", 4.5, 10_000),
            course(6, "Full-Stack Development", "Beginner", 3.0, 1_000),
            course(7, "Programming", "Beginner", 2.0, 500),
        ]
    }

    fn use_case(
        courses: Vec<Course>,
        completions: InMemoryCompletionRepository,
        random: Arc<dyn RandomSource>,
    ) -> RecommendDefaultCoursesUseCaseImpl {
        RecommendDefaultCoursesUseCaseImpl {
            course_repository: Arc::new(InMemoryCourseRepository::new(courses)),
            completion_repository: Arc::new(completions),
            random,
            logger: mock_logger(),
        }
    }

    fn ids(result: &[CourseSummary]) -> Vec<i64> {
        result.iter().map(|c| c.id.value()).collect()
    }

    #[tokio::test]
    async fn should_return_two_courses_from_top_five() {
        let use_case = use_case(
            catalog(),
            InMemoryCompletionRepository::default(),
            Arc::new(ThreadRandom),
        );

        for _ in 0..30 {
            let result = use_case
                .execute(RecommendDefaultParams { user_id: None })
                .await;

            assert_eq!(result.len(), 2);
            assert_ne!(result[0].id, result[1].id);
            assert!(ids(&result).iter().all(|id| *id <= 5));
        }
    }

    #[tokio::test]
    async fn should_return_courses_in_sampled_order() {
        let use_case = use_case(
            catalog(),
            InMemoryCompletionRepository::default(),
            Arc::new(LastPick),
        );

        let result = use_case
            .execute(RecommendDefaultParams { user_id: None })
            .await;

        assert_eq!(ids(&result), vec![5, 4]);
    }

    #[tokio::test]
    async fn should_exclude_completed_courses() {
        let use_case = use_case(
            catalog(),
            InMemoryCompletionRepository::with_completed("learner", &[1, 2]),
            Arc::new(FirstPick),
        );

        let result = use_case
            .execute(RecommendDefaultParams {
                user_id: Some(UserId::new("learner")),
            })
            .await;

        assert_eq!(ids(&result), vec![3, 4]);
    }

    #[tokio::test]
    async fn should_ignore_completions_of_other_users() {
        let use_case = use_case(
            catalog(),
            InMemoryCompletionRepository::with_completed("someone-else", &[1, 2]),
            Arc::new(FirstPick),
        );

        let result = use_case
            .execute(RecommendDefaultParams {
                user_id: Some(UserId::new("learner")),
            })
            .await;

        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[tokio::test]
    async fn should_return_single_course_when_only_one_available() {
        let use_case = use_case(
            catalog(),
            InMemoryCompletionRepository::with_completed("learner", &[1, 2, 3, 4, 5, 6]),
            Arc::new(SeededRandom::new(3)),
        );

        let result = use_case
            .execute(RecommendDefaultParams {
                user_id: Some(UserId::new("learner")),
            })
            .await;

        assert_eq!(ids(&result), vec![7]);
    }

    #[tokio::test]
    async fn should_return_empty_when_everything_completed() {
        let use_case = use_case(
            catalog(),
            InMemoryCompletionRepository::with_completed("learner", &[1, 2, 3, 4, 5, 6, 7]),
            Arc::new(ThreadRandom),
        );

        let result = use_case
            .execute(RecommendDefaultParams {
                user_id: Some(UserId::new("learner")),
            })
            .await;

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_return_empty_when_catalog_is_empty() {
        let use_case = use_case(
            vec![],
            InMemoryCompletionRepository::default(),
            Arc::new(ThreadRandom),
        );

        let result = use_case
            .execute(RecommendDefaultParams { user_id: None })
            .await;

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_return_empty_when_catalog_fails() {
        let mut course_repo = MockCourseRepo::new();
        course_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = RecommendDefaultCoursesUseCaseImpl {
            course_repository: Arc::new(course_repo),
            completion_repository: Arc::new(InMemoryCompletionRepository::default()),
            random: Arc::new(ThreadRandom),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecommendDefaultParams { user_id: None })
            .await;

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_return_empty_when_history_fails() {
        let mut completion_repo = MockCompletionRepo::new();
        completion_repo
            .expect_get_completed_course_ids()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = RecommendDefaultCoursesUseCaseImpl {
            course_repository: Arc::new(InMemoryCourseRepository::new(catalog())),
            completion_repository: Arc::new(completion_repo),
            random: Arc::new(ThreadRandom),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecommendDefaultParams {
                user_id: Some(UserId::new("learner")),
            })
            .await;

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn should_not_read_history_without_user() {
        let mut completion_repo = MockCompletionRepo::new();
        completion_repo.expect_get_completed_course_ids().never();

        let use_case = RecommendDefaultCoursesUseCaseImpl {
            course_repository: Arc::new(InMemoryCourseRepository::new(catalog())),
            completion_repository: Arc::new(completion_repo),
            random: Arc::new(FirstPick),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RecommendDefaultParams { user_id: None })
            .await;

        assert_eq!(
            result.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![CourseId::new(1), CourseId::new(2)]
        );
    }
}
