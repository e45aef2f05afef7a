use std::sync::Arc;

use logger::TracingLogger;
use persistence::completion::repository::CompletionRepositoryPostgres;
use persistence::course::repository::CourseRepositoryPostgres;

use business::application::completion::delete::DeleteCompletionUseCaseImpl;
use business::application::completion::get_by_user::GetUserCompletionsUseCaseImpl;
use business::application::completion::get_statistics::GetCompletionStatisticsUseCaseImpl;
use business::application::completion::record::RecordCompletionUseCaseImpl;
use business::application::course::get_all::GetAllCoursesUseCaseImpl;
use business::application::course::get_by_id::GetCourseByIdUseCaseImpl;
use business::application::recommendation::recommend::RecommendCoursesUseCaseImpl;
use business::application::recommendation::recommend_default::RecommendDefaultCoursesUseCaseImpl;
use business::application::recommendation::recommend_for_course::RecommendForCourseUseCaseImpl;

use crate::api::completion::routes::CompletionApi;
use crate::api::course::routes::CourseApi;
use crate::api::health::routes::Api as HealthApi;
use crate::api::recommendation::routes::RecommendationApi;
use crate::config::recommendation_config::RecommendationConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub course_api: CourseApi,
    pub recommendation_api: RecommendationApi,
    pub completion_api: CompletionApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, recommendation_config: &RecommendationConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let course_repository = Arc::new(CourseRepositoryPostgres::new(pool.clone()));
        let completion_repository = Arc::new(CompletionRepositoryPostgres::new(pool));
        let random = recommendation_config.random_source();

        // Recommendation use cases
        let recommend_default_use_case = Arc::new(RecommendDefaultCoursesUseCaseImpl {
            course_repository: course_repository.clone(),
            completion_repository: completion_repository.clone(),
            random: random.clone(),
            logger: logger.clone(),
        });
        let recommend_use_case = Arc::new(RecommendCoursesUseCaseImpl {
            course_repository: course_repository.clone(),
            completion_repository: completion_repository.clone(),
            default_recommender: recommend_default_use_case.clone(),
            random,
            logger: logger.clone(),
        });
        let recommend_for_course_use_case = Arc::new(RecommendForCourseUseCaseImpl {
            repository: course_repository.clone(),
            recommender: recommend_use_case.clone(),
            logger: logger.clone(),
        });

        // Course use cases
        let get_all_courses_use_case = Arc::new(GetAllCoursesUseCaseImpl {
            repository: course_repository.clone(),
            logger: logger.clone(),
        });
        let get_course_by_id_use_case = Arc::new(GetCourseByIdUseCaseImpl {
            repository: course_repository.clone(),
            logger: logger.clone(),
        });

        // Completion use cases
        let record_completion_use_case = Arc::new(RecordCompletionUseCaseImpl {
            course_repository: course_repository.clone(),
            completion_repository: completion_repository.clone(),
            recommender: recommend_use_case.clone(),
            logger: logger.clone(),
        });
        let get_user_completions_use_case = Arc::new(GetUserCompletionsUseCaseImpl {
            course_repository: course_repository.clone(),
            completion_repository: completion_repository.clone(),
            logger: logger.clone(),
        });
        let get_statistics_use_case = Arc::new(GetCompletionStatisticsUseCaseImpl {
            course_repository,
            completion_repository: completion_repository.clone(),
            logger: logger.clone(),
        });
        let delete_completion_use_case = Arc::new(DeleteCompletionUseCaseImpl {
            repository: completion_repository,
            logger,
        });

        let course_api = CourseApi::new(get_all_courses_use_case, get_course_by_id_use_case);

        let recommendation_api = RecommendationApi::new(
            recommend_use_case,
            recommend_default_use_case,
            recommend_for_course_use_case,
        );

        let completion_api = CompletionApi::new(
            record_completion_use_case,
            get_user_completions_use_case,
            get_statistics_use_case,
            delete_completion_use_case,
        );

        Self {
            health_api,
            course_api,
            recommendation_api,
            completion_api,
        }
    }
}
