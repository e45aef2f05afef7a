use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::course::value_objects::CourseId;
use business::domain::recommendation::model::CourseSummary;
use business::domain::recommendation::use_cases::recommend::RecommendCoursesUseCase;
use business::domain::recommendation::use_cases::recommend_default::{
    RecommendDefaultCoursesUseCase, RecommendDefaultParams,
};
use business::domain::recommendation::use_cases::recommend_for_course::{
    RecommendForCourseParams, RecommendForCourseUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::{
    CourseSummaryResponse, RecommendationRequestBody, user_id_from,
};
use crate::api::tags::ApiTags;

pub struct RecommendationApi {
    recommend_use_case: Arc<dyn RecommendCoursesUseCase>,
    recommend_default_use_case: Arc<dyn RecommendDefaultCoursesUseCase>,
    recommend_for_course_use_case: Arc<dyn RecommendForCourseUseCase>,
}

impl RecommendationApi {
    pub fn new(
        recommend_use_case: Arc<dyn RecommendCoursesUseCase>,
        recommend_default_use_case: Arc<dyn RecommendDefaultCoursesUseCase>,
        recommend_for_course_use_case: Arc<dyn RecommendForCourseUseCase>,
    ) -> Self {
        Self {
            recommend_use_case,
            recommend_default_use_case,
            recommend_for_course_use_case,
        }
    }
}

fn to_responses(summaries: Vec<CourseSummary>) -> Vec<CourseSummaryResponse> {
    summaries.into_iter().map(CourseSummaryResponse::from).collect()
}

/// Next-course recommendation API
///
/// Every endpoint answers with at most two courses. An empty list means the
/// catalog has nothing left to suggest.
#[OpenApi]
impl RecommendationApi {
    /// Recommend after a completion
    ///
    /// Suggests follow-on courses for the domain and difficulty of a
    /// completed course, skipping the learner's completed courses.
    #[oai(path = "/recommendations", method = "post", tag = "ApiTags::Recommendations")]
    async fn recommend(
        &self,
        body: Json<RecommendationRequestBody>,
    ) -> Json<Vec<CourseSummaryResponse>> {
        let recommendations = self.recommend_use_case.execute(body.0.into()).await;
        Json(to_responses(recommendations))
    }

    /// Catalog-wide recommendations
    ///
    /// Picks among the best-rated courses of the whole catalog.
    #[oai(
        path = "/recommendations/default",
        method = "get",
        tag = "ApiTags::Recommendations"
    )]
    async fn recommend_default(
        &self,
        user_id: Query<Option<String>>,
    ) -> Json<Vec<CourseSummaryResponse>> {
        let recommendations = self
            .recommend_default_use_case
            .execute(RecommendDefaultParams {
                user_id: user_id_from(user_id.0),
            })
            .await;
        Json(to_responses(recommendations))
    }

    /// Recommend after a catalog course
    ///
    /// Uses the domain and difficulty of the given course.
    #[oai(
        path = "/courses/:id/recommendations",
        method = "get",
        tag = "ApiTags::Recommendations"
    )]
    async fn recommend_for_course(&self, id: Path<i64>) -> RecommendForCourseResponse {
        match self
            .recommend_for_course_use_case
            .execute(RecommendForCourseParams {
                course_id: CourseId::new(id.0),
            })
            .await
        {
            Ok(recommendations) => RecommendForCourseResponse::Ok(Json(to_responses(recommendations))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RecommendForCourseResponse::NotFound(json),
                    _ => RecommendForCourseResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecommendForCourseResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CourseSummaryResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
