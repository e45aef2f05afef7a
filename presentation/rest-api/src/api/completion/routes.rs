use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::completion::use_cases::delete::{
    DeleteCompletionParams, DeleteCompletionUseCase,
};
use business::domain::completion::use_cases::get_by_user::{
    GetUserCompletionsParams, GetUserCompletionsUseCase,
};
use business::domain::completion::use_cases::get_statistics::{
    GetCompletionStatisticsParams, GetCompletionStatisticsUseCase,
};
use business::domain::completion::use_cases::record::{
    RecordCompletionParams, RecordCompletionUseCase,
};
use business::domain::course::value_objects::CourseId;
use business::domain::shared::value_objects::UserId;

use crate::api::completion::dto::{
    CompletedCourseResponse, RecordCompletionRequest, RecordedCompletionResponse,
    StatisticsResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recommendation::dto::user_id_from;
use crate::api::tags::ApiTags;

pub struct CompletionApi {
    record_use_case: Arc<dyn RecordCompletionUseCase>,
    get_by_user_use_case: Arc<dyn GetUserCompletionsUseCase>,
    get_statistics_use_case: Arc<dyn GetCompletionStatisticsUseCase>,
    delete_use_case: Arc<dyn DeleteCompletionUseCase>,
}

impl CompletionApi {
    pub fn new(
        record_use_case: Arc<dyn RecordCompletionUseCase>,
        get_by_user_use_case: Arc<dyn GetUserCompletionsUseCase>,
        get_statistics_use_case: Arc<dyn GetCompletionStatisticsUseCase>,
        delete_use_case: Arc<dyn DeleteCompletionUseCase>,
    ) -> Self {
        Self {
            record_use_case,
            get_by_user_use_case,
            get_statistics_use_case,
            delete_use_case,
        }
    }
}

/// Course completion API
#[OpenApi]
impl CompletionApi {
    /// Record a course completion
    ///
    /// Stores the completion and answers with up to two follow-on courses
    /// the learner has not completed yet.
    #[oai(path = "/completions", method = "post", tag = "ApiTags::Completions")]
    async fn record_completion(
        &self,
        body: Json<RecordCompletionRequest>,
    ) -> RecordCompletionResponse {
        let body = body.0;
        let Some(user_id) = user_id_from(Some(body.user_id)) else {
            return RecordCompletionResponse::BadRequest(ErrorResponse::validation(
                "completion.user_id_empty",
            ));
        };

        let params = RecordCompletionParams {
            user_id,
            course_id: CourseId::new(body.course_id),
            performance_score: body.performance_score,
            feedback: body.feedback,
        };

        match self.record_use_case.execute(params).await {
            Ok(recorded) => RecordCompletionResponse::Created(Json(recorded.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RecordCompletionResponse::BadRequest(json),
                    404 => RecordCompletionResponse::NotFound(json),
                    _ => RecordCompletionResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a completion
    ///
    /// Only the learner who recorded the completion may delete it. The
    /// course becomes recommendable to that learner again.
    #[oai(path = "/completions/:id", method = "delete", tag = "ApiTags::Completions")]
    async fn delete_completion(
        &self,
        id: Path<String>,
        user_id: Query<Option<String>>,
    ) -> DeleteCompletionResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteCompletionResponse::BadRequest(ErrorResponse::validation(
                "completion.invalid_id",
            ));
        };
        let Some(user_id) = user_id_from(user_id.0) else {
            return DeleteCompletionResponse::BadRequest(ErrorResponse::validation(
                "completion.user_id_empty",
            ));
        };

        match self
            .delete_use_case
            .execute(DeleteCompletionParams { id, user_id })
            .await
        {
            Ok(()) => DeleteCompletionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteCompletionResponse::Forbidden(json),
                    404 => DeleteCompletionResponse::NotFound(json),
                    _ => DeleteCompletionResponse::InternalError(json),
                }
            }
        }
    }

    /// List a learner's completions
    ///
    /// Each entry carries the details of the completed course.
    #[oai(
        path = "/users/:user_id/completions",
        method = "get",
        tag = "ApiTags::Completions"
    )]
    async fn get_user_completions(&self, user_id: Path<String>) -> GetUserCompletionsResponse {
        match self
            .get_by_user_use_case
            .execute(GetUserCompletionsParams {
                user_id: UserId::new(user_id.0),
            })
            .await
        {
            Ok(completions) => GetUserCompletionsResponse::Ok(Json(
                completions
                    .into_iter()
                    .map(CompletedCourseResponse::from)
                    .collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetUserCompletionsResponse::InternalError(json)
            }
        }
    }

    /// Completion statistics for a learner
    ///
    /// Totals per domain and difficulty, the average performance score and
    /// the progress timeline.
    #[oai(
        path = "/users/:user_id/statistics",
        method = "get",
        tag = "ApiTags::Completions"
    )]
    async fn get_statistics(&self, user_id: Path<String>) -> GetStatisticsResponse {
        match self
            .get_statistics_use_case
            .execute(GetCompletionStatisticsParams {
                user_id: UserId::new(user_id.0),
            })
            .await
        {
            Ok(stats) => GetStatisticsResponse::Ok(Json(stats.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetStatisticsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecordCompletionResponse {
    #[oai(status = 201)]
    Created(Json<RecordedCompletionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCompletionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetUserCompletionsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CompletedCourseResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStatisticsResponse {
    #[oai(status = 200)]
    Ok(Json<StatisticsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
