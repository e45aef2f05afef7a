use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::course::use_cases::get_all::GetAllCoursesUseCase;
use business::domain::course::use_cases::get_by_id::{GetCourseByIdParams, GetCourseByIdUseCase};
use business::domain::course::value_objects::CourseId;

use crate::api::course::dto::CourseResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CourseApi {
    get_all_use_case: Arc<dyn GetAllCoursesUseCase>,
    get_by_id_use_case: Arc<dyn GetCourseByIdUseCase>,
}

impl CourseApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllCoursesUseCase>,
        get_by_id_use_case: Arc<dyn GetCourseByIdUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Course catalog API
#[OpenApi]
impl CourseApi {
    /// List all courses
    ///
    /// Returns the whole catalog ordered by identifier.
    #[oai(path = "/courses", method = "get", tag = "ApiTags::Courses")]
    async fn get_all_courses(&self) -> GetAllCoursesResponse {
        match self.get_all_use_case.execute().await {
            Ok(courses) => GetAllCoursesResponse::Ok(Json(
                courses.into_iter().map(CourseResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCoursesResponse::InternalError(json)
            }
        }
    }

    /// Get a course by ID
    #[oai(path = "/courses/:id", method = "get", tag = "ApiTags::Courses")]
    async fn get_course_by_id(&self, id: Path<i64>) -> GetCourseByIdResponse {
        match self
            .get_by_id_use_case
            .execute(GetCourseByIdParams {
                id: CourseId::new(id.0),
            })
            .await
        {
            Ok(course) => GetCourseByIdResponse::Ok(Json(course.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCourseByIdResponse::NotFound(json),
                    _ => GetCourseByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllCoursesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CourseResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCourseByIdResponse {
    #[oai(status = 200)]
    Ok(Json<CourseResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
