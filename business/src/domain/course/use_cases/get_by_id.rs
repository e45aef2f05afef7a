use async_trait::async_trait;

use crate::domain::course::errors::CourseError;
use crate::domain::course::model::Course;
use crate::domain::course::value_objects::CourseId;

pub struct GetCourseByIdParams {
    pub id: CourseId,
}

#[async_trait]
pub trait GetCourseByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCourseByIdParams) -> Result<Course, CourseError>;
}
