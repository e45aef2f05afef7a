use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::course::errors::CourseError;
use crate::domain::course::model::Course;
use crate::domain::course::repository::CourseRepository;
use crate::domain::course::use_cases::get_by_id::{GetCourseByIdParams, GetCourseByIdUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetCourseByIdUseCaseImpl {
    pub repository: Arc<dyn CourseRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCourseByIdUseCase for GetCourseByIdUseCaseImpl {
    async fn execute(&self, params: GetCourseByIdParams) -> Result<Course, CourseError> {
        self.logger
            .info(&format!("Fetching course by id: {}", params.id));

        let course = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CourseError::NotFound,
                other => CourseError::Repository(other),
            })?;

        Ok(course)
    }
}
