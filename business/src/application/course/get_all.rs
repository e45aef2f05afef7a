use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::course::errors::CourseError;
use crate::domain::course::model::Course;
use crate::domain::course::repository::CourseRepository;
use crate::domain::course::use_cases::get_all::GetAllCoursesUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCoursesUseCaseImpl {
    pub repository: Arc<dyn CourseRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCoursesUseCase for GetAllCoursesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Course>, CourseError> {
        self.logger.info("Fetching course catalog");
        let courses = self.repository.get_all().await?;
        self.logger
            .info(&format!("Returning {} courses", courses.len()));
        Ok(courses)
    }
}
