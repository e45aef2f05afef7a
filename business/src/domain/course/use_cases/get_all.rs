use async_trait::async_trait;

use crate::domain::course::errors::CourseError;
use crate::domain::course::model::Course;

#[async_trait]
pub trait GetAllCoursesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Course>, CourseError>;
}
