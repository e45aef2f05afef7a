use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Course;
use super::value_objects::{CourseId, Difficulty};

/// Read access to the course catalog.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Course>, RepositoryError>;
    async fn get_by_id(&self, id: CourseId) -> Result<Course, RepositoryError>;
    async fn get_by_domain(&self, domain: &str) -> Result<Vec<Course>, RepositoryError>;
    async fn get_by_domain_and_difficulty(
        &self,
        domain: &str,
        difficulty: Difficulty,
    ) -> Result<Vec<Course>, RepositoryError>;
}
