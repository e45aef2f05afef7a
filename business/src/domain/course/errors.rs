#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("course.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
