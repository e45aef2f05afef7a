#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("completion.invalid_performance_score")]
    InvalidPerformanceScore,
    #[error("completion.course_not_found")]
    CourseNotFound,
    #[error("completion.not_found")]
    NotFound,
    #[error("completion.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
