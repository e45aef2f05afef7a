use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::CompletionRecord;
use crate::domain::course::value_objects::CourseId;
use crate::domain::recommendation::model::CourseSummary;
use crate::domain::shared::value_objects::UserId;

pub struct RecordCompletionParams {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub performance_score: Option<f64>,
    pub feedback: Option<String>,
}

/// The stored completion plus what to take next.
#[derive(Debug, Clone)]
pub struct RecordedCompletion {
    pub record: CompletionRecord,
    pub recommendations: Vec<CourseSummary>,
}

#[async_trait]
pub trait RecordCompletionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecordCompletionParams,
    ) -> Result<RecordedCompletion, CompletionError>;
}
