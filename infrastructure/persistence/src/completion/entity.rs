use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::completion::model::CompletionRecord;
use business::domain::course::value_objects::CourseId;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CompletionEntity {
    pub id: Uuid,
    pub user_id: String,
    pub course_id: i64,
    pub completed_at: DateTime<Utc>,
    pub performance_score: Option<f64>,
    pub feedback: Option<String>,
}

impl CompletionEntity {
    pub fn into_domain(self) -> CompletionRecord {
        CompletionRecord::from_repository(
            self.id,
            UserId::new(self.user_id),
            CourseId::new(self.course_id),
            self.completed_at,
            self.performance_score,
            self.feedback,
        )
    }
}
