use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::course::value_objects::CourseId;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CompletionRecord;

/// Completion history per user.
#[async_trait]
pub trait CompletionRepository: Send + Sync {
    async fn get_completed_course_ids(
        &self,
        user_id: &UserId,
    ) -> Result<HashSet<CourseId>, RepositoryError>;
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<CompletionRecord>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<CompletionRecord, RepositoryError>;
    async fn save(&self, record: &CompletionRecord) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
