use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::completion::model::CompletionRecord;
use business::domain::completion::repository::CompletionRepository;
use business::domain::course::value_objects::CourseId;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CompletionEntity;
use crate::database_error;

pub struct CompletionRepositoryPostgres {
    pool: PgPool,
}

impl CompletionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompletionRepository for CompletionRepositoryPostgres {
    async fn get_completed_course_ids(
        &self,
        user_id: &UserId,
    ) -> Result<HashSet<CourseId>, RepositoryError> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT DISTINCT course_id FROM course_completions WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(ids.into_iter().map(CourseId::new).collect())
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<CompletionRecord>, RepositoryError> {
        let entities = sqlx::query_as::<_, CompletionEntity>(
            "SELECT id, user_id, course_id, completed_at, performance_score, feedback FROM course_completions WHERE user_id = $1 ORDER BY completed_at",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<CompletionRecord, RepositoryError> {
        let entity = sqlx::query_as::<_, CompletionEntity>(
            "SELECT id, user_id, course_id, completed_at, performance_score, feedback FROM course_completions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, record: &CompletionRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO course_completions (id, user_id, course_id, completed_at, performance_score, feedback)
            VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(record.id)
        .bind(record.user_id.as_str())
        .bind(record.course_id.value())
        .bind(record.completed_at)
        .bind(record.performance_score)
        .bind(&record.feedback)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "failed to store course completion");
            RepositoryError::Persistence
        })?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM course_completions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to delete course completion");
                RepositoryError::Persistence
            })?;

        Ok(())
    }
}
