use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::course::model::Course;
use business::domain::course::repository::CourseRepository;
use business::domain::course::value_objects::{CourseId, Difficulty};
use business::domain::errors::RepositoryError;

use super::entity::CourseEntity;
use crate::database_error;

const COURSE_COLUMNS: &str = "id, name, domain, duration, difficulty, prerequisites, description, instructor, rating, students_count, price, url";

pub struct CourseRepositoryPostgres {
    pool: PgPool,
}

impl CourseRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for CourseRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Course>, RepositoryError> {
        let entities = sqlx::query_as::<_, CourseEntity>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: CourseId) -> Result<Course, RepositoryError> {
        let entity = sqlx::query_as::<_, CourseEntity>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_domain(&self, domain: &str) -> Result<Vec<Course>, RepositoryError> {
        let entities = sqlx::query_as::<_, CourseEntity>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE domain = $1 ORDER BY id"
        ))
        .bind(domain)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_domain_and_difficulty(
        &self,
        domain: &str,
        difficulty: Difficulty,
    ) -> Result<Vec<Course>, RepositoryError> {
        let entities = sqlx::query_as::<_, CourseEntity>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE domain = $1 AND LOWER(difficulty) = LOWER($2) ORDER BY id"
        ))
        .bind(domain)
        .bind(difficulty.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
