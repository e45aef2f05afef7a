//! Fakes and mocks shared by the unit tests of this crate.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use crate::domain::completion::model::CompletionRecord;
use crate::domain::completion::repository::CompletionRepository;
use crate::domain::course::model::Course;
use crate::domain::course::repository::CourseRepository;
use crate::domain::course::value_objects::{CourseId, Difficulty};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recommendation::random::RandomSource;
use crate::domain::shared::value_objects::UserId;

pub fn course(id: i64, domain: &str, difficulty: &str, rating: f64, students_count: u64) -> Course {
    Course {
        id: CourseId::new(id),
        name: format!("{} {} #{}", domain, difficulty, id),
        domain: domain.to_string(),
        duration: 10,
        difficulty: difficulty.to_string(),
        prerequisites: None,
        description: None,
        instructor: Some("Instructor".to_string()),
        rating,
        students_count,
        price: 0.0,
        url: None,
    }
}

/// Always takes the best-ranked candidates.
pub struct FirstPick;

impl RandomSource for FirstPick {
    fn pick(&self, _len: usize) -> usize {
        0
    }

    fn sample(&self, _len: usize, amount: usize) -> Vec<usize> {
        (0..amount).collect()
    }
}

/// Always takes the worst candidates of the slice, last one first.
pub struct LastPick;

impl RandomSource for LastPick {
    fn pick(&self, len: usize) -> usize {
        len - 1
    }

    fn sample(&self, len: usize, amount: usize) -> Vec<usize> {
        (len - amount..len).rev().collect()
    }
}

pub struct InMemoryCourseRepository {
    courses: Vec<Course>,
}

impl InMemoryCourseRepository {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn get_all(&self) -> Result<Vec<Course>, RepositoryError> {
        Ok(self.courses.clone())
    }

    async fn get_by_id(&self, id: CourseId) -> Result<Course, RepositoryError> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_domain(&self, domain: &str) -> Result<Vec<Course>, RepositoryError> {
        Ok(self
            .courses
            .iter()
            .filter(|c| c.domain == domain)
            .cloned()
            .collect())
    }

    async fn get_by_domain_and_difficulty(
        &self,
        domain: &str,
        difficulty: Difficulty,
    ) -> Result<Vec<Course>, RepositoryError> {
        Ok(self
            .courses
            .iter()
            .filter(|c| c.domain == domain && c.has_difficulty(difficulty))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryCompletionRepository {
    records: Mutex<Vec<CompletionRecord>>,
}

impl InMemoryCompletionRepository {
    pub fn with_completed(user_id: &str, course_ids: &[i64]) -> Self {
        let records = course_ids
            .iter()
            .map(|id| {
                CompletionRecord::from_repository(
                    Uuid::new_v4(),
                    UserId::new(user_id),
                    CourseId::new(*id),
                    Utc::now(),
                    None,
                    None,
                )
            })
            .collect();
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn records(&self) -> Vec<CompletionRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionRepository for InMemoryCompletionRepository {
    async fn get_completed_course_ids(
        &self,
        user_id: &UserId,
    ) -> Result<HashSet<CourseId>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.user_id == user_id)
            .map(|r| r.course_id)
            .collect())
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<CompletionRecord>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<CompletionRecord, RepositoryError> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, record: &CompletionRecord) -> Result<(), RepositoryError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.records.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

mock! {
    pub CourseRepo {}

    #[async_trait]
    impl CourseRepository for CourseRepo {
        async fn get_all(&self) -> Result<Vec<Course>, RepositoryError>;
        async fn get_by_id(&self, id: CourseId) -> Result<Course, RepositoryError>;
        async fn get_by_domain(&self, domain: &str) -> Result<Vec<Course>, RepositoryError>;
        async fn get_by_domain_and_difficulty(
            &self,
            domain: &str,
            difficulty: Difficulty,
        ) -> Result<Vec<Course>, RepositoryError>;
    }
}

mock! {
    pub CompletionRepo {}

    #[async_trait]
    impl CompletionRepository for CompletionRepo {
        async fn get_completed_course_ids(
            &self,
            user_id: &UserId,
        ) -> Result<HashSet<CourseId>, RepositoryError>;
        async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<CompletionRecord>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<CompletionRecord, RepositoryError>;
        async fn save(&self, record: &CompletionRecord) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}
