use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CompletionError;
use crate::domain::course::model::Course;
use crate::domain::course::value_objects::CourseId;
use crate::domain::shared::value_objects::UserId;

const MAX_PERFORMANCE_SCORE: f64 = 100.0;

/// A user finished a course.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRecord {
    pub id: Uuid,
    pub user_id: UserId,
    pub course_id: CourseId,
    pub completed_at: DateTime<Utc>,
    pub performance_score: Option<f64>,
    pub feedback: Option<String>,
}

pub struct NewCompletionProps {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub performance_score: Option<f64>,
    pub feedback: Option<String>,
}

impl CompletionRecord {
    pub fn new(props: NewCompletionProps) -> Result<Self, CompletionError> {
        if let Some(score) = props.performance_score {
            if !score.is_finite() || !(0.0..=MAX_PERFORMANCE_SCORE).contains(&score) {
                return Err(CompletionError::InvalidPerformanceScore);
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            course_id: props.course_id,
            completed_at: Utc::now(),
            performance_score: props.performance_score,
            feedback: props
                .feedback
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        course_id: CourseId,
        completed_at: DateTime<Utc>,
        performance_score: Option<f64>,
        feedback: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            course_id,
            completed_at,
            performance_score,
            feedback,
        }
    }
}

/// A completion joined with the catalog entry it refers to.
#[derive(Debug, Clone)]
pub struct CompletedCourse {
    pub record: CompletionRecord,
    pub course: Course,
}

/// Pairs each record with its course. Records whose course is no longer in
/// the catalog are dropped.
pub fn attach_courses(records: Vec<CompletionRecord>, catalog: Vec<Course>) -> Vec<CompletedCourse> {
    let courses: std::collections::HashMap<CourseId, Course> =
        catalog.into_iter().map(|c| (c.id, c)).collect();

    records
        .into_iter()
        .filter_map(|record| {
            courses.get(&record.course_id).map(|course| CompletedCourse {
                course: course.clone(),
                record,
            })
        })
        .collect()
}
