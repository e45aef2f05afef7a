use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::completion::model::{CompletedCourse, CompletionRecord};
use business::domain::completion::statistics::{CompletionStatistics, ProgressEntry};
use business::domain::completion::use_cases::record::RecordedCompletion;

use crate::api::recommendation::dto::CourseSummaryResponse;

#[derive(Debug, Clone, Object)]
pub struct RecordCompletionRequest {
    /// Learner identifier (cannot be empty)
    pub user_id: String,
    /// Completed catalog course
    pub course_id: i64,
    /// Score between 0 and 100
    #[oai(skip_serializing_if_is_none)]
    pub performance_score: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct CompletionResponse {
    pub id: String,
    pub user_id: String,
    pub course_id: i64,
    pub completed_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub performance_score: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub feedback: Option<String>,
}

impl From<CompletionRecord> for CompletionResponse {
    fn from(record: CompletionRecord) -> Self {
        Self {
            id: record.id.to_string(),
            user_id: record.user_id.to_string(),
            course_id: record.course_id.value(),
            completed_at: record.completed_at,
            performance_score: record.performance_score,
            feedback: record.feedback,
        }
    }
}

/// Stored completion with the suggested next courses.
#[derive(Debug, Clone, Object)]
pub struct RecordedCompletionResponse {
    pub completion: CompletionResponse,
    pub recommendations: Vec<CourseSummaryResponse>,
}

impl From<RecordedCompletion> for RecordedCompletionResponse {
    fn from(recorded: RecordedCompletion) -> Self {
        Self {
            completion: recorded.record.into(),
            recommendations: recorded
                .recommendations
                .into_iter()
                .map(CourseSummaryResponse::from)
                .collect(),
        }
    }
}

/// A completion joined with its course.
#[derive(Debug, Clone, Object)]
pub struct CompletedCourseResponse {
    pub id: String,
    pub course_id: i64,
    pub course_name: String,
    pub domain: String,
    pub duration: u32,
    pub difficulty: String,
    pub completed_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub performance_score: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub feedback: Option<String>,
}

impl From<CompletedCourse> for CompletedCourseResponse {
    fn from(completed: CompletedCourse) -> Self {
        let CompletedCourse { record, course } = completed;
        Self {
            id: record.id.to_string(),
            course_id: course.id.value(),
            course_name: course.name,
            domain: course.domain,
            duration: course.duration,
            difficulty: course.difficulty,
            completed_at: record.completed_at,
            performance_score: record.performance_score,
            feedback: record.feedback,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProgressEntryResponse {
    pub completed_at: DateTime<Utc>,
    pub course_name: String,
    pub domain: String,
    pub difficulty: String,
    #[oai(skip_serializing_if_is_none)]
    pub performance_score: Option<f64>,
}

impl From<ProgressEntry> for ProgressEntryResponse {
    fn from(entry: ProgressEntry) -> Self {
        Self {
            completed_at: entry.completed_at,
            course_name: entry.course_name,
            domain: entry.domain,
            difficulty: entry.difficulty,
            performance_score: entry.performance_score,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StatisticsResponse {
    pub total_courses: u64,
    /// Completions per course domain
    pub domains: BTreeMap<String, u64>,
    /// Completions per difficulty label
    pub difficulty_levels: BTreeMap<String, u64>,
    pub average_score: f64,
    /// Completions ordered by date
    pub progress: Vec<ProgressEntryResponse>,
}

fn counts(map: BTreeMap<String, usize>) -> BTreeMap<String, u64> {
    map.into_iter().map(|(k, v)| (k, v as u64)).collect()
}

impl From<CompletionStatistics> for StatisticsResponse {
    fn from(stats: CompletionStatistics) -> Self {
        Self {
            total_courses: stats.total_courses as u64,
            domains: counts(stats.domains),
            difficulty_levels: counts(stats.difficulty_levels),
            average_score: stats.average_score,
            progress: stats.progress.into_iter().map(Into::into).collect(),
        }
    }
}
