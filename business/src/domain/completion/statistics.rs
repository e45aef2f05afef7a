use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::model::CompletedCourse;

/// One point of a learner's progress timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEntry {
    pub completed_at: DateTime<Utc>,
    pub course_name: String,
    pub domain: String,
    pub difficulty: String,
    pub performance_score: Option<f64>,
}

/// Aggregated view over a user's completions.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionStatistics {
    pub total_courses: usize,
    pub domains: BTreeMap<String, usize>,
    pub difficulty_levels: BTreeMap<String, usize>,
    pub average_score: f64,
    pub progress: Vec<ProgressEntry>,
}

/// Builds the statistics for a set of completions.
///
/// The average divides the sum of the recorded scores by the number of
/// completions, so completions without a score pull the average down.
pub fn compute_statistics(completions: &[CompletedCourse]) -> CompletionStatistics {
    let mut domains = BTreeMap::new();
    let mut difficulty_levels = BTreeMap::new();
    let mut score_sum = 0.0;

    for entry in completions {
        *domains.entry(entry.course.domain.clone()).or_insert(0) += 1;
        *difficulty_levels
            .entry(entry.course.difficulty.clone())
            .or_insert(0) += 1;
        score_sum += entry.record.performance_score.unwrap_or(0.0);
    }

    let average_score = if completions.is_empty() {
        0.0
    } else {
        score_sum / completions.len() as f64
    };

    let mut progress: Vec<ProgressEntry> = completions
        .iter()
        .map(|entry| ProgressEntry {
            completed_at: entry.record.completed_at,
            course_name: entry.course.name.clone(),
            domain: entry.course.domain.clone(),
            difficulty: entry.course.difficulty.clone(),
            performance_score: entry.record.performance_score,
        })
        .collect();
    progress.sort_by_key(|p| p.completed_at);

    CompletionStatistics {
        total_courses: completions.len(),
        domains,
        difficulty_levels,
        average_score,
        progress,
    }
}
