use crate::domain::course::model::Course;

const RATING_WEIGHT: f64 = 0.7;
const ADOPTION_WEIGHT: f64 = 0.3;
const STUDENTS_NORMALIZER: f64 = 100_000.0;

/// Popularity and quality score of a course. Higher is better.
pub fn score(course: &Course) -> f64 {
    course.rating * RATING_WEIGHT
        + (course.students_count as f64 / STUDENTS_NORMALIZER) * ADOPTION_WEIGHT
}

/// Sorts courses by descending score. Equal scores keep their order.
pub fn rank(courses: &mut [Course]) {
    courses.sort_by(|a, b| score(b).total_cmp(&score(a)));
}
