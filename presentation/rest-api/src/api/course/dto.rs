use poem_openapi::Object;

use business::domain::course::model::Course;

/// A catalog course as shown to learners.
#[derive(Debug, Clone, Object)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub domain: String,
    /// Duration in hours
    pub duration: u32,
    /// Beginner, Intermediate or Advanced
    pub difficulty: String,
    #[oai(skip_serializing_if_is_none)]
    pub prerequisites: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub instructor: Option<String>,
    pub rating: f64,
    pub students_count: u64,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub url: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.value(),
            name: course.name,
            domain: course.domain,
            duration: course.duration,
            difficulty: course.difficulty,
            prerequisites: course.prerequisites,
            description: course.description,
            instructor: course.instructor,
            rating: course.rating,
            students_count: course.students_count,
            price: course.price,
            url: course.url,
        }
    }
}
