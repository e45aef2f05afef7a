use sqlx::FromRow;

use business::domain::course::model::Course;
use business::domain::course::value_objects::CourseId;

#[derive(Debug, FromRow)]
pub struct CourseEntity {
    pub id: i64,
    pub name: String,
    pub domain: String,
    pub duration: i32,
    pub difficulty: String,
    pub prerequisites: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub rating: f64,
    pub students_count: i64,
    pub price: f64,
    pub url: Option<String>,
}

impl CourseEntity {
    pub fn into_domain(self) -> Course {
        Course {
            id: CourseId::new(self.id),
            name: self.name,
            domain: self.domain,
            duration: u32::try_from(self.duration).unwrap_or(0),
            difficulty: self.difficulty,
            prerequisites: self.prerequisites,
            description: self.description,
            instructor: self.instructor,
            rating: self.rating,
            students_count: u64::try_from(self.students_count).unwrap_or(0),
            price: self.price,
            url: self.url,
        }
    }
}
