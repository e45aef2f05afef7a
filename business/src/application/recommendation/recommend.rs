use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::repository::CompletionRepository;
use crate::domain::course::model::Course;
use crate::domain::course::repository::CourseRepository;
use crate::domain::course::value_objects::{CourseId, Difficulty};
use crate::domain::logger::Logger;
use crate::domain::recommendation::adjacency::related_domains;
use crate::domain::recommendation::errors::RecommendationError;
use crate::domain::recommendation::model::{CourseSummary, RecommendationRequest};
use crate::domain::recommendation::random::RandomSource;
use crate::domain::recommendation::scoring::rank;
use crate::domain::recommendation::selection::{SLOT_TOP_K, pick_one_of_top};
use crate::domain::recommendation::use_cases::recommend::RecommendCoursesUseCase;
use crate::domain::recommendation::use_cases::recommend_default::{
    RecommendDefaultCoursesUseCase, RecommendDefaultParams,
};
use crate::domain::shared::value_objects::UserId;

/// Recommendation engine: domain and difficulty driven suggestions with a
/// catalog-wide fallback.
pub struct RecommendCoursesUseCaseImpl {
    pub course_repository: Arc<dyn CourseRepository>,
    pub completion_repository: Arc<dyn CompletionRepository>,
    pub default_recommender: Arc<dyn RecommendDefaultCoursesUseCase>,
    pub random: Arc<dyn RandomSource>,
    pub logger: Arc<dyn Logger>,
}

fn of_difficulty(ranked: &[Course], difficulty: Difficulty) -> Vec<Course> {
    ranked
        .iter()
        .filter(|c| c.has_difficulty(difficulty))
        .cloned()
        .collect()
}

impl RecommendCoursesUseCaseImpl {
    async fn completed_course_ids(
        &self,
        user_id: Option<&UserId>,
    ) -> Result<HashSet<CourseId>, RecommendationError> {
        match user_id {
            Some(id) => {
                let completed = self.completion_repository.get_completed_course_ids(id).await?;
                self.logger
                    .debug(&format!("User has completed {} courses", completed.len()));
                Ok(completed)
            }
            None => Ok(HashSet::new()),
        }
    }

    /// Ranked courses of `difficulty` across the domains related to `domain`.
    async fn related_domain_pool(
        &self,
        domain: &str,
        difficulty: Difficulty,
        completed: &HashSet<CourseId>,
    ) -> Result<Vec<Course>, RecommendationError> {
        let mut pool = Vec::new();
        for related in related_domains(domain) {
            let courses = self
                .course_repository
                .get_by_domain_and_difficulty(related, difficulty)
                .await?;
            pool.extend(courses.into_iter().filter(|c| !completed.contains(&c.id)));
        }
        rank(&mut pool);
        Ok(pool)
    }

    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<CourseSummary>, RecommendationError> {
        let domain_courses = self.course_repository.get_by_domain(&request.domain).await?;
        self.logger.debug(&format!(
            "Found {} courses in domain {}",
            domain_courses.len(),
            request.domain
        ));
        if domain_courses.is_empty() {
            return Err(RecommendationError::EmptyCatalogForDomain);
        }

        let completed = self.completed_course_ids(request.user_id.as_ref()).await?;

        let mut ranked: Vec<Course> = domain_courses
            .into_iter()
            .filter(|c| !completed.contains(&c.id))
            .collect();
        if ranked.is_empty() {
            return Err(RecommendationError::AllCandidatesExcluded);
        }
        rank(&mut ranked);

        // Same-domain slot first, then the stretch or related-domain slot.
        let (first, second) = match Difficulty::from_request(&request.difficulty) {
            Difficulty::Intermediate => (
                of_difficulty(&ranked, Difficulty::Intermediate),
                of_difficulty(&ranked, Difficulty::Advanced),
            ),
            Difficulty::Advanced => (
                of_difficulty(&ranked, Difficulty::Advanced),
                self.related_domain_pool(&request.domain, Difficulty::Advanced, &completed)
                    .await?,
            ),
            Difficulty::Beginner => (
                of_difficulty(&ranked, Difficulty::Intermediate),
                self.related_domain_pool(&request.domain, Difficulty::Beginner, &completed)
                    .await?,
            ),
        };
        self.logger.debug(&format!(
            "Candidate slots hold {} and {} courses",
            first.len(),
            second.len()
        ));

        let recommendations: Vec<CourseSummary> = [first, second]
            .iter()
            .filter_map(|pool| pick_one_of_top(pool, SLOT_TOP_K, self.random.as_ref()))
            .map(CourseSummary::from)
            .collect();

        if recommendations.is_empty() {
            return Err(RecommendationError::NoMatchingCandidates);
        }
        Ok(recommendations)
    }
}

#[async_trait]
impl RecommendCoursesUseCase for RecommendCoursesUseCaseImpl {
    async fn execute(&self, request: RecommendationRequest) -> Vec<CourseSummary> {
        self.logger.info(&format!(
            "Getting recommendations for domain: {}, difficulty: {}",
            request.domain, request.difficulty
        ));

        match self.recommend(&request).await {
            Ok(recommendations) => {
                self.logger.info(&format!(
                    "Returning {} recommendations",
                    recommendations.len()
                ));
                recommendations
            }
            Err(err) => {
                match &err {
                    RecommendationError::ProviderUnavailable(_) => self
                        .logger
                        .error(&format!("Error getting recommendations: {}", err)),
                    _ => self
                        .logger
                        .info(&format!("Falling back to default recommendations: {}", err)),
                }
                self.default_recommender
                    .execute(RecommendDefaultParams {
                        user_id: request.user_id,
                    })
                    .await
            }
        }
    }
}
