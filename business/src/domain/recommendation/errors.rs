use crate::domain::errors::RepositoryError;

/// Reasons a recommendation pass produced nothing on its own.
///
/// None of these reach callers of the recommendation use cases: they select
/// the fallback to apply.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation.empty_catalog_for_domain")]
    EmptyCatalogForDomain,
    #[error("recommendation.all_candidates_excluded")]
    AllCandidatesExcluded,
    #[error("recommendation.no_matching_candidates")]
    NoMatchingCandidates,
    #[error("recommendation.no_candidates_at_all")]
    NoCandidatesAtAll,
    #[error("recommendation.provider_unavailable")]
    ProviderUnavailable(#[from] RepositoryError),
}
