use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::statistics::CompletionStatistics;
use crate::domain::shared::value_objects::UserId;

pub struct GetCompletionStatisticsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetCompletionStatisticsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetCompletionStatisticsParams,
    ) -> Result<CompletionStatistics, CompletionError>;
}
