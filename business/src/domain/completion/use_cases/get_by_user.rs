use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::model::CompletedCourse;
use crate::domain::shared::value_objects::UserId;

pub struct GetUserCompletionsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetUserCompletionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetUserCompletionsParams,
    ) -> Result<Vec<CompletedCourse>, CompletionError>;
}
