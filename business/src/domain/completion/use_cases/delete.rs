use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::completion::errors::CompletionError;
use crate::domain::shared::value_objects::UserId;

pub struct DeleteCompletionParams {
    pub id: Uuid,
    pub user_id: UserId,
}

/// Removes a completion owned by the user, which makes its course
/// recommendable again.
#[async_trait]
pub trait DeleteCompletionUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCompletionParams) -> Result<(), CompletionError>;
}
