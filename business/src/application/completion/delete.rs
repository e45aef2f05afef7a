use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::completion::errors::CompletionError;
use crate::domain::completion::repository::CompletionRepository;
use crate::domain::completion::use_cases::delete::{
    DeleteCompletionParams, DeleteCompletionUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCompletionUseCaseImpl {
    pub repository: Arc<dyn CompletionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCompletionUseCase for DeleteCompletionUseCaseImpl {
    async fn execute(&self, params: DeleteCompletionParams) -> Result<(), CompletionError> {
        self.logger.info(&format!("Deleting completion: {}", params.id));

        let record = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CompletionError::NotFound,
                other => CompletionError::Repository(other),
            })?;

        if record.user_id != params.user_id {
            self.logger.warn(&format!(
                "User {} tried to delete completion {} of another user",
                params.user_id, params.id
            ));
            return Err(CompletionError::Forbidden);
        }

        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Completion deleted: {}", params.id));
        Ok(())
    }
}
