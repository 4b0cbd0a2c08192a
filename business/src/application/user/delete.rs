use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::AppError;
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};

pub struct DeleteUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteUserUseCase for DeleteUserUseCaseImpl {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), AppError> {
        self.logger
            .info(&format!("Deleting user: {}", params.user_id));

        self.repository
            .delete_one(params.user_id)
            .await
            .inspect_err(|err| {
                self.logger.error(&format!(
                    "Failed to delete user {}: {}",
                    params.user_id, err
                ))
            })?;

        self.logger
            .info(&format!("User deleted: {}", params.user_id));
        Ok(())
    }
}
