use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::AppError;
use crate::domain::logger::Logger;
use crate::domain::user::model::{User, validate_username};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update_username::{
    UpdateUsernameParams, UpdateUsernameUseCase,
};

pub struct UpdateUsernameUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateUsernameUseCase for UpdateUsernameUseCaseImpl {
    async fn execute(&self, params: UpdateUsernameParams) -> Result<User, AppError> {
        self.logger.info(&format!(
            "Renaming user {} to {}",
            params.user_id, params.username
        ));

        validate_username(&params.username)?;

        let mut user = self
            .repository
            .update_username(params.user_id, &params.username)
            .await
            .inspect_err(|err| {
                self.logger.error(&format!(
                    "Failed to rename user {}: {}",
                    params.user_id, err
                ))
            })?;

        user.is_me = true;
        Ok(user)
    }
}
