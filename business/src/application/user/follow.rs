use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{AppError, ErrorKind};
use crate::domain::logger::Logger;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::follow::{FollowUserParams, FollowUserUseCase};

pub struct FollowUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FollowUserUseCase for FollowUserUseCaseImpl {
    async fn execute(&self, params: FollowUserParams) -> Result<User, AppError> {
        self.logger.info(&format!(
            "User {} follows {}",
            params.user_id, params.followed_username
        ));

        let followed = self
            .repository
            .get_by_username(&params.followed_username)
            .await?;

        if followed.id == params.user_id {
            return Err(ErrorKind::InvalidParam.with_message("users cannot follow themselves"));
        }

        self.repository
            .follow(params.user_id, followed.id)
            .await
            .inspect_err(|err| {
                self.logger.error(&format!(
                    "Failed to relate follower {} with {}: {}",
                    params.user_id, followed.id, err
                ))
            })?;

        self.repository.get_by_id(followed.id).await
    }
}
