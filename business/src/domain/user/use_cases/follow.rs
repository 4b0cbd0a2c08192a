use async_trait::async_trait;

use crate::domain::errors::AppError;
use crate::domain::user::model::User;

pub struct FollowUserParams {
    pub user_id: u64,
    pub followed_username: String,
}

/// Follow and unfollow share their parameters; both return the refreshed followed user.
#[async_trait]
pub trait FollowUserUseCase: Send + Sync {
    async fn execute(&self, params: FollowUserParams) -> Result<User, AppError>;
}

#[async_trait]
pub trait UnfollowUserUseCase: Send + Sync {
    async fn execute(&self, params: FollowUserParams) -> Result<User, AppError>;
}
