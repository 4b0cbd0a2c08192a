use async_trait::async_trait;

use crate::domain::errors::AppError;
use crate::domain::user::model::User;

pub struct GetUserProfileParams {
    pub username: String,
}

#[async_trait]
pub trait GetUserProfileUseCase: Send + Sync {
    async fn execute(&self, params: GetUserProfileParams) -> Result<User, AppError>;
}
