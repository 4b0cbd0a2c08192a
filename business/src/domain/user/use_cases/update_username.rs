use async_trait::async_trait;

use crate::domain::errors::AppError;
use crate::domain::user::model::User;

pub struct UpdateUsernameParams {
    pub user_id: u64,
    pub username: String,
}

#[async_trait]
pub trait UpdateUsernameUseCase: Send + Sync {
    async fn execute(&self, params: UpdateUsernameParams) -> Result<User, AppError>;
}
