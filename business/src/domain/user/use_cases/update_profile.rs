use async_trait::async_trait;

use crate::domain::errors::AppError;
use crate::domain::user::model::User;

pub struct UpdateUserProfileParams {
    pub user_id: u64,
    pub name: String,
    pub profile_img_url: String,
    pub location: String,
    pub description: String,
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpdateUserProfileParams) -> Result<User, AppError>;
}
