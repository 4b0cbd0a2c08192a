use async_trait::async_trait;

use crate::domain::errors::AppError;
use crate::domain::user::model::User;

pub struct GetOrCreateUserParams {
    pub email: String,
    pub username: String,
    pub name: String,
    pub profile_img_url: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub twitter_name: Option<String>,
    pub facebook_name: Option<String>,
}

/// Returns the user owning `email`, registering it first when it does not exist yet.
#[async_trait]
pub trait GetOrCreateUserUseCase: Send + Sync {
    async fn execute(&self, params: GetOrCreateUserParams) -> Result<User, AppError>;
}
