use async_trait::async_trait;

use crate::domain::errors::AppError;

pub struct DeleteUserParams {
    pub user_id: u64,
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, params: DeleteUserParams) -> Result<(), AppError>;
}
