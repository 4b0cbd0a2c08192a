use async_trait::async_trait;

use crate::domain::errors::AppError;

use super::model::{ProfileChanges, User};

/// User persistence port.
///
/// Every failure is already classified into an [`AppError`]; callers never see a raw
/// driver error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, user_id: u64) -> Result<User, AppError>;
    async fn get_by_email(&self, email: &str) -> Result<User, AppError>;
    async fn get_by_username(&self, username: &str) -> Result<User, AppError>;
    /// Persists `user` under a freshly generated id and returns the stored user.
    async fn insert_one(&self, user: &User) -> Result<User, AppError>;
    async fn update_one(&self, user_id: u64, changes: &ProfileChanges) -> Result<User, AppError>;
    async fn update_username(&self, user_id: u64, username: &str) -> Result<User, AppError>;
    async fn delete_one(&self, user_id: u64) -> Result<(), AppError>;
    async fn follow(&self, follower_id: u64, followed_id: u64) -> Result<(), AppError>;
    async fn unfollow(&self, follower_id: u64, followed_id: u64) -> Result<(), AppError>;
}
