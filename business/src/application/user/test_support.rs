use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::AppError;
use crate::domain::logger::Logger;
use crate::domain::user::model::{ProfileChanges, User};
use crate::domain::user::repository::UserRepository;

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get_by_id(&self, user_id: u64) -> Result<User, AppError>;
        async fn get_by_email(&self, email: &str) -> Result<User, AppError>;
        async fn get_by_username(&self, username: &str) -> Result<User, AppError>;
        async fn insert_one(&self, user: &User) -> Result<User, AppError>;
        async fn update_one(&self, user_id: u64, changes: &ProfileChanges) -> Result<User, AppError>;
        async fn update_username(&self, user_id: u64, username: &str) -> Result<User, AppError>;
        async fn delete_one(&self, user_id: u64) -> Result<(), AppError>;
        async fn follow(&self, follower_id: u64, followed_id: u64) -> Result<(), AppError>;
        async fn unfollow(&self, follower_id: u64, followed_id: u64) -> Result<(), AppError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn stored_user(id: u64, username: &str) -> User {
    User {
        id,
        email: format!("{username}@example.com"),
        username: username.to_string(),
        name: format!("Name {username}"),
        url: None,
        profile_img_url: "/icon/defaultpic".to_string(),
        location: "Singapore, Jurong".to_string(),
        description: "AboutMe...".to_string(),
        is_me: false,
        followers_count: 3,
        following_count: 7,
        twitter_name: None,
        facebook_name: None,
    }
}
