use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::AppError;
use crate::domain::logger::Logger;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_profile::{GetUserProfileParams, GetUserProfileUseCase};

pub struct GetUserProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetUserProfileUseCase for GetUserProfileUseCaseImpl {
    async fn execute(&self, params: GetUserProfileParams) -> Result<User, AppError> {
        self.logger
            .info(&format!("Fetching profile of user: {}", params.username));

        let mut user = self
            .repository
            .get_by_username(&params.username)
            .await
            .inspect_err(|err| {
                self.logger.error(&format!(
                    "Failed to fetch profile of {}: {}",
                    params.username, err
                ))
            })?;

        user.is_me = false;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::user::test_support::{MockUserRepo, mock_logger, stored_user};
    use crate::domain::errors::ErrorKind;

    #[tokio::test]
    async fn should_return_public_profile_when_username_exists() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_username()
            .withf(|username| username == "UserZero")
            .returning(|username| Ok(stored_user(1, username)));

        let use_case = GetUserProfileUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case
            .execute(GetUserProfileParams {
                username: "UserZero".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.username, "UserZero");
        assert!(!user.is_me);
    }

    #[tokio::test]
    async fn should_return_unknown_resource_when_username_missing() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_get_by_username()
            .returning(|_| Err(ErrorKind::UnknownResource.error()));

        let use_case = GetUserProfileUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(GetUserProfileParams {
                username: "ghost_user".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownResource);
        assert_eq!(err.http_status(), 404);
    }
}
