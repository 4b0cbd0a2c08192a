use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::AppError;
use crate::domain::logger::Logger;
use crate::domain::user::model::{ProfileChanges, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::update_profile::{
    UpdateUserProfileParams, UpdateUserProfileUseCase,
};

pub struct UpdateUserProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateUserProfileUseCase for UpdateUserProfileUseCaseImpl {
    async fn execute(&self, params: UpdateUserProfileParams) -> Result<User, AppError> {
        self.logger
            .info(&format!("Updating profile of user: {}", params.user_id));

        let changes = ProfileChanges {
            name: params.name,
            profile_img_url: params.profile_img_url,
            location: params.location,
            description: params.description,
        };
        changes.validate()?;

        let mut user = self
            .repository
            .update_one(params.user_id, &changes)
            .await
            .inspect_err(|err| {
                self.logger.error(&format!(
                    "Failed to update profile of user {}: {}",
                    params.user_id, err
                ))
            })?;

        user.is_me = true;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::user::test_support::{MockUserRepo, mock_logger, stored_user};
    use crate::domain::errors::ErrorKind;

    fn params(name: &str) -> UpdateUserProfileParams {
        UpdateUserProfileParams {
            user_id: 1,
            name: name.to_string(),
            profile_img_url: "https://golumn.com/users/7383/avatar92.jpg".to_string(),
            location: "China, Beijing".to_string(),
            description: "My name is Chalier, I'm test User...".to_string(),
        }
    }

    #[tokio::test]
    async fn should_forward_only_mutable_fields() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo
            .expect_update_one()
            .withf(|id, changes| {
                *id == 1 && changes.name == "Hoi Hoi" && changes.location == "China, Beijing"
            })
            .returning(|id, changes| {
                let mut user = stored_user(id, "UserZero");
                user.name = changes.name.clone();
                user.location = changes.location.clone();
                Ok(user)
            });

        let use_case = UpdateUserProfileUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let user = use_case.execute(params("Hoi Hoi")).await.unwrap();

        assert_eq!(user.name, "Hoi Hoi");
        assert_eq!(user.username, "UserZero");
        assert!(user.is_me);
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_update_one().never();

        let use_case = UpdateUserProfileUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case.execute(params("  ")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidParam);
    }

    #[tokio::test]
    async fn should_report_oversized_field_from_repository() {
        let mut mock_repo = MockUserRepo::new();
        mock_repo.expect_update_one().returning(|_, _| {
            Err(ErrorKind::InvalidParam.with_message("data too long for description field"))
        });

        let use_case = UpdateUserProfileUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case.execute(params("Hoi Hoi")).await.unwrap_err();

        assert!(err.message().contains("description"));
    }
}
