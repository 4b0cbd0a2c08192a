use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{AppError, ErrorKind};
use crate::domain::logger::Logger;
use crate::domain::user::model::{NewUserProps, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_or_create::{
    GetOrCreateUserParams, GetOrCreateUserUseCase,
};

pub struct GetOrCreateUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrCreateUserUseCase for GetOrCreateUserUseCaseImpl {
    async fn execute(&self, params: GetOrCreateUserParams) -> Result<User, AppError> {
        self.logger
            .info(&format!("Get or create user: {}", params.username));

        let new_user = User::new(NewUserProps {
            email: params.email,
            username: params.username,
            name: params.name,
            profile_img_url: params.profile_img_url,
            location: params.location,
            description: params.description,
            twitter_name: params.twitter_name,
            facebook_name: params.facebook_name,
        })?;

        match self.repository.get_by_email(&new_user.email).await {
            Ok(mut existing) => {
                existing.is_me = true;
                return Ok(existing);
            }
            Err(err) if err.kind() == ErrorKind::UnknownResource => {}
            Err(err) => {
                self.logger
                    .error(&format!("Failed to look up user by email: {}", err));
                return Err(err);
            }
        }

        let mut created = self
            .repository
            .insert_one(&new_user)
            .await
            .inspect_err(|err| self.logger.error(&format!("Failed to create user: {}", err)))?;

        self.logger
            .info(&format!("User created with id: {}", created.id));
        created.is_me = true;
        Ok(created)
    }
}
