use std::sync::Arc;

use logger::TracingLogger;
use persistence::id_generator::UuidIdGenerator;
use persistence::user::repository::UserRepositoryMySql;

use business::application::user::delete::DeleteUserUseCaseImpl;
use business::application::user::follow::FollowUserUseCaseImpl;
use business::application::user::get_or_create::GetOrCreateUserUseCaseImpl;
use business::application::user::get_profile::GetUserProfileUseCaseImpl;
use business::application::user::unfollow::UnfollowUserUseCaseImpl;
use business::application::user::update_profile::UpdateUserProfileUseCaseImpl;
use business::application::user::update_username::UpdateUsernameUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub user_api: crate::api::user::routes::UserApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::MySqlPool) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryMySql::new(
            pool,
            Arc::new(UuidIdGenerator),
        ));

        // User use cases
        let get_profile_use_case = Arc::new(GetUserProfileUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let get_or_create_use_case = Arc::new(GetOrCreateUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let update_profile_use_case = Arc::new(UpdateUserProfileUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let update_username_use_case = Arc::new(UpdateUsernameUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let follow_use_case = Arc::new(FollowUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let unfollow_use_case = Arc::new(UnfollowUserUseCaseImpl {
            repository: user_repository,
            logger,
        });

        let user_api = crate::api::user::routes::UserApi::new(
            get_profile_use_case,
            get_or_create_use_case,
            update_profile_use_case,
            update_username_use_case,
            delete_use_case,
            follow_use_case,
            unfollow_use_case,
        );

        Self {
            health_api,
            user_api,
        }
    }
}
