use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::errors::AppError;
use business::domain::user::use_cases::delete::{DeleteUserParams, DeleteUserUseCase};
use business::domain::user::use_cases::follow::{
    FollowUserParams, FollowUserUseCase, UnfollowUserUseCase,
};
use business::domain::user::use_cases::get_or_create::{
    GetOrCreateUserParams, GetOrCreateUserUseCase,
};
use business::domain::user::use_cases::get_profile::{
    GetUserProfileParams, GetUserProfileUseCase,
};
use business::domain::user::use_cases::update_profile::{
    UpdateUserProfileParams, UpdateUserProfileUseCase,
};
use business::domain::user::use_cases::update_username::{
    UpdateUsernameParams, UpdateUsernameUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::user::dto::{
    GetOrCreateUserRequest, UpdateProfileRequest, UpdateUsernameRequest, UserResponse,
};

pub struct UserApi {
    get_profile_use_case: Arc<dyn GetUserProfileUseCase>,
    get_or_create_use_case: Arc<dyn GetOrCreateUserUseCase>,
    update_profile_use_case: Arc<dyn UpdateUserProfileUseCase>,
    update_username_use_case: Arc<dyn UpdateUsernameUseCase>,
    delete_use_case: Arc<dyn DeleteUserUseCase>,
    follow_use_case: Arc<dyn FollowUserUseCase>,
    unfollow_use_case: Arc<dyn UnfollowUserUseCase>,
}

impl UserApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_profile_use_case: Arc<dyn GetUserProfileUseCase>,
        get_or_create_use_case: Arc<dyn GetOrCreateUserUseCase>,
        update_profile_use_case: Arc<dyn UpdateUserProfileUseCase>,
        update_username_use_case: Arc<dyn UpdateUsernameUseCase>,
        delete_use_case: Arc<dyn DeleteUserUseCase>,
        follow_use_case: Arc<dyn FollowUserUseCase>,
        unfollow_use_case: Arc<dyn UnfollowUserUseCase>,
    ) -> Self {
        Self {
            get_profile_use_case,
            get_or_create_use_case,
            update_profile_use_case,
            update_username_use_case,
            delete_use_case,
            follow_use_case,
            unfollow_use_case,
        }
    }
}

/// User profile API
///
/// Endpoints for registering users, reading public profiles, editing them and
/// managing followership.
#[OpenApi]
impl UserApi {
    /// Get a public profile
    ///
    /// Returns the profile owning `username`. Owner-only fields are omitted.
    #[oai(path = "/profiles/:username", method = "get", tag = "ApiTags::Users")]
    async fn get_profile(&self, username: Path<String>) -> UserApiResponse {
        let params = GetUserProfileParams { username: username.0 };

        match self.get_profile_use_case.execute(params).await {
            Ok(user) => UserApiResponse::Ok(Json(user.into())),
            Err(err) => UserApiResponse::from_error(err),
        }
    }

    /// Get or register a user
    ///
    /// Returns the user owning `email`, registering it when unknown.
    #[oai(path = "/users", method = "post", tag = "ApiTags::Users")]
    async fn get_or_create_user(&self, body: Json<GetOrCreateUserRequest>) -> UserApiResponse {
        let params = GetOrCreateUserParams {
            email: body.0.email,
            username: body.0.username,
            name: body.0.name,
            profile_img_url: body.0.profile_img_url,
            location: body.0.location,
            description: body.0.description,
            twitter_name: body.0.twitter_name,
            facebook_name: body.0.facebook_name,
        };

        match self.get_or_create_use_case.execute(params).await {
            Ok(user) => UserApiResponse::Ok(Json(user.into())),
            Err(err) => UserApiResponse::from_error(err),
        }
    }

    /// Update a profile
    #[oai(path = "/users/:id", method = "put", tag = "ApiTags::Users")]
    async fn update_profile(
        &self,
        id: Path<u64>,
        body: Json<UpdateProfileRequest>,
    ) -> UserApiResponse {
        let params = UpdateUserProfileParams {
            user_id: id.0,
            name: body.0.name,
            profile_img_url: body.0.profile_img_url,
            location: body.0.location,
            description: body.0.description,
        };

        match self.update_profile_use_case.execute(params).await {
            Ok(user) => UserApiResponse::Ok(Json(user.into())),
            Err(err) => UserApiResponse::from_error(err),
        }
    }

    /// Change a username
    #[oai(path = "/users/:id/username", method = "put", tag = "ApiTags::Users")]
    async fn update_username(
        &self,
        id: Path<u64>,
        body: Json<UpdateUsernameRequest>,
    ) -> UserApiResponse {
        let params = UpdateUsernameParams {
            user_id: id.0,
            username: body.0.username,
        };

        match self.update_username_use_case.execute(params).await {
            Ok(user) => UserApiResponse::Ok(Json(user.into())),
            Err(err) => UserApiResponse::from_error(err),
        }
    }

    /// Delete a user
    ///
    /// Permanently removes the user and its followership links.
    #[oai(path = "/users/:id", method = "delete", tag = "ApiTags::Users")]
    async fn delete_user(&self, id: Path<u64>) -> DeleteUserResponse {
        match self
            .delete_use_case
            .execute(DeleteUserParams { user_id: id.0 })
            .await
        {
            Ok(()) => DeleteUserResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteUserResponse::NotFound(json),
                    _ => DeleteUserResponse::InternalError(json),
                }
            }
        }
    }

    /// Follow a user
    ///
    /// Returns the followed user with refreshed counters.
    #[oai(
        path = "/users/:id/following/:username",
        method = "post",
        tag = "ApiTags::Users"
    )]
    async fn follow_user(&self, id: Path<u64>, username: Path<String>) -> UserApiResponse {
        let params = FollowUserParams {
            user_id: id.0,
            followed_username: username.0,
        };

        match self.follow_use_case.execute(params).await {
            Ok(user) => UserApiResponse::Ok(Json(user.into())),
            Err(err) => UserApiResponse::from_error(err),
        }
    }

    /// Unfollow a user
    ///
    /// Returns the formerly followed user with refreshed counters.
    #[oai(
        path = "/users/:id/following/:username",
        method = "delete",
        tag = "ApiTags::Users"
    )]
    async fn unfollow_user(&self, id: Path<u64>, username: Path<String>) -> UserApiResponse {
        let params = FollowUserParams {
            user_id: id.0,
            followed_username: username.0,
        };

        match self.unfollow_use_case.execute(params).await {
            Ok(user) => UserApiResponse::Ok(Json(user.into())),
            Err(err) => UserApiResponse::from_error(err),
        }
    }
}

#[derive(ApiResponse)]
pub enum UserApiResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UserApiResponse {
    fn from_error(err: AppError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => UserApiResponse::BadRequest(json),
            401 => UserApiResponse::Unauthorized(json),
            403 => UserApiResponse::Forbidden(json),
            404 => UserApiResponse::NotFound(json),
            _ => UserApiResponse::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
