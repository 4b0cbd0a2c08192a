use poem_openapi::Object;

use business::domain::user::model::User;

/// Request to fetch a user by email, registering it when unknown.
#[derive(Debug, Clone, Object)]
pub struct GetOrCreateUserRequest {
    pub email: String,
    pub username: String,
    pub name: String,
    /// Defaults to `/icon/defaultpic`
    pub profile_img_url: Option<String>,
    /// Defaults to `Worldwide`
    pub location: Option<String>,
    pub description: Option<String>,
    pub twitter_name: Option<String>,
    pub facebook_name: Option<String>,
}

/// Request to update the mutable part of a profile.
#[derive(Debug, Clone, Object)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub profile_img_url: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateUsernameRequest {
    pub username: String,
}

/// User profile. `id` and `email` are only present for the owner.
#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<u64>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    pub username: String,
    pub name: String,
    pub url: String,
    pub profile_img_url: String,
    pub location: String,
    pub description: String,
    pub is_me: bool,
    pub followers_count: u32,
    pub following_count: u32,
    #[oai(skip_serializing_if_is_none)]
    pub twitter_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub facebook_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let url = user.url();
        let (id, email) = if user.is_me {
            (Some(user.id), Some(user.email))
        } else {
            (None, None)
        };

        Self {
            id,
            email,
            username: user.username,
            name: user.name,
            url,
            profile_img_url: user.profile_img_url,
            location: user.location,
            description: user.description,
            is_me: user.is_me,
            followers_count: user.followers_count,
            following_count: user.following_count,
            twitter_name: user.twitter_name,
            facebook_name: user.facebook_name,
        }
    }
}
