use serde::{Deserialize, Serialize};

use crate::domain::errors::{AppError, ErrorKind};

pub const DEFAULT_PROFILE_IMG_URL: &str = "/icon/defaultpic";
pub const DEFAULT_LOCATION: &str = "Worldwide";
pub const DEFAULT_DESCRIPTION: &str = "The author tend to keep air of mystery of him/herself";

const EMAIL_MAX_LEN: usize = 40;
const USERNAME_MIN_LEN: usize = 5;
const USERNAME_MAX_LEN: usize = 40;
const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 40;

/// A platform user.
///
/// `id` is `0` until the repository assigns one on insert; it never changes afterwards.
/// `email` and `id` are owner-only data, `is_me` marks a view served to the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub name: String,
    pub url: Option<String>,
    pub profile_img_url: String,
    pub location: String,
    pub description: String,
    pub is_me: bool,
    pub followers_count: u32,
    pub following_count: u32,
    pub twitter_name: Option<String>,
    pub facebook_name: Option<String>,
}

pub struct NewUserProps {
    pub email: String,
    pub username: String,
    pub name: String,
    pub profile_img_url: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub twitter_name: Option<String>,
    pub facebook_name: Option<String>,
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, AppError> {
        validate_email(&props.email)?;
        validate_username(&props.username)?;
        validate_name(&props.name)?;

        Ok(Self {
            id: 0,
            email: props.email,
            username: props.username,
            name: props.name,
            url: None,
            profile_img_url: props
                .profile_img_url
                .unwrap_or_else(|| DEFAULT_PROFILE_IMG_URL.to_string()),
            location: props
                .location
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            description: props
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            is_me: false,
            followers_count: 0,
            following_count: 0,
            twitter_name: props.twitter_name,
            facebook_name: props.facebook_name,
        })
    }

    /// Public profile path, `/@username` unless an explicit url was set.
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!("/@{}", self.username),
        }
    }
}

/// Mutable subset of a user's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChanges {
    pub name: String,
    pub profile_img_url: String,
    pub location: String,
    pub description: String,
}

impl ProfileChanges {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)
    }
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ErrorKind::InvalidParam.with_message("email is not a valid address"));
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(ErrorKind::InvalidParam.with_message(format_args!(
            "email must be at most {EMAIL_MAX_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), AppError> {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(ErrorKind::InvalidParam.with_message(format_args!(
            "username must be {USERNAME_MIN_LEN} to {USERNAME_MAX_LEN} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        return Err(ErrorKind::InvalidParam
            .with_message("username may only contain letters, digits, '_' and '.'"));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), AppError> {
    let len = name.trim().chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(ErrorKind::InvalidParam.with_message(format_args!(
            "name must be {NAME_MIN_LEN} to {NAME_MAX_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewUserProps {
        NewUserProps {
            email: "alice@example.com".to_string(),
            username: "alice_w".to_string(),
            name: "Alice Walker".to_string(),
            profile_img_url: None,
            location: None,
            description: None,
            twitter_name: Some("alicew".to_string()),
            facebook_name: None,
        }
    }

    #[test]
    fn should_create_user_with_defaults_and_zero_counters() {
        let user = User::new(props()).unwrap();

        assert_eq!(user.id, 0);
        assert_eq!(user.profile_img_url, DEFAULT_PROFILE_IMG_URL);
        assert_eq!(user.location, DEFAULT_LOCATION);
        assert_eq!(user.description, DEFAULT_DESCRIPTION);
        assert_eq!(user.followers_count, 0);
        assert_eq!(user.following_count, 0);
        assert_eq!(user.twitter_name.as_deref(), Some("alicew"));
        assert!(!user.is_me);
    }

    #[test]
    fn should_derive_url_from_username_when_absent() {
        let mut user = User::new(props()).unwrap();
        assert_eq!(user.url(), "/@alice_w");

        user.url = Some("/custom".to_string());
        assert_eq!(user.url(), "/custom");
    }

    #[test]
    fn should_reject_email_without_at_sign() {
        let result = User::new(NewUserProps {
            email: "alice.example.com".to_string(),
            ..props()
        });

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParam);
        assert!(err.message().contains("email"));
    }

    #[test]
    fn should_reject_short_username() {
        let err = User::new(NewUserProps {
            username: "bob".to_string(),
            ..props()
        })
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidParam);
        assert!(err.message().contains("username"));
    }

    #[test]
    fn should_reject_username_with_spaces() {
        assert!(validate_username("alice walker").is_err());
        assert!(validate_username("alice.walker_1").is_ok());
    }

    #[test]
    fn should_reject_single_character_name() {
        let changes = ProfileChanges {
            name: "A".to_string(),
            profile_img_url: DEFAULT_PROFILE_IMG_URL.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        };

        assert_eq!(
            changes.validate().unwrap_err().kind(),
            ErrorKind::InvalidParam
        );
    }
}
