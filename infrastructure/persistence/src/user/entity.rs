use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::Query;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use business::domain::user::model::{ProfileChanges, User};

use crate::naming::to_snake_case;

pub const TABLE_NAME: &str = "users";

/// Fields of [`UserEntity`] in declaration order, named as the schema names them.
///
/// `Followers` is the many-to-many followership association; it has no column of its own.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum UserField {
    ID,
    Email,
    Username,
    Name,
    ProfileImgURL,
    Location,
    Description,
    Followers,
    FollowersCount,
    FollowingCount,
    TwitterName,
    FacebookName,
    CreatedAt,
    UpdatedAt,
}

impl UserField {
    pub fn is_relation(self) -> bool {
        matches!(self, UserField::Followers)
    }

    pub fn column(self) -> Option<String> {
        if self.is_relation() {
            return None;
        }
        let ident: &'static str = self.into();
        Some(to_snake_case(ident))
    }
}

static COLUMN_NAMES: LazyLock<Vec<String>> =
    LazyLock::new(|| UserField::iter().filter_map(UserField::column).collect());

/// Column names of the `users` table, in the order [`UserEntity::bind_all`] binds values.
pub fn column_names() -> &'static [String] {
    &COLUMN_NAMES
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserEntity {
    pub id: u64,
    pub email: String,
    pub username: String,
    pub name: String,
    pub profile_img_url: String,
    pub location: String,
    pub description: String,
    pub followers_count: u32,
    pub following_count: u32,
    pub twitter_name: Option<String>,
    pub facebook_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserEntity {
    /// Row for a new user. `id` stays `0` until the repository assigns one.
    pub fn for_insert(user: &User) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email: user.email.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            profile_img_url: user.profile_img_url.clone(),
            location: user.location.clone(),
            description: user.description.clone(),
            followers_count: 0,
            following_count: 0,
            twitter_name: user.twitter_name.clone(),
            facebook_name: user.facebook_name.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Binds every column value in [`column_names`] order.
    pub fn bind_all<'q>(
        &'q self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments> {
        query
            .bind(self.id)
            .bind(&self.email)
            .bind(&self.username)
            .bind(&self.name)
            .bind(&self.profile_img_url)
            .bind(&self.location)
            .bind(&self.description)
            .bind(self.followers_count)
            .bind(self.following_count)
            .bind(&self.twitter_name)
            .bind(&self.facebook_name)
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    pub fn into_domain(self) -> User {
        User {
            id: self.id,
            email: self.email,
            username: self.username,
            name: self.name,
            url: None,
            profile_img_url: self.profile_img_url,
            location: self.location,
            description: self.description,
            is_me: false,
            followers_count: self.followers_count,
            following_count: self.following_count,
            twitter_name: self.twitter_name,
            facebook_name: self.facebook_name,
        }
    }
}

/// Update payload. Identity, email, username and counters are not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChangesEntity {
    pub name: String,
    pub profile_img_url: String,
    pub location: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

impl UserChangesEntity {
    pub const COLUMNS: [&'static str; 5] = [
        "name",
        "profile_img_url",
        "location",
        "description",
        "updated_at",
    ];

    pub fn from_changes(changes: &ProfileChanges) -> Self {
        Self {
            name: changes.name.clone(),
            profile_img_url: changes.profile_img_url.clone(),
            location: changes.location.clone(),
            description: changes.description.clone(),
            updated_at: Utc::now(),
        }
    }

    /// Binds the values in [`Self::COLUMNS`] order.
    pub fn bind_all<'q>(
        &'q self,
        query: Query<'q, MySql, MySqlArguments>,
    ) -> Query<'q, MySql, MySqlArguments> {
        query
            .bind(&self.name)
            .bind(&self.profile_img_url)
            .bind(&self.location)
            .bind(&self.description)
            .bind(self.updated_at)
    }
}
