use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;

use business::domain::errors::{AppError, ErrorKind};
use business::domain::id_generator::IdGenerator;
use business::domain::user::model::{ProfileChanges, User};
use business::domain::user::repository::UserRepository;

use super::entity::{TABLE_NAME, UserChangesEntity, UserEntity, column_names};
use crate::error_classifier::generic::{ClassifyExt, DbErrorClassifier, not_found};
use crate::error_classifier::mysql::MySqlErrorClassifier;

pub struct UserRepositoryMySql {
    pool: MySqlPool,
    id_generator: Arc<dyn IdGenerator>,
    classifier: Arc<dyn DbErrorClassifier>,
}

impl UserRepositoryMySql {
    pub fn new(pool: MySqlPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            pool,
            id_generator,
            classifier: Arc::new(MySqlErrorClassifier::new()),
        }
    }

    async fn find_one(&self, column: &str, value: &str, debug: &str) -> Result<User, AppError> {
        let sql = select_one_statement(column);
        let entity = sqlx::query_as::<_, UserEntity>(&sql)
            .bind(value)
            .fetch_one(&self.pool)
            .await
            .classify_err(self.classifier.as_ref(), debug)?;

        Ok(entity.into_domain())
    }
}

pub fn select_one_statement(column: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ? LIMIT 1",
        column_names().join(", "),
        TABLE_NAME,
        column
    )
}

pub fn insert_statement() -> String {
    let columns = column_names();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        TABLE_NAME,
        columns.join(", "),
        vec!["?"; columns.len()].join(", ")
    )
}

pub fn update_statement() -> String {
    let assignments: Vec<String> = UserChangesEntity::COLUMNS
        .iter()
        .map(|column| format!("{} = ?", column))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = ?",
        TABLE_NAME,
        assignments.join(", ")
    )
}

#[async_trait]
impl UserRepository for UserRepositoryMySql {
    async fn get_by_id(&self, user_id: u64) -> Result<User, AppError> {
        let sql = select_one_statement("id");
        let entity = sqlx::query_as::<_, UserEntity>(&sql)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .classify_err(self.classifier.as_ref(), "userrepo: find user by id fail")?;

        Ok(entity.into_domain())
    }

    async fn get_by_email(&self, email: &str) -> Result<User, AppError> {
        self.find_one("email", email, "userrepo: find user by email fail")
            .await
    }

    async fn get_by_username(&self, username: &str) -> Result<User, AppError> {
        self.find_one("username", username, "userrepo: find user by username fail")
            .await
    }

    async fn insert_one(&self, user: &User) -> Result<User, AppError> {
        let mut entity = UserEntity::for_insert(user);
        entity.id = self.id_generator.next_u64();

        let sql = insert_statement();
        let result = entity
            .bind_all(sqlx::query(&sql))
            .execute(&self.pool)
            .await
            .classify_err(self.classifier.as_ref(), "userrepo: insert one user fail")?;

        if result.rows_affected() == 0 {
            return Err(ErrorKind::InternalError.with_message("user was not stored"));
        }

        Ok(entity.into_domain())
    }

    async fn update_one(&self, user_id: u64, changes: &ProfileChanges) -> Result<User, AppError> {
        let payload = UserChangesEntity::from_changes(changes);

        let sql = update_statement();
        let result = payload
            .bind_all(sqlx::query(&sql))
            .bind(user_id)
            .execute(&self.pool)
            .await
            .classify_err(self.classifier.as_ref(), "userrepo: update one user fail")?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        self.get_by_id(user_id).await
    }

    async fn update_username(&self, user_id: u64, username: &str) -> Result<User, AppError> {
        let result = sqlx::query("UPDATE users SET username = ?, updated_at = ? WHERE id = ?")
            .bind(username)
            .bind(Utc::now())
            .bind(user_id)
            .execute(&self.pool)
            .await
            .classify_err(self.classifier.as_ref(), "userrepo: update username fail")?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        self.get_by_id(user_id).await
    }

    async fn delete_one(&self, user_id: u64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .classify_err(self.classifier.as_ref(), "userrepo: delete one user fail")?;

        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        Ok(())
    }

    async fn follow(&self, follower_id: u64, followed_id: u64) -> Result<(), AppError> {
        let classifier = self.classifier.as_ref();
        let mut tx = self
            .pool
            .begin()
            .await
            .classify_err(classifier, "userrepo: begin follow tx fail")?;

        sqlx::query("INSERT INTO followership (follower_id, followed_id) VALUES (?, ?)")
            .bind(follower_id)
            .bind(followed_id)
            .execute(&mut *tx)
            .await
            .classify_err(classifier, "userrepo: relate users fail")?;

        sqlx::query("UPDATE users SET following_count = following_count + 1 WHERE id = ?")
            .bind(follower_id)
            .execute(&mut *tx)
            .await
            .classify_err(classifier, "userrepo: count following fail")?;

        sqlx::query("UPDATE users SET followers_count = followers_count + 1 WHERE id = ?")
            .bind(followed_id)
            .execute(&mut *tx)
            .await
            .classify_err(classifier, "userrepo: count followers fail")?;

        tx.commit()
            .await
            .classify_err(classifier, "userrepo: commit follow tx fail")
    }

    async fn unfollow(&self, follower_id: u64, followed_id: u64) -> Result<(), AppError> {
        let classifier = self.classifier.as_ref();
        let mut tx = self
            .pool
            .begin()
            .await
            .classify_err(classifier, "userrepo: begin unfollow tx fail")?;

        let result =
            sqlx::query("DELETE FROM followership WHERE follower_id = ? AND followed_id = ?")
                .bind(follower_id)
                .bind(followed_id)
                .execute(&mut *tx)
                .await
                .classify_err(classifier, "userrepo: unrelate users fail")?;

        // Dropping the transaction rolls it back.
        if result.rows_affected() == 0 {
            return Err(not_found());
        }

        sqlx::query("UPDATE users SET following_count = following_count - 1 WHERE id = ? AND following_count > 0")
            .bind(follower_id)
            .execute(&mut *tx)
            .await
            .classify_err(classifier, "userrepo: uncount following fail")?;

        sqlx::query("UPDATE users SET followers_count = followers_count - 1 WHERE id = ? AND followers_count > 0")
            .bind(followed_id)
            .execute(&mut *tx)
            .await
            .classify_err(classifier, "userrepo: uncount followers fail")?;

        tx.commit()
            .await
            .classify_err(classifier, "userrepo: commit unfollow tx fail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_select_every_column_by_key() {
        assert_eq!(
            select_one_statement("username"),
            "SELECT id, email, username, name, profile_img_url, location, description, \
             followers_count, following_count, twitter_name, facebook_name, created_at, \
             updated_at FROM users WHERE username = ? LIMIT 1"
        );
    }

    #[test]
    fn should_insert_one_placeholder_per_column() {
        let sql = insert_statement();

        assert!(sql.starts_with("INSERT INTO users (id, email, username, "));
        assert_eq!(sql.matches('?').count(), column_names().len());
    }

    #[test]
    fn should_update_only_mutable_columns() {
        assert_eq!(
            update_statement(),
            "UPDATE users SET name = ?, profile_img_url = ?, location = ?, \
             description = ?, updated_at = ? WHERE id = ?"
        );
    }
}
