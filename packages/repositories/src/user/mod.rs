use std::collections::HashMap;

use data_access_objects::{PostDao, UserDao};
use models::users::{ActiveModel, Model};
use models::{posts, users};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use crate::error::RepoError;

/// A user row together with its posts, ordered by creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithPosts {
    pub user: users::Model,
    pub posts: Vec<posts::Model>,
}

pub struct UserRepository;

impl UserRepository {
    /// All users ordered by name ascending, each with its posts attached.
    pub async fn get_users(db: &DatabaseConnection) -> Result<Vec<UserWithPosts>, RepoError> {
        let users = UserDao::find_all_by_name(db).await?;
        let posts = PostDao::find_all_by_created_at(db).await?;

        let mut by_author: HashMap<Uuid, Vec<posts::Model>> = HashMap::new();
        for post in posts {
            by_author.entry(post.author_id).or_default().push(post);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let posts = by_author.remove(&user.id).unwrap_or_default();
                UserWithPosts { user, posts }
            })
            .collect())
    }

    pub async fn get_user(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<UserWithPosts>, RepoError> {
        let Some(user) = UserDao::find_by_id(db, id).await? else {
            return Ok(None);
        };
        let posts = PostDao::find_by_author(db, user.id).await?;
        Ok(Some(UserWithPosts { user, posts }))
    }

    pub async fn create(
        db: &DatabaseConnection,
        id: Uuid,
        name: String,
        email: String,
        username: Option<String>,
        password_hash: String,
    ) -> Result<Model, RepoError> {
        let model = ActiveModel {
            id: ActiveValue::set(id),
            name: ActiveValue::set(name),
            email: ActiveValue::set(email),
            username: ActiveValue::set(username),
            password: ActiveValue::set(password_hash),
            is_verified: ActiveValue::set(false),
        };
        UserDao::insert(db, model).await.map_err(Into::into)
    }

    /// Full overwrite of every mutable field. The password hash is required
    /// on every update; there is no partial-update path.
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        name: String,
        email: String,
        username: Option<String>,
        password_hash: String,
        is_verified: bool,
    ) -> Result<UserWithPosts, RepoError> {
        let existing = UserDao::find_by_id(db, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("user {}", id)))?;

        let mut model = existing.into_active_model();
        model.name = ActiveValue::set(name);
        model.email = ActiveValue::set(email);
        model.username = ActiveValue::set(username);
        model.password = ActiveValue::set(password_hash);
        model.is_verified = ActiveValue::set(is_verified);

        let user = UserDao::update(db, model).await?;
        let posts = PostDao::find_by_author(db, user.id).await?;
        Ok(UserWithPosts { user, posts })
    }

    /// Single conditional delete; there is no read-then-delete window.
    pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, RepoError> {
        let res = UserDao::delete_by_id(db, id).await?;
        if res.rows_affected == 0 {
            return Err(RepoError::NotFound(format!("user {}", id)));
        }
        Ok(id)
    }
}
