use async_graphql::SimpleObject;
use uuid::Uuid;

use crate::types::post::Post;

/// The stored password hash is deliberately not part of this type.
#[derive(SimpleObject)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: Option<String>,
    pub is_verified: bool,
    pub posts: Vec<Post>,
    pub post_count: u64,
}

#[derive(SimpleObject)]
pub struct DeletedUser {
    pub id: Uuid,
}

impl User {
    pub fn from_parts(user: &models::users::Model, posts: &[models::posts::Model]) -> Self {
        User {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            is_verified: user.is_verified,
            posts: posts.iter().map(|p| Post::from_models(p, user)).collect(),
            post_count: posts.len() as u64,
        }
    }
}
