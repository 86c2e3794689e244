use async_graphql::SimpleObject;
use chrono::NaiveDateTime;
use uuid::Uuid;

/// Flat author projection embedded in a post. Keeps the graph one level
/// deep instead of recursing back into the author's posts.
#[derive(SimpleObject, Clone)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: Option<String>,
    pub is_verified: bool,
}

#[derive(SimpleObject, Clone)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub paragraph: String,
    pub author_id: Uuid,
    pub author: Author,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(SimpleObject)]
pub struct DeletedPost {
    pub id: Uuid,
}

impl Author {
    pub fn from_model(user: &models::users::Model) -> Self {
        Author {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            is_verified: user.is_verified,
        }
    }
}

impl Post {
    pub fn from_models(post: &models::posts::Model, author: &models::users::Model) -> Self {
        Post {
            id: post.id,
            title: post.title.clone(),
            image: post.image.clone(),
            paragraph: post.paragraph.clone(),
            author_id: post.author_id,
            author: Author::from_model(author),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
