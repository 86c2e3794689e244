use std::collections::HashMap;

use data_access_objects::{PostDao, UserDao};
use models::users;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::{PostRepository, PostWithAuthor};
use crate::error::RepoError;

impl PostRepository {
    /// All posts ordered by creation time ascending with authors attached.
    pub async fn get_posts(db: &DatabaseConnection) -> Result<Vec<PostWithAuthor>, RepoError> {
        let posts = PostDao::find_all_by_created_at(db).await?;
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let mut author_ids: Vec<Uuid> = posts.iter().map(|p| p.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<Uuid, users::Model> = UserDao::find_by_ids(db, author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        posts
            .into_iter()
            .map(|post| {
                let author = authors
                    .get(&post.author_id)
                    .cloned()
                    .ok_or_else(|| RepoError::Internal(format!("author {} missing", post.author_id)))?;
                Ok(PostWithAuthor { post, author })
            })
            .collect()
    }

    pub async fn get_post(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<PostWithAuthor>, RepoError> {
        let Some(post) = PostDao::find_by_id(db, id).await? else {
            return Ok(None);
        };
        let author = UserDao::find_by_id(db, post.author_id)
            .await?
            .ok_or_else(|| RepoError::Internal(format!("author {} missing", post.author_id)))?;
        Ok(Some(PostWithAuthor { post, author }))
    }
}
