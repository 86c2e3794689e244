use data_access_objects::{PostDao, UserDao};
use models::posts;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::{PostRepository, PostWithAuthor};
use crate::error::RepoError;

impl PostRepository {
    /// Inserts a post without checking the author first; a dangling
    /// `author_id` surfaces as a foreign key violation from the database.
    pub async fn create_post(
        db: &DatabaseConnection,
        id: Uuid,
        title: String,
        image: String,
        paragraph: String,
        author_id: Uuid,
    ) -> Result<PostWithAuthor, RepoError> {
        let now = chrono::Utc::now().naive_utc();
        let model = posts::ActiveModel {
            id: ActiveValue::set(id),
            title: ActiveValue::set(title),
            image: ActiveValue::set(image),
            paragraph: ActiveValue::set(paragraph),
            author_id: ActiveValue::set(author_id),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
        };

        let post = PostDao::insert(db, model).await?;
        let author = UserDao::find_by_id(db, post.author_id)
            .await?
            .ok_or_else(|| RepoError::Internal(format!("author {} missing", post.author_id)))?;

        Ok(PostWithAuthor { post, author })
    }
}
