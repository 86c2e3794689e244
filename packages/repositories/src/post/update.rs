use data_access_objects::{PostDao, UserDao};
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::{PostRepository, PostWithAuthor};
use crate::error::RepoError;

impl PostRepository {
    /// Updates title, paragraph and image. The caller must supply the post's
    /// actual author; a mismatch is a `Conflict`, not a silent no-op.
    pub async fn update_post(
        db: &DatabaseConnection,
        id: Uuid,
        author_id: Uuid,
        title: String,
        image: String,
        paragraph: String,
    ) -> Result<PostWithAuthor, RepoError> {
        let existing = PostDao::find_by_id(db, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("post {}", id)))?;

        if existing.author_id != author_id {
            return Err(RepoError::Conflict(format!(
                "post {} does not belong to author {}",
                id, author_id
            )));
        }

        let mut model = existing.into_active_model();
        model.title = ActiveValue::set(title);
        model.image = ActiveValue::set(image);
        model.paragraph = ActiveValue::set(paragraph);
        model.updated_at = ActiveValue::set(chrono::Utc::now().naive_utc());

        let post = PostDao::update(db, model).await?;
        let author = UserDao::find_by_id(db, post.author_id)
            .await?
            .ok_or_else(|| RepoError::Internal(format!("author {} missing", post.author_id)))?;

        Ok(PostWithAuthor { post, author })
    }
}
