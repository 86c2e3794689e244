use async_graphql::{Context, Error, Object, Result};
use repositories::PostRepository;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::types::post::Post as PostType;

#[derive(Default)]
pub struct PostQueries;

#[Object]
impl PostQueries {
    /// All posts ordered by creation time ascending, each with its author.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostType>> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let rows = PostRepository::get_posts(db)
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|r| PostType::from_models(&r.post, &r.author))
            .collect())
    }

    /// A single post by ID, or null when no such post exists.
    async fn post(&self, ctx: &Context<'_>, by_id: Uuid) -> Result<Option<PostType>> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let row = PostRepository::get_post(db, by_id)
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        if row.is_none() {
            tracing::debug!(post_id = %by_id, "post lookup missed");
        }

        Ok(row.map(|r| PostType::from_models(&r.post, &r.author)))
    }
}
