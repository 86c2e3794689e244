use super::PostMutationResult;
use crate::types::post::DeletedPost;
use async_graphql::{Context, Result};
use repositories::PostRepository;
use sea_orm::*;
use uuid::Uuid;

pub(super) async fn delete_post(ctx: &Context<'_>, by_id: Uuid) -> Result<PostMutationResult> {
    let db = ctx.data::<DatabaseConnection>().unwrap();

    match PostRepository::delete_post(db, by_id).await {
        Ok(id) => {
            tracing::info!(post_id = %id, "post deleted");
            Ok(PostMutationResult::DeletedPost(DeletedPost { id }))
        }
        Err(e) => {
            tracing::warn!(post_id = %by_id, error = %e, "failed to delete post");
            Ok(e.into())
        }
    }
}
