use super::{PostMutationResult, PostUpdateInput};
use crate::types::post::Post as PostType;
use async_graphql::{Context, Result};
use repositories::PostRepository;
use sea_orm::*;
use uuid::Uuid;

pub(super) async fn update_post(
    ctx: &Context<'_>,
    by_id: Uuid,
    input: PostUpdateInput,
) -> Result<PostMutationResult> {
    let db = ctx.data::<DatabaseConnection>().unwrap();

    match PostRepository::update_post(
        db,
        by_id,
        input.author_id,
        input.title,
        input.image,
        input.paragraph,
    )
    .await
    {
        Ok(row) => Ok(PostMutationResult::Post(PostType::from_models(
            &row.post,
            &row.author,
        ))),
        Err(e) => {
            tracing::warn!(post_id = %by_id, error = %e, "failed to update post");
            Ok(e.into())
        }
    }
}
