use async_graphql::{Context, InputObject, Object, Result, Union};
use repositories::RepoError;
use uuid::Uuid;

use crate::errors::{ConflictError, ConstraintViolationError, InternalError, NotFoundError};
use crate::types::post::{DeletedPost, Post as PostType};

mod create_post;
mod delete_post;
mod update_post;

#[derive(Union)]
pub enum PostMutationResult {
    Post(PostType),
    DeletedPost(DeletedPost),
    NotFound(NotFoundError),
    ConstraintViolation(ConstraintViolationError),
    Conflict(ConflictError),
    Internal(InternalError),
}

impl From<RepoError> for PostMutationResult {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(message) => {
                PostMutationResult::NotFound(NotFoundError { message })
            }
            RepoError::ConstraintViolation(message) => {
                PostMutationResult::ConstraintViolation(ConstraintViolationError { message })
            }
            RepoError::Conflict(message) => {
                PostMutationResult::Conflict(ConflictError { message })
            }
            RepoError::Internal(message) => {
                PostMutationResult::Internal(InternalError { message })
            }
        }
    }
}

#[derive(InputObject)]
struct CreatePostInput {
    title: String,
    author_id: Uuid,
    image: String,
    paragraph: String,
}

#[derive(InputObject)]
struct PostUpdateInput {
    title: String,
    author_id: Uuid,
    image: String,
    paragraph: String,
}

#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        input: CreatePostInput,
    ) -> Result<PostMutationResult> {
        create_post::create_post(ctx, input).await
    }

    async fn update_post(
        &self,
        ctx: &Context<'_>,
        by_id: Uuid,
        input: PostUpdateInput,
    ) -> Result<PostMutationResult> {
        update_post::update_post(ctx, by_id, input).await
    }

    async fn delete_post(&self, ctx: &Context<'_>, by_id: Uuid) -> Result<PostMutationResult> {
        delete_post::delete_post(ctx, by_id).await
    }
}
