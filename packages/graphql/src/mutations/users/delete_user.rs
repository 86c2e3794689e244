use super::UserMutationResult;
use crate::types::user::DeletedUser;
use async_graphql::{Context, Result};
use repositories::UserRepository;
use sea_orm::*;
use uuid::Uuid;

pub(super) async fn delete_user(ctx: &Context<'_>, by_id: Uuid) -> Result<UserMutationResult> {
    let db = ctx.data::<DatabaseConnection>().unwrap();

    match UserRepository::delete(db, by_id).await {
        Ok(id) => {
            tracing::info!(user_id = %id, "user deleted");
            Ok(UserMutationResult::DeletedUser(DeletedUser { id }))
        }
        Err(e) => {
            tracing::warn!(user_id = %by_id, error = %e, "failed to delete user");
            Ok(e.into())
        }
    }
}
