use super::{hash_password, UpdateUserInput, UserMutationResult};
use crate::errors::InternalError;
use crate::types::user::User as UserType;
use async_graphql::{Context, Result};
use repositories::UserRepository;
use sea_orm::*;
use uuid::Uuid;

pub(super) async fn update_user(
    ctx: &Context<'_>,
    by_id: Uuid,
    input: UpdateUserInput,
) -> Result<UserMutationResult> {
    let db = ctx.data::<DatabaseConnection>().unwrap();

    // The password is re-hashed on every update; there is no path that
    // keeps the previous hash.
    let password_hash = match hash_password(&input.password) {
        Ok(hash) => hash,
        Err(_) => {
            return Ok(UserMutationResult::Internal(InternalError {
                message: "Failed to hash password".to_string(),
            }))
        }
    };

    match UserRepository::update(
        db,
        by_id,
        input.name,
        input.email,
        input.username,
        password_hash,
        input.is_verified,
    )
    .await
    {
        Ok(row) => Ok(UserMutationResult::User(UserType::from_parts(
            &row.user, &row.posts,
        ))),
        Err(e) => {
            tracing::warn!(user_id = %by_id, error = %e, "failed to update user");
            Ok(e.into())
        }
    }
}
