use super::{hash_password, CreateUserInput, UserMutationResult};
use crate::errors::InternalError;
use crate::types::user::User as UserType;
use async_graphql::{Context, Result};
use repositories::UserRepository;
use sea_orm::*;
use uuid::Uuid;

pub(super) async fn create_user(
    ctx: &Context<'_>,
    input: CreateUserInput,
) -> Result<UserMutationResult> {
    let db = ctx.data::<DatabaseConnection>().unwrap();

    let password_hash = match hash_password(&input.password) {
        Ok(hash) => hash,
        Err(_) => {
            return Ok(UserMutationResult::Internal(InternalError {
                message: "Failed to hash password".to_string(),
            }))
        }
    };

    match UserRepository::create(
        db,
        Uuid::new_v4(),
        input.name,
        input.email,
        input.username,
        password_hash,
    )
    .await
    {
        Ok(user) => {
            tracing::info!(user_id = %user.id, "user created");
            Ok(UserMutationResult::User(UserType::from_parts(&user, &[])))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to create user");
            Ok(e.into())
        }
    }
}
