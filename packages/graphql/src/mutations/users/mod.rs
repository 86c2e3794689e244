use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use async_graphql::{Context, InputObject, Object, Result, Union};
use repositories::RepoError;
use uuid::Uuid;

use crate::errors::{ConflictError, ConstraintViolationError, InternalError, NotFoundError};
use crate::types::user::{DeletedUser, User as UserType};

mod create_user;
mod delete_user;
mod update_user;

#[derive(Union)]
pub enum UserMutationResult {
    User(UserType),
    DeletedUser(DeletedUser),
    NotFound(NotFoundError),
    ConstraintViolation(ConstraintViolationError),
    Conflict(ConflictError),
    Internal(InternalError),
}

impl From<RepoError> for UserMutationResult {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(message) => {
                UserMutationResult::NotFound(NotFoundError { message })
            }
            RepoError::ConstraintViolation(message) => {
                UserMutationResult::ConstraintViolation(ConstraintViolationError { message })
            }
            RepoError::Conflict(message) => {
                UserMutationResult::Conflict(ConflictError { message })
            }
            RepoError::Internal(message) => {
                UserMutationResult::Internal(InternalError { message })
            }
        }
    }
}

#[derive(InputObject)]
struct CreateUserInput {
    name: String,
    email: String,
    username: Option<String>,
    password: String,
}

#[derive(InputObject)]
struct UpdateUserInput {
    name: String,
    email: String,
    username: Option<String>,
    password: String,
    is_verified: bool,
}

fn hash_password(raw: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(raw.as_bytes(), &salt)?.to_string())
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        input: CreateUserInput,
    ) -> Result<UserMutationResult> {
        create_user::create_user(ctx, input).await
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        by_id: Uuid,
        input: UpdateUserInput,
    ) -> Result<UserMutationResult> {
        update_user::update_user(ctx, by_id, input).await
    }

    async fn delete_user(&self, ctx: &Context<'_>, by_id: Uuid) -> Result<UserMutationResult> {
        delete_user::delete_user(ctx, by_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::hash_password;
    use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};

    #[test]
    fn test_hash_password_is_not_plaintext() {
        let hash = hash_password("secret").unwrap();
        assert_ne!(hash, "secret");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_hash_password_verifies_against_plaintext() {
        let hash = hash_password("secret").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(Argon2::default()
            .verify_password(b"secret", &parsed)
            .is_ok());
        assert!(Argon2::default()
            .verify_password(b"wrong", &parsed)
            .is_err());
    }

    #[test]
    fn test_hash_password_salts_each_call() {
        let first = hash_password("secret").unwrap();
        let second = hash_password("secret").unwrap();
        assert_ne!(first, second);
    }
}
