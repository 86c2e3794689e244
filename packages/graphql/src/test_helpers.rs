use async_graphql::{EmptySubscription, Schema};
use models::{posts, users};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::mutations::Mutations;
use crate::queries::Queries;

pub type TestSchema = Schema<Queries, Mutations, EmptySubscription>;

pub fn create_test_schema(db: DatabaseConnection) -> TestSchema {
    Schema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .data(db)
        .finish()
}

pub fn sample_user(name: &str) -> users::Model {
    let handle = name.to_lowercase();
    users::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", handle),
        username: Some(handle),
        password: "$argon2id$stub".to_string(),
        is_verified: false,
    }
}

pub fn sample_post(title: &str, author_id: Uuid) -> posts::Model {
    let now = chrono::Utc::now().naive_utc();
    posts::Model {
        id: Uuid::new_v4(),
        title: title.to_string(),
        image: "i.png".to_string(),
        paragraph: "...".to_string(),
        author_id,
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[test]
    fn test_schema_exposes_contract_operations() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let sdl = create_test_schema(db).sdl();

        for op in [
            "users", "user", "posts", "post", "createUser", "updateUser", "deleteUser",
            "createPost", "updatePost", "deletePost",
        ] {
            assert!(sdl.contains(op), "schema is missing {}", op);
        }

        // Mutation outcomes are unions, never status strings.
        assert!(sdl.contains("union UserMutationResult"));
        assert!(sdl.contains("union PostMutationResult"));

        // The stored hash stays out of the output type.
        let user_type = sdl.split("type User ").nth(1).unwrap();
        let user_block = user_type.split('}').next().unwrap();
        assert!(!user_block.contains("password"));
    }
}
