use async_graphql::{Context, Error, Object, Result};
use repositories::UserRepository;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::types::user::User as UserType;

#[derive(Default)]
pub struct UserQueries;

#[Object]
impl UserQueries {
    /// All users ordered by name ascending, each with posts and post count.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserType>> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let rows = UserRepository::get_users(db)
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|r| UserType::from_parts(&r.user, &r.posts))
            .collect())
    }

    /// A single user by ID, or null when no such user exists.
    async fn user(&self, ctx: &Context<'_>, by_id: Uuid) -> Result<Option<UserType>> {
        let db = ctx.data::<DatabaseConnection>().unwrap();

        let row = UserRepository::get_user(db, by_id)
            .await
            .map_err(|e| Error::new(e.to_string()))?;

        if row.is_none() {
            tracing::debug!(user_id = %by_id, "user lookup missed");
        }

        Ok(row.map(|r| UserType::from_parts(&r.user, &r.posts)))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use models::{posts, users};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_users_returns_users_with_posts_and_count() {
        let ann = sample_user("Ann");
        let post = sample_post("Hi", ann.id);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![ann.clone()]])
            .append_query_results([vec![post.clone()]])
            .into_connection();
        let schema = create_test_schema(db);

        let query = r#"query { users { id name email username isVerified postCount posts { title author { id } } } }"#;

        let res = schema.execute(Request::new(query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        let users = data["users"].as_array().unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["name"], "Ann");
        assert_eq!(users[0]["postCount"], 1);
        assert_eq!(users[0]["posts"][0]["title"], "Hi");
        assert_eq!(users[0]["posts"][0]["author"]["id"], ann.id.to_string());

        // The stored hash must never appear in the schema.
        assert!(users[0].get("password").is_none());
    }

    #[tokio::test]
    async fn test_users_empty_returns_empty_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .append_query_results([Vec::<posts::Model>::new()])
            .into_connection();
        let schema = create_test_schema(db);

        let res = schema.execute(Request::new("query { users { id } }")).await;
        let data = res.data.into_json().unwrap();

        assert!(data["users"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_missing_returns_null_not_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<users::Model>::new()])
            .into_connection();
        let schema = create_test_schema(db);

        let query = format!(r#"query {{ user(byId: "{}") {{ id }} }}"#, Uuid::new_v4());

        let res = schema.execute(Request::new(&query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert!(data["user"].is_null());
    }

    #[tokio::test]
    async fn test_user_found_returns_fields() {
        let ann = sample_user("Ann");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![ann.clone()]])
            .append_query_results([Vec::<posts::Model>::new()])
            .into_connection();
        let schema = create_test_schema(db);

        let query = format!(
            r#"query {{ user(byId: "{}") {{ id name email postCount }} }}"#,
            ann.id
        );

        let res = schema.execute(Request::new(&query)).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["user"]["id"], ann.id.to_string());
        assert_eq!(data["user"]["name"], "Ann");
        assert_eq!(data["user"]["postCount"], 0);
    }
}
