use super::{CreatePostInput, PostMutationResult};
use crate::types::post::Post as PostType;
use async_graphql::{Context, Result};
use repositories::PostRepository;
use sea_orm::*;
use uuid::Uuid;

pub(super) async fn create_post(
    ctx: &Context<'_>,
    input: CreatePostInput,
) -> Result<PostMutationResult> {
    let db = ctx.data::<DatabaseConnection>().unwrap();

    // No author existence check here; the foreign key constraint reports
    // a dangling author_id as a ConstraintViolation.
    match PostRepository::create_post(
        db,
        Uuid::new_v4(),
        input.title,
        input.image,
        input.paragraph,
        input.author_id,
    )
    .await
    {
        Ok(row) => {
            tracing::info!(post_id = %row.post.id, "post created");
            Ok(PostMutationResult::Post(PostType::from_models(
                &row.post,
                &row.author,
            )))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to create post");
            Ok(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn test_create_post_returns_post_with_author() {
        let ann = sample_user("Ann");
        let post = sample_post("Hi", ann.id);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post.clone()]])
            .append_query_results([vec![ann.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let schema = create_test_schema(db);

        let query = format!(
            r#"mutation {{
                createPost(input: {{ title: "Hi", authorId: "{}", image: "i.png", paragraph: "..." }}) {{
                    __typename
                    ... on Post {{ id title image paragraph author {{ id name }} }}
                }}
            }}"#,
            ann.id
        );

        let res = schema.execute(Request::new(&query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["createPost"]["__typename"], "Post");
        assert_eq!(data["createPost"]["id"], post.id.to_string());
        assert_eq!(data["createPost"]["title"], "Hi");
        assert_eq!(data["createPost"]["author"]["id"], ann.id.to_string());
    }
}
