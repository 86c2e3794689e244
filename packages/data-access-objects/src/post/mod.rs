use models::posts::{ActiveModel, Column, Entity, Model};
use models::prelude::Posts;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

pub struct PostDao;

impl PostDao {
    pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, DbErr> {
        Posts::find_by_id(id).one(db).await
    }

    pub async fn find_all_by_created_at(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Posts::find().order_by_asc(Column::CreatedAt).all(db).await
    }

    pub async fn find_by_author(
        db: &DatabaseConnection,
        author_id: Uuid,
    ) -> Result<Vec<Model>, DbErr> {
        Posts::find()
            .filter(Column::AuthorId.eq(author_id))
            .order_by_asc(Column::CreatedAt)
            .all(db)
            .await
    }

    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        let res = Posts::insert(model).exec(db).await?;
        Posts::find_by_id(res.last_insert_id)
            .one(db)
            .await?
            .ok_or(DbErr::Custom("Inserted post not found".to_string()))
    }

    pub async fn update(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
        Posts::delete_by_id(id).exec(db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_post(title: &str, author_id: Uuid) -> Model {
        let now = chrono::Utc::now().naive_utc();
        Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            image: "i.png".to_string(),
            paragraph: "...".to_string(),
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();

        let found = PostDao::find_by_id(&db, Uuid::new_v4()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_author_passes_rows_through() {
        let author_id = Uuid::new_v4();
        let first = sample_post("First", author_id);
        let second = sample_post("Second", author_id);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![first.clone(), second.clone()]])
            .into_connection();

        let posts = PostDao::find_by_author(&db, author_id).await.unwrap();
        assert_eq!(posts, vec![first, second]);
    }

    #[tokio::test]
    async fn test_delete_by_id_reports_zero_rows_on_miss() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let res = PostDao::delete_by_id(&db, Uuid::new_v4()).await.unwrap();
        assert_eq!(res.rows_affected, 0);
    }
}
