use data_access_objects::PostDao;
use sea_orm::entity::prelude::Uuid;
use sea_orm::*;

use super::PostRepository;
use crate::error::RepoError;

impl PostRepository {
    /// Single conditional delete. A miss is a `NotFound`, never silence.
    pub async fn delete_post(db: &DatabaseConnection, id: Uuid) -> Result<Uuid, RepoError> {
        let res = PostDao::delete_by_id(db, id).await?;
        if res.rows_affected == 0 {
            return Err(RepoError::NotFound(format!("post {}", id)));
        }
        Ok(id)
    }
}
