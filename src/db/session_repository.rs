use sea_orm::{ ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter };

use crate::db::entity::{ session, Session };
use crate::error::Result;

pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_token_hash(&self, hashed_token: &str) -> Result<Option<session::Model>> {
        let session = Session::find()
            .filter(session::Column::HashedSessionToken.eq(hashed_token))
            .one(&self.db).await?;

        Ok(session)
    }
}
