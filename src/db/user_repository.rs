use sea_orm::{ ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder };

use crate::db::entity::{ membership, user, Membership, User };
use crate::error::Result;

pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>> {
        let user = User::find_by_id(id).one(&self.db).await?;
        Ok(user)
    }

    pub async fn find_memberships(&self, user_id: i32) -> Result<Vec<membership::Model>> {
        let memberships = Membership::find()
            .filter(membership::Column::UserId.eq(user_id))
            .order_by_asc(membership::Column::Id)
            .all(&self.db).await?;

        Ok(memberships)
    }
}
