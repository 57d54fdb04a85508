use sea_orm::{ ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter };

use crate::db::entity::{ address, Address };
use crate::error::Result;

pub struct AddressRepository {
    db: DatabaseConnection,
}

impl AddressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies `changes` to the address with `id` only if it belongs to `user_id`.
    /// Returns the number of rows affected; zero is not an error.
    pub async fn update_owned(
        &self,
        id: i32,
        user_id: i32,
        changes: address::ActiveModel
    ) -> Result<u64> {
        let result = Address::update_many()
            .set(changes)
            .filter(address::Column::Id.eq(id))
            .filter(address::Column::UserId.eq(user_id))
            .exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}
