use sea_orm_migration::prelude::*;

use crate::m20240101_000002_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Address::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Address::Id).integer().not_null().auto_increment().primary_key()
                )
                .col(ColumnDef::new(Address::UserId).integer().not_null())
                .col(ColumnDef::new(Address::Title).string().not_null())
                .col(ColumnDef::new(Address::Detail).text().not_null())
                .col(ColumnDef::new(Address::Country).string().not_null())
                .col(ColumnDef::new(Address::City).string().not_null())
                .col(ColumnDef::new(Address::District).string().not_null())
                .col(ColumnDef::new(Address::Street).string().not_null())
                .col(ColumnDef::new(Address::PostalCode).string_len(20).not_null())
                .col(
                    ColumnDef::new(Address::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(
                    ColumnDef::new(Address::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_address_user")
                        .from(Address::Table, Address::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx_address_user_id")
                .table(Address::Table)
                .col(Address::UserId)
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address {
    Table,
    Id,
    UserId,
    Title,
    Detail,
    Country,
    City,
    District,
    Street,
    PostalCode,
    CreatedAt,
    UpdatedAt,
}
