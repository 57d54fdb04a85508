use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_organizations_table::Organization;
use crate::m20240101_000002_create_users_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Membership::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Membership::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(Membership::Role).string_len(20).not_null())
                .col(ColumnDef::new(Membership::OrganizationId).integer().not_null())
                .col(ColumnDef::new(Membership::UserId).integer().not_null())
                .col(
                    ColumnDef::new(Membership::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .col(
                    ColumnDef::new(Membership::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp())
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_membership_organization")
                        .from(Membership::Table, Membership::OrganizationId)
                        .to(Organization::Table, Organization::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_membership_user")
                        .from(Membership::Table, Membership::UserId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create()
                .name("idx_membership_org_user")
                .table(Membership::Table)
                .col(Membership::OrganizationId)
                .col(Membership::UserId)
                .unique()
                .to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Membership::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Membership {
    Table,
    Id,
    Role,
    OrganizationId,
    UserId,
    CreatedAt,
    UpdatedAt,
}
