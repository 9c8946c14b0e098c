use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLogs::Table)
                    .if_not_exists()
                    .col(pk_auto(UserLogs::Id))
                    .col(integer(UserLogs::UserId))
                    .col(
                        timestamp(UserLogs::LoginTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(UserLogs::LogoutTime))
                    .col(string_null(UserLogs::IpAddress))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_log_user_id")
                            .from(UserLogs::Table, UserLogs::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserLogs {
    Table,
    Id,
    UserId,
    LoginTime,
    LogoutTime,
    IpAddress,
}
