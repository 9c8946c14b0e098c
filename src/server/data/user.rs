//! User data repository for database operations.
//!
//! Handles account creation, credential lookup, role queries and login
//! bookkeeping. Credential columns (hash and salt) never leave this layer
//! except through `find_by_username`, which the auth service needs for
//! password verification.

use chrono::Utc;
use entity::enums::UserRole;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// New accounts start active with no recorded login.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on username
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(params.password_hash),
            password_salt: ActiveValue::Set(params.password_salt),
            role: ActiveValue::Set(params.role),
            active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key, returning the full entity model.
    ///
    /// Used by the auth guard, which needs role and active status on every
    /// request.
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by username, returning the full entity model including
    /// credential columns for password verification.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Lists all users with the given role.
    pub async fn find_by_role(&self, role: UserRole) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Lists all users ordered by username.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Counts all user accounts.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Enables or disables a user account.
    pub async fn set_active(&self, user_id: i32, active: bool) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::UserId.eq(user_id))
            .col_expr(
                entity::user::Column::Active,
                sea_orm::sea_query::Expr::value(active),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Stamps the user's last login with the current UTC time.
    pub async fn touch_last_login(&self, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::UserId.eq(user_id))
            .col_expr(
                entity::user::Column::LastLogin,
                sea_orm::sea_query::Expr::value(Some(Utc::now())),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
