//! Audit log and login log repositories.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Repository for the audit trail of mutating operations.
pub struct AuditLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records an audit entry stamped with the current UTC time.
    pub async fn create(
        &self,
        user_id: Option<i32>,
        action_type: String,
        description: Option<String>,
    ) -> Result<entity::audit_log::Model, DbErr> {
        entity::prelude::AuditLog::insert(entity::audit_log::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            action_type: ActiveValue::Set(action_type),
            description: ActiveValue::Set(description),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Lists audit entries with optional action-type and user filters,
    /// newest first, capped at `limit`.
    pub async fn find_filtered(
        &self,
        action_type: Option<&str>,
        user_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<entity::audit_log::Model>, DbErr> {
        let mut query = entity::prelude::AuditLog::find();

        if let Some(action_type) = action_type {
            query = query.filter(entity::audit_log::Column::ActionType.eq(action_type));
        }
        if let Some(user_id) = user_id {
            query = query.filter(entity::audit_log::Column::UserId.eq(user_id));
        }

        query
            .order_by_desc(entity::audit_log::Column::Timestamp)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Lists the distinct action types present in the log, for filter
    /// dropdowns.
    pub async fn distinct_action_types(&self) -> Result<Vec<String>, DbErr> {
        #[derive(Debug, sea_orm::FromQueryResult)]
        struct Row {
            action_type: String,
        }

        let rows = entity::prelude::AuditLog::find()
            .select_only()
            .column(entity::audit_log::Column::ActionType)
            .distinct()
            .order_by_asc(entity::audit_log::Column::ActionType)
            .into_model::<Row>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|r| r.action_type).collect())
    }
}

/// Repository for login session records.
pub struct UserLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a login stamped with the current UTC time.
    pub async fn record_login(
        &self,
        user_id: i32,
        ip_address: Option<String>,
    ) -> Result<entity::user_log::Model, DbErr> {
        entity::prelude::UserLog::insert(entity::user_log::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            login_time: ActiveValue::Set(Utc::now()),
            ip_address: ActiveValue::Set(ip_address),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Stamps the logout time on the user's most recent open session.
    pub async fn record_logout(&self, user_id: i32) -> Result<(), DbErr> {
        let open_session = entity::prelude::UserLog::find()
            .filter(entity::user_log::Column::UserId.eq(user_id))
            .filter(entity::user_log::Column::LogoutTime.is_null())
            .order_by_desc(entity::user_log::Column::LoginTime)
            .one(self.db)
            .await?;

        if let Some(session) = open_session {
            entity::prelude::UserLog::update_many()
                .filter(entity::user_log::Column::Id.eq(session.id))
                .col_expr(
                    entity::user_log::Column::LogoutTime,
                    sea_orm::sea_query::Expr::value(Some(Utc::now())),
                )
                .exec(self.db)
                .await?;
        }
        Ok(())
    }

    /// Lists the most recent logins, newest first, capped at `limit`.
    pub async fn recent_logins(&self, limit: u64) -> Result<Vec<entity::user_log::Model>, DbErr> {
        entity::prelude::UserLog::find()
            .order_by_desc(entity::user_log::Column::LoginTime)
            .limit(limit)
            .all(self.db)
            .await
    }
}
