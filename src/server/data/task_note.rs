//! Task note data repository.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::task::TaskNote;

/// Repository for free-text notes on deployment tasks.
pub struct TaskNoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskNoteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists a task's notes, newest first.
    pub async fn find_by_task(&self, task_id: i32) -> Result<Vec<TaskNote>, DbErr> {
        let entities = entity::prelude::TaskNote::find()
            .filter(entity::task_note::Column::TaskId.eq(task_id))
            .order_by_desc(entity::task_note::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TaskNote::from_entity).collect())
    }

    /// Adds a note to a task, stamped with the current UTC time.
    pub async fn create(
        &self,
        task_id: i32,
        content: String,
        author: String,
    ) -> Result<TaskNote, DbErr> {
        let entity = entity::prelude::TaskNote::insert(entity::task_note::ActiveModel {
            task_id: ActiveValue::Set(task_id),
            content: ActiveValue::Set(content),
            author: ActiveValue::Set(author),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(TaskNote::from_entity(entity))
    }
}
