//! Task checklist data repository.

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::task::{ChecklistItem, ChecklistItemParams};

/// Repository for checklist items attached to deployment tasks.
pub struct ChecklistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ChecklistRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists a task's checklist in display order.
    pub async fn find_by_task(&self, task_id: i32) -> Result<Vec<ChecklistItem>, DbErr> {
        let entities = entity::prelude::TaskChecklist::find()
            .filter(entity::task_checklist::Column::TaskId.eq(task_id))
            .order_by_asc(entity::task_checklist::Column::DisplayOrder)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ChecklistItem::from_entity).collect())
    }

    /// Seeds a task's checklist with the given items, in order.
    pub async fn seed(&self, task_id: i32, items: &[&str]) -> Result<(), DbErr> {
        if items.is_empty() {
            return Ok(());
        }

        let models = items.iter().enumerate().map(|(idx, item)| {
            entity::task_checklist::ActiveModel {
                task_id: ActiveValue::Set(task_id),
                item: ActiveValue::Set(item.to_string()),
                completed: ActiveValue::Set(false),
                display_order: ActiveValue::Set(idx as i32 + 1),
                ..Default::default()
            }
        });

        entity::prelude::TaskChecklist::insert_many(models)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces a task's checklist wholesale. Items keep the order they were
    /// submitted in.
    pub async fn replace(
        &self,
        task_id: i32,
        items: Vec<ChecklistItemParams>,
    ) -> Result<(), DbErr> {
        entity::prelude::TaskChecklist::delete_many()
            .filter(entity::task_checklist::Column::TaskId.eq(task_id))
            .exec(self.db)
            .await?;

        if items.is_empty() {
            return Ok(());
        }

        let models = items.into_iter().enumerate().map(|(idx, item)| {
            entity::task_checklist::ActiveModel {
                task_id: ActiveValue::Set(task_id),
                item: ActiveValue::Set(item.item),
                completed: ActiveValue::Set(item.completed),
                display_order: ActiveValue::Set(idx as i32 + 1),
                ..Default::default()
            }
        });

        entity::prelude::TaskChecklist::insert_many(models)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
