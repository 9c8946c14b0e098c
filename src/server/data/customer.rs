//! Customer data repository for database operations.

use entity::enums::CustomerStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::customer::{CreateCustomerParams, Customer};

/// Repository providing database operations for customers.
pub struct CustomerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CustomerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new customer record.
    pub async fn create(&self, params: CreateCustomerParams) -> Result<Customer, DbErr> {
        let entity = entity::prelude::Customer::insert(entity::customer::ActiveModel {
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            neighborhood: ActiveValue::Set(params.neighborhood),
            plan: ActiveValue::Set(params.plan),
            connection_type: ActiveValue::Set(params.connection_type),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }

    pub async fn find_by_id(&self, customer_id: i32) -> Result<Option<Customer>, DbErr> {
        let entity = entity::prelude::Customer::find_by_id(customer_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Customer::from_entity))
    }

    /// Lists all customers, newest first.
    pub async fn get_all(&self) -> Result<Vec<Customer>, DbErr> {
        let entities = entity::prelude::Customer::find()
            .order_by_desc(entity::customer::Column::CustomerId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Customer::from_entity).collect())
    }

    /// Lists customers attached to one splitter, ordered by port.
    pub async fn find_by_splitter(&self, splitter_id: i32) -> Result<Vec<Customer>, DbErr> {
        let entities = entity::prelude::Customer::find()
            .filter(entity::customer::Column::SplitterId.eq(splitter_id))
            .order_by_asc(entity::customer::Column::AssignedPort)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Customer::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Customer::find().count(self.db).await
    }

    pub async fn count_by_status(&self, status: CustomerStatus) -> Result<u64, DbErr> {
        entity::prelude::Customer::find()
            .filter(entity::customer::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Attaches a customer to a splitter port.
    pub async fn set_splitter_port(
        &self,
        customer_id: i32,
        splitter_id: i32,
        port: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::Customer::update_many()
            .filter(entity::customer::Column::CustomerId.eq(customer_id))
            .col_expr(
                entity::customer::Column::SplitterId,
                sea_orm::sea_query::Expr::value(Some(splitter_id)),
            )
            .col_expr(
                entity::customer::Column::AssignedPort,
                sea_orm::sea_query::Expr::value(Some(port)),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Detaches a customer from their splitter port.
    pub async fn clear_splitter_port(&self, customer_id: i32) -> Result<(), DbErr> {
        entity::prelude::Customer::update_many()
            .filter(entity::customer::Column::CustomerId.eq(customer_id))
            .col_expr(
                entity::customer::Column::SplitterId,
                sea_orm::sea_query::Expr::value(None::<i32>),
            )
            .col_expr(
                entity::customer::Column::AssignedPort,
                sea_orm::sea_query::Expr::value(None::<i32>),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
