//! Customer service.
//!
//! Owns the customer lifecycle: quick creation by field engineers, the full
//! transactional onboarding flow, the support detail view, and splitter port
//! attachment with its capacity bookkeeping.

use chrono::NaiveDate;
use entity::enums::{ConnectionStatus, ConnectionType, CustomerStatus, TaskStatus};
use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};

use crate::{
    model::customer::{
        AssignSplitterPortDto, CreateCustomerDto, CustomerDetailDto, CustomerOnboardingDto,
        CustomerOnboardingResponseDto, SplitterInfoDto,
    },
    server::{
        data::{
            asset::AssetRepository,
            customer::CustomerRepository,
            fiber_drop_line::FiberDropLineRepository,
            network_connection::{CreateConnectionParams, NetworkConnectionRepository},
            splitter::SplitterRepository,
            task::TaskRepository,
            task_checklist::ChecklistRepository,
            technician::TechnicianRepository,
        },
        error::AppError,
        model::{
            asset::Asset,
            customer::{CreateCustomerParams, Customer},
            task::CreateTaskParams,
        },
        service::audit::AuditService,
    },
};

/// Default checklist seeded onto every installation task.
pub const INSTALLATION_CHECKLIST: &[&str] = &[
    "Verify customer address and access",
    "Run fiber drop from splitter to premises",
    "Mount and connect ONT",
    "Configure and test router",
    "Verify signal levels",
    "Confirm service activation with customer",
];

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all customers, newest first.
    pub async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(CustomerRepository::new(self.db).get_all().await?)
    }

    /// Finds a single customer.
    pub async fn get_by_id(&self, customer_id: i32) -> Result<Customer, AppError> {
        CustomerRepository::new(self.db)
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }

    /// Creates a Pending customer from the field-engineer quick form.
    pub async fn create(
        &self,
        dto: CreateCustomerDto,
        acting_user_id: i32,
    ) -> Result<Customer, AppError> {
        let connection_type = parse_connection_type(&dto.connection_type)?;

        let customer = CustomerRepository::new(self.db)
            .create(CreateCustomerParams {
                name: dto.name,
                address: dto.address,
                neighborhood: dto.neighborhood,
                plan: dto.plan,
                connection_type: Some(connection_type),
                status: CustomerStatus::Pending,
            })
            .await?;

        AuditService::new(self.db)
            .log(
                Some(acting_user_id),
                "CUSTOMER_CREATED",
                &format!("Created customer '{}'", customer.name),
            )
            .await;

        Ok(customer)
    }

    /// Runs the full onboarding flow in one transaction.
    ///
    /// Creates the customer (Pending), their network connection record, and
    /// an Installation task for the chosen technician seeded with the default
    /// checklist. Returns the generated customer reference and task id.
    pub async fn onboard(
        &self,
        dto: CustomerOnboardingDto,
        acting_user_id: i32,
    ) -> Result<CustomerOnboardingResponseDto, AppError> {
        let connection_type = parse_connection_type(&dto.connection_type)?;

        let installation_date =
            NaiveDate::parse_from_str(&dto.installation_date, "%Y-%m-%d").map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid installation date '{}'; expected YYYY-MM-DD",
                    dto.installation_date
                ))
            })?;

        let txn = self.db.begin().await?;

        if let Some(technician_id) = dto.technician_id {
            if TechnicianRepository::new(&txn)
                .find_by_id(technician_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Technician not found".to_string()));
            }
        }

        let customer = CustomerRepository::new(&txn)
            .create(CreateCustomerParams {
                name: dto.name.clone(),
                address: Some(dto.address.clone()),
                neighborhood: dto.neighborhood.clone(),
                plan: Some(dto.plan.clone()),
                connection_type: Some(connection_type),
                status: CustomerStatus::Pending,
            })
            .await?;

        NetworkConnectionRepository::new(&txn)
            .create(CreateConnectionParams {
                customer_id: customer.customer_id,
                deployment_zone: dto.deployment_zone,
                fdh_location: dto.fdh_location,
                splitter_port: dto.splitter_port,
                ont_serial: dto.ont_serial,
                router_serial: dto.router_serial,
                cable_length: dto.cable_length,
                status: ConnectionStatus::Pending,
            })
            .await?;

        let task = TaskRepository::new(&txn)
            .create(CreateTaskParams {
                customer_id: Some(customer.customer_id),
                technician_id: dto.technician_id,
                task_type: "Installation".to_string(),
                status: TaskStatus::Scheduled,
                scheduled_date: Some(installation_date),
                description: dto.notes,
            })
            .await?;

        ChecklistRepository::new(&txn)
            .seed(task.task_id, INSTALLATION_CHECKLIST)
            .await?;

        txn.commit().await?;

        let customer_ref = format!("CUST-{:06}", customer.customer_id);

        AuditService::new(self.db)
            .log(
                Some(acting_user_id),
                "CUSTOMER_ONBOARDED",
                &format!("Onboarded customer '{}' ({})", customer.name, customer_ref),
            )
            .await;

        Ok(CustomerOnboardingResponseDto {
            customer_id: customer.customer_id,
            customer_ref,
            name: customer.name,
            status: customer.status.to_value(),
            task_id: task.task_id,
            message: "Customer onboarded successfully".to_string(),
        })
    }

    /// Builds the support detail view: customer, splitter summary, and
    /// allocated assets.
    pub async fn detail(&self, customer_id: i32) -> Result<CustomerDetailDto, AppError> {
        let customer = self.get_by_id(customer_id).await?;

        let splitter = match customer.splitter_id {
            Some(splitter_id) => SplitterRepository::new(self.db)
                .find_by_id(splitter_id)
                .await?
                .map(|s| SplitterInfoDto {
                    splitter_id: s.splitter_id,
                    model: s.model,
                    location: s.location,
                }),
            None => None,
        };

        let assigned_assets = AssetRepository::new(self.db)
            .find_by_customer(customer_id)
            .await?
            .into_iter()
            .map(Asset::into_allocated_dto)
            .collect();

        Ok(CustomerDetailDto {
            customer_id: customer.customer_id,
            name: customer.name,
            address: customer.address,
            neighborhood: customer.neighborhood,
            plan: customer.plan,
            connection_type: customer.connection_type.map(|c| c.to_value()),
            status: customer.status.to_value(),
            assigned_port: customer.assigned_port,
            created_at: customer.created_at,
            splitter,
            assigned_assets,
        })
    }

    /// Attaches a customer to a splitter port inside a transaction.
    ///
    /// The port defaults to the next free one. Rejects full splitters and
    /// customers already attached somewhere. Records the physical drop line
    /// alongside the port bookkeeping.
    pub async fn assign_splitter_port(
        &self,
        customer_id: i32,
        dto: AssignSplitterPortDto,
        acting_user_id: i32,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let customer_repo = CustomerRepository::new(&txn);
        let splitter_repo = SplitterRepository::new(&txn);

        let Some(customer) = customer_repo.find_by_id(customer_id).await? else {
            return Err(AppError::NotFound("Customer not found".to_string()));
        };

        if customer.splitter_id.is_some() {
            return Err(AppError::BadRequest(
                "Customer is already attached to a splitter".to_string(),
            ));
        }

        let Some(splitter) = splitter_repo.find_by_id(dto.splitter_id).await? else {
            return Err(AppError::NotFound("Splitter not found".to_string()));
        };

        if splitter.used_ports >= splitter.port_capacity {
            return Err(AppError::BadRequest(format!(
                "Splitter #{} has no free ports",
                splitter.splitter_id
            )));
        }

        let port = match dto.port {
            Some(port) => {
                if port < 1 || port > splitter.port_capacity {
                    return Err(AppError::BadRequest(format!(
                        "Port {} is out of range for splitter #{}",
                        port, splitter.splitter_id
                    )));
                }
                let taken = customer_repo
                    .find_by_splitter(splitter.splitter_id)
                    .await?
                    .iter()
                    .any(|c| c.assigned_port == Some(port));
                if taken {
                    return Err(AppError::BadRequest(format!(
                        "Port {} on splitter #{} is already in use",
                        port, splitter.splitter_id
                    )));
                }
                port
            }
            None => next_free_port(
                &customer_repo.find_by_splitter(splitter.splitter_id).await?,
                splitter.port_capacity,
            )
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Splitter #{} has no free ports",
                    splitter.splitter_id
                ))
            })?,
        };

        customer_repo
            .set_splitter_port(customer_id, splitter.splitter_id, port)
            .await?;
        splitter_repo
            .set_used_ports(splitter.splitter_id, splitter.used_ports + 1)
            .await?;
        FiberDropLineRepository::new(&txn)
            .create(Some(splitter.splitter_id), Some(customer_id), None)
            .await?;

        txn.commit().await?;

        AuditService::new(self.db)
            .log(
                Some(acting_user_id),
                "SPLITTER_PORT_ASSIGNED",
                &format!(
                    "Attached customer #{} to splitter #{} port {}",
                    customer_id, dto.splitter_id, port
                ),
            )
            .await;

        Ok(())
    }

    /// Detaches a customer from their splitter port, freeing the port and
    /// marking their drop lines disconnected.
    pub async fn release_splitter_port(
        &self,
        customer_id: i32,
        acting_user_id: i32,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let customer_repo = CustomerRepository::new(&txn);
        let splitter_repo = SplitterRepository::new(&txn);

        let Some(customer) = customer_repo.find_by_id(customer_id).await? else {
            return Err(AppError::NotFound("Customer not found".to_string()));
        };

        let Some(splitter_id) = customer.splitter_id else {
            return Err(AppError::BadRequest(
                "Customer is not attached to a splitter".to_string(),
            ));
        };

        if let Some(splitter) = splitter_repo.find_by_id(splitter_id).await? {
            splitter_repo
                .set_used_ports(splitter_id, (splitter.used_ports - 1).max(0))
                .await?;
        }

        customer_repo.clear_splitter_port(customer_id).await?;
        FiberDropLineRepository::new(&txn)
            .disconnect_by_customer(customer_id)
            .await?;

        txn.commit().await?;

        AuditService::new(self.db)
            .log(
                Some(acting_user_id),
                "SPLITTER_PORT_RELEASED",
                &format!(
                    "Detached customer #{} from splitter #{}",
                    customer_id, splitter_id
                ),
            )
            .await;

        Ok(())
    }
}

fn parse_connection_type(value: &str) -> Result<ConnectionType, AppError> {
    ConnectionType::try_from_value(&value.to_string())
        .map_err(|_| AppError::BadRequest(format!("Unknown connection type '{}'", value)))
}

/// Returns the lowest port number in `1..=capacity` not taken by any of the
/// given customers.
fn next_free_port(attached: &[Customer], capacity: i32) -> Option<i32> {
    (1..=capacity).find(|port| !attached.iter().any(|c| c.assigned_port == Some(*port)))
}
