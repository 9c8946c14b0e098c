pub use super::asset::Entity as Asset;
pub use super::assigned_asset::Entity as AssignedAsset;
pub use super::audit_log::Entity as AuditLog;
pub use super::customer::Entity as Customer;
pub use super::deployment_task::Entity as DeploymentTask;
pub use super::fdh::Entity as Fdh;
pub use super::fiber_drop_line::Entity as FiberDropLine;
pub use super::headend::Entity as Headend;
pub use super::network_connection::Entity as NetworkConnection;
pub use super::splitter::Entity as Splitter;
pub use super::support_ticket::Entity as SupportTicket;
pub use super::task_checklist::Entity as TaskChecklist;
pub use super::task_note::Entity as TaskNote;
pub use super::technician::Entity as Technician;
pub use super::user::Entity as User;
pub use super::user_log::Entity as UserLog;
