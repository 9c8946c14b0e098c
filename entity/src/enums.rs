//! String-valued active enums shared across the schema.
//!
//! Every enum is stored as its string value so the database rows stay
//! readable and new variants never renumber existing data.

use sea_orm::entity::prelude::*;

/// Application role attached to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UserRole {
    #[sea_orm(string_value = "Admin")]
    Admin,
    #[sea_orm(string_value = "Planner")]
    Planner,
    #[sea_orm(string_value = "Technician")]
    Technician,
    #[sea_orm(string_value = "SupportAgent")]
    SupportAgent,
    #[sea_orm(string_value = "FieldEngineer")]
    FieldEngineer,
    #[sea_orm(string_value = "DeploymentLead")]
    DeploymentLead,
}

/// Kind of inventory asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AssetType {
    /// Optical Network Terminal.
    #[sea_orm(string_value = "ONT")]
    Ont,
    #[sea_orm(string_value = "Router")]
    Router,
    #[sea_orm(string_value = "Splitter")]
    Splitter,
    /// Fiber Distribution Hub.
    #[sea_orm(string_value = "FDH")]
    Fdh,
    #[sea_orm(string_value = "Switch")]
    Switch,
    /// Customer Premises Equipment.
    #[sea_orm(string_value = "CPE")]
    Cpe,
    #[sea_orm(string_value = "FiberRoll")]
    FiberRoll,
}

/// Lifecycle status of an inventory asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum AssetStatus {
    #[sea_orm(string_value = "Available")]
    Available,
    #[sea_orm(string_value = "Assigned")]
    Assigned,
    #[sea_orm(string_value = "Faulty")]
    Faulty,
    #[sea_orm(string_value = "Retired")]
    Retired,
}

/// Customer service lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum CustomerStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
    #[sea_orm(string_value = "Pending")]
    Pending,
}

/// Physical connection medium for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ConnectionType {
    #[sea_orm(string_value = "Wired")]
    Wired,
    #[sea_orm(string_value = "Wireless")]
    Wireless,
}

/// Status of a fiber drop line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum LineStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Disconnected")]
    Disconnected,
}

/// Status of a deployment task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TaskStatus {
    #[sea_orm(string_value = "Scheduled")]
    Scheduled,
    #[sea_orm(string_value = "InProgress")]
    InProgress,
    #[sea_orm(string_value = "Completed")]
    Completed,
    #[sea_orm(string_value = "Failed")]
    Failed,
}

/// Status of a customer's network connection record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ConnectionStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
    #[sea_orm(string_value = "Suspended")]
    Suspended,
}

/// Status of a support ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TicketStatus {
    #[sea_orm(string_value = "Open")]
    Open,
    #[sea_orm(string_value = "InProgress")]
    InProgress,
    #[sea_orm(string_value = "Resolved")]
    Resolved,
    #[sea_orm(string_value = "Closed")]
    Closed,
}

/// Priority of a support ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, DeriveDisplay)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TicketPriority {
    #[sea_orm(string_value = "High")]
    High,
    #[sea_orm(string_value = "Medium")]
    Medium,
    #[sea_orm(string_value = "Low")]
    Low,
}
