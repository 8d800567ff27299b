//! Maintenance request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{MaintenanceType, Priority, RequestStatus};

/// Maintenance request record. `equipment_id`, `team_id` and
/// `assigned_technician_id` are weak references resolved by lookup.
///
/// `time_spent` and `duration` are free-form hour counts with no enforced
/// relationship; time spent may exceed the planned duration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: String,
    pub subject: String,
    pub description: String,
    pub equipment_id: String,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub status: RequestStatus,
    pub scheduled_date: NaiveDate,
    /// Planned duration in hours
    pub duration: f64,
    pub team_id: Option<String>,
    pub assigned_technician_id: Option<String>,
    /// Hours logged so far
    pub time_spent: f64,
    pub priority: Priority,
    pub created_at: NaiveDate,
}

/// Create request payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "Equipment is required"))]
    pub equipment_id: String,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    /// Defaults to `new` when omitted
    pub status: Option<RequestStatus>,
    pub scheduled_date: NaiveDate,
    pub duration: f64,
    pub team_id: Option<String>,
    pub assigned_technician_id: Option<String>,
    pub time_spent: Option<f64>,
    pub priority: Priority,
}

/// Update request payload (partial merge)
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub equipment_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<MaintenanceType>,
    pub status: Option<RequestStatus>,
    pub scheduled_date: Option<NaiveDate>,
    pub duration: Option<f64>,
    pub team_id: Option<String>,
    pub assigned_technician_id: Option<String>,
    pub time_spent: Option<f64>,
    pub priority: Option<Priority>,
}

/// Status change request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRequestStatus {
    pub status: RequestStatus,
}
