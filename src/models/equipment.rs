//! Equipment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::enums::EquipmentStatus;

/// Equipment record. `maintenance_team_id` and `default_technician_id` are
/// weak references resolved by lookup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    pub department: String,
    pub owner: String,
    pub location: String,
    pub purchase_date: NaiveDate,
    pub warranty_expiry: NaiveDate,
    pub maintenance_team_id: String,
    pub default_technician_id: String,
    pub status: EquipmentStatus,
    pub image: String,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Equipment name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Serial number is required"))]
    pub serial_number: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub location: String,
    pub purchase_date: NaiveDate,
    pub warranty_expiry: NaiveDate,
    #[serde(default)]
    pub maintenance_team_id: String,
    #[serde(default)]
    pub default_technician_id: String,
    /// Defaults to `active` when omitted
    pub status: Option<EquipmentStatus>,
    pub image: Option<String>,
}

/// Update equipment request (partial merge)
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub department: Option<String>,
    pub owner: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub maintenance_team_id: Option<String>,
    pub default_technician_id: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub image: Option<String>,
}

/// Status change request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipmentStatus {
    pub status: EquipmentStatus,
}
