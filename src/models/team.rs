//! Team and technician models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Technician record. Owned by exactly one team; `team_id` is a
/// back-reference, not an ownership link.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub team_id: String,
}

/// Maintenance team. Owns its technician list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display color (hex)
    pub color: String,
    pub technicians: Vec<Technician>,
}

/// Create team request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeam {
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    /// Initial roster; each technician is assigned a fresh id and a
    /// back-reference to the new team.
    #[serde(default)]
    pub technicians: Vec<CreateTechnician>,
}

/// Add technician request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTechnician {
    #[validate(length(min = 1, message = "Technician name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub avatar: Option<String>,
}

/// Short team view sent to the advisory gateway
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&Team> for TeamSummary {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id.clone(),
            name: team.name.clone(),
            description: team.description.clone(),
        }
    }
}
