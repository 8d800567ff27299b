//! Advisory recommendation types
//!
//! Everything here is transient: recommendations are fetched, shown, and
//! either applied (one explicit call) or discarded. They are never stored
//! alongside the request.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::Confidence;
use super::team::TeamSummary;

/// Per-technician workload entry sent to the advisory gateway.
///
/// `active_tasks` counts assigned requests with status `new` or
/// `in_progress`; repaired and scrapped requests never count.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianWorkload {
    pub id: String,
    pub name: String,
    pub team_id: String,
    pub team_name: String,
    pub active_tasks: usize,
}

/// Context for a full dispatch recommendation
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DispatchInput {
    pub equipment_name: String,
    pub equipment_category: String,
    pub subject: String,
    pub description: String,
    pub assigned_team: String,
    pub assigned_technician: String,
    pub technicians_workload: Vec<TechnicianWorkload>,
    pub teams: Vec<TeamSummary>,
}

/// Context for the lighter team-validation call
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalyzeInput {
    pub equipment_name: String,
    pub equipment_category: String,
    pub subject: String,
    pub description: String,
    pub assigned_team: String,
}

/// Full dispatch recommendation as returned by the advisory model.
///
/// All fields default so that a structurally valid but incomplete reply
/// still parses; missing ids surface later as a clean apply-time failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    #[serde(default)]
    pub is_correct_team: bool,
    #[serde(default)]
    pub recommended_team: String,
    #[serde(default)]
    pub recommended_team_id: String,
    #[serde(default)]
    pub recommended_technician: String,
    #[serde(default)]
    pub recommended_technician_id: String,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default)]
    pub popup_output: PopupOutput,
}

/// Presentation payload embedded in a recommendation
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PopupOutput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: RecommendationSummary,
    #[serde(default)]
    pub explanation: Vec<String>,
    #[serde(default)]
    pub workload_snapshot: Vec<String>,
    #[serde(default)]
    pub actions: RecommendationActions,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RecommendationSummary {
    #[serde(default)]
    pub current_team: String,
    #[serde(default)]
    pub current_technician: String,
    #[serde(default)]
    pub recommended_team: String,
    #[serde(default)]
    pub recommended_technician: String,
    #[serde(default)]
    pub confidence: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RecommendationActions {
    #[serde(default)]
    pub primary: String,
    #[serde(default)]
    pub secondary: String,
    #[serde(default)]
    pub note: String,
}

/// Result of the team-validation flow. Identifies the recommended team by
/// name only; applying it resolves the name against the current roster.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamAnalysis {
    #[serde(default)]
    pub is_correct_team: bool,
    #[serde(default)]
    pub recommended_team: String,
    #[serde(default)]
    pub recommended_technician: Option<String>,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub workload_snapshot: Vec<String>,
}

/// Apply a fetched recommendation to a request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRecommendation {
    pub team_id: String,
    pub technician_id: String,
}

/// Reassign an equipment's maintenance team by team name
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReassignTeam {
    pub team_name: String,
}
