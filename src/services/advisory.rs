//! Advisory gateway client
//!
//! Wraps the external recommendation model behind a narrow trait so the
//! defensive response handling stays isolated and unit-testable. The
//! gateway is an OpenAI-compatible chat-completions endpoint; replies are
//! treated as untrusted text that may or may not contain the requested
//! JSON.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::config::DispatchConfig;
use crate::models::{
    enums::Confidence,
    recommendation::{AnalyzeInput, DispatchInput, Recommendation, TeamAnalysis},
};

/// Errors surfaced by the advisory boundary. All are recoverable by retry
/// and none propagate past the dispatch service.
#[derive(Error, Debug)]
pub enum AdvisoryError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI credits exhausted. Please add more credits.")]
    CreditsExhausted,

    #[error("AI gateway error: {0}")]
    Gateway(String),

    #[error("Gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No content in AI response")]
    EmptyResponse,

    #[error("Invalid JSON in AI response")]
    MalformedResponse,
}

/// External recommendation model, seen as a typed but unreliable function
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdvisoryClient: Send + Sync {
    /// Full dispatch recommendation (team + technician with ids).
    /// A reply that cannot be parsed is an error.
    async fn recommend(&self, input: &DispatchInput) -> Result<Recommendation, AdvisoryError>;

    /// Lighter team-validation call. A reply that cannot be parsed is
    /// replaced by a synthesized low-confidence fallback.
    async fn analyze(&self, input: &AnalyzeInput) -> Result<TeamAnalysis, AdvisoryError>;
}

const DISPATCH_SYSTEM_PROMPT: &str = r#"You are an AI Maintenance Dispatcher for an enterprise maintenance platform called GearGuard.

Your role is to ASSIST humans by recommending the most suitable maintenance team and technician based on maintenance request details, team expertise, technician workload, and current assignment state.

You must NOT auto-assign tasks. All recommendations are advisory only and require explicit user confirmation.

INSTRUCTIONS:
1. Analyze the request subject and description carefully
2. Check if the currently assigned team matches the issue
3. If appropriate, confirm the current assignment
4. If not appropriate, recommend a more suitable team from the provided list
5. From the selected team, recommend the technician with the LOWEST active task count
6. Always explain reasoning using skill relevance and workload balance
7. Assign a confidence level: High, Medium, or Low

RESPONSE FORMAT (STRICT JSON ONLY):
{
  "is_correct_team": boolean,
  "recommended_team": "Team Name",
  "recommended_team_id": "team-id",
  "recommended_technician": "Technician Name",
  "recommended_technician_id": "tech-id",
  "confidence": "High" | "Medium" | "Low",
  "popup_output": {
    "title": "AI Assignment Recommendation",
    "summary": {
      "current_team": "Team Name",
      "current_technician": "Technician Name",
      "recommended_team": "Team Name",
      "recommended_technician": "Technician Name",
      "confidence": "High" | "Medium" | "Low"
    },
    "explanation": [
      "Short reason explaining skill alignment with the issue.",
      "Short reason explaining technician selection based on workload."
    ],
    "workload_snapshot": [
      "Technician A - X active tasks",
      "Technician B - Y active tasks"
    ],
    "actions": {
      "primary": "Reassign & Apply",
      "secondary": "Choose Manually",
      "note": "AI suggestions are advisory. Reassignment occurs only after user confirmation."
    }
  }
}

RULES:
- Recommendations only, never auto-assignment
- Prefer workload balance when skills are equal
- Keep explanations concise and professional
- Be conservative and realistic"#;

const ANALYZE_SYSTEM_PROMPT: &str = r#"You are an AI maintenance dispatcher for an enterprise maintenance system called GearGuard.

Your role is to ASSIST users by recommending the most suitable maintenance team based on the maintenance request details and team expertise. You must clearly explain your reasoning and never auto-assign tasks.

RULES:
- This is a recommendation only.
- Do NOT automatically apply assignments.
- Keep explanations short, clear, and professional.
- Be conservative and realistic in suggestions.

RESPONSE FORMAT (STRICT JSON ONLY):
{
  "is_correct_team": true or false,
  "recommended_team": "Team Name",
  "recommended_technician": "Technician Name or null if no data",
  "confidence": "High" | "Medium" | "Low",
  "reason": "Short explanation in one sentence",
  "workload_snapshot": ["Technician Name - X active tasks", "..."]
}"#;

/// Production client targeting the configured gateway
pub struct GatewayClient {
    http: reqwest::Client,
    config: DispatchConfig,
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl GatewayClient {
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// One round trip to the chat-completions endpoint, returning the raw
    /// assistant message text.
    async fn chat(&self, system: &str, user: String) -> Result<String, AdvisoryError> {
        let url = format!(
            "{}/chat/completions",
            self.config.gateway_url.trim_end_matches('/')
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&serde_json::json!({
                "model": self.config.model,
                "messages": [
                    { "role": "system", "content": system },
                    { "role": "user", "content": user },
                ],
                "temperature": 0.3,
                "max_tokens": 800,
            }))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AdvisoryError::RateLimited);
        }
        if status == StatusCode::PAYMENT_REQUIRED {
            return Err(AdvisoryError::CreditsExhausted);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("AI gateway error: {} {}", status, body);
            return Err(AdvisoryError::Gateway(format!("status {}", status)));
        }

        let completion: ChatCompletion = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AdvisoryError::EmptyResponse)
    }
}

#[async_trait]
impl AdvisoryClient for GatewayClient {
    async fn recommend(&self, input: &DispatchInput) -> Result<Recommendation, AdvisoryError> {
        let content = self
            .chat(DISPATCH_SYSTEM_PROMPT, dispatch_user_message(input))
            .await?;
        parse_recommendation(&content)
    }

    async fn analyze(&self, input: &AnalyzeInput) -> Result<TeamAnalysis, AdvisoryError> {
        let content = self
            .chat(ANALYZE_SYSTEM_PROMPT, analyze_user_message(input))
            .await?;
        Ok(parse_analysis(&content, &input.assigned_team))
    }
}

fn pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "[]".to_string())
}

fn dispatch_user_message(input: &DispatchInput) -> String {
    format!(
        "MAINTENANCE REQUEST DETAILS:\n\
         Equipment Name: {}\n\
         Equipment Category: {}\n\
         Request Subject: {}\n\
         Request Description: {}\n\
         Currently Assigned Team: {}\n\
         Currently Assigned Technician: {}\n\n\
         AVAILABLE TEAMS:\n{}\n\n\
         TECHNICIAN WORKLOAD DATA (with active task counts):\n{}\n\n\
         Please analyze this request and provide your recommendation in the specified JSON format.",
        input.equipment_name,
        input.equipment_category,
        input.subject,
        input.description,
        non_empty(&input.assigned_team),
        non_empty(&input.assigned_technician),
        pretty_json(&input.teams),
        pretty_json(&input.technicians_workload),
    )
}

fn analyze_user_message(input: &AnalyzeInput) -> String {
    format!(
        "MAINTENANCE REQUEST DETAILS:\n\
         Equipment Name: {}\n\
         Equipment Category: {}\n\
         Request Subject: {}\n\
         Request Description: {}\n\
         Currently Assigned Team: {}\n\n\
         Validate whether the currently assigned team is appropriate based on skill\n\
         matching and reply in the specified JSON format.",
        input.equipment_name,
        input.equipment_category,
        input.subject,
        input.description,
        non_empty(&input.assigned_team),
    )
}

fn non_empty(value: &str) -> &str {
    if value.is_empty() {
        "Not assigned"
    } else {
        value
    }
}

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)```").expect("valid regex"));

/// Pull a JSON object out of a model reply. Handles markdown code fences
/// and prose-wrapped output (via brace matching); returns `None` when no
/// balanced object is present.
fn extract_json(text: &str) -> Option<String> {
    if let Some(caps) = CODE_FENCE.captures(text) {
        let fenced = caps[1].trim();
        if !fenced.is_empty() {
            return Some(fenced.to_string());
        }
    }

    let start = text.find('{')?;
    let mut depth = 0usize;
    for (i, ch) in text[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(text[start..start + i + 1].to_string());
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_recommendation(content: &str) -> Result<Recommendation, AdvisoryError> {
    let json = extract_json(content).ok_or(AdvisoryError::MalformedResponse)?;
    serde_json::from_str(&json).map_err(|e| {
        tracing::error!("Failed to parse AI recommendation: {}", e);
        AdvisoryError::MalformedResponse
    })
}

fn parse_analysis(content: &str, assigned_team: &str) -> TeamAnalysis {
    extract_json(content)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_else(|| {
            tracing::warn!("Falling back to manual-review analysis, reply was not parseable");
            fallback_analysis(assigned_team)
        })
}

/// Synthesized result when the model reply cannot be parsed
fn fallback_analysis(assigned_team: &str) -> TeamAnalysis {
    TeamAnalysis {
        is_correct_team: true,
        recommended_team: assigned_team.to_string(),
        recommended_technician: None,
        confidence: Confidence::Low,
        reason: "Unable to analyze the request. Manual review recommended.".to_string(),
        workload_snapshot: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::TechnicianWorkload;
    use crate::models::team::TeamSummary;

    #[test]
    fn extract_json_plain_object() {
        let text = r#"{"is_correct_team": true}"#;
        assert_eq!(extract_json(text).as_deref(), Some(text));
    }

    #[test]
    fn extract_json_strips_code_fence() {
        let text = "```json\n{\"is_correct_team\": true}\n```";
        assert_eq!(
            extract_json(text).as_deref(),
            Some(r#"{"is_correct_team": true}"#)
        );
    }

    #[test]
    fn extract_json_strips_bare_fence() {
        let text = "```\n{\"confidence\": \"High\"}\n```";
        assert_eq!(
            extract_json(text).as_deref(),
            Some(r#"{"confidence": "High"}"#)
        );
    }

    #[test]
    fn extract_json_handles_surrounding_prose() {
        let text = r#"Here is my recommendation: {"recommended_team": "Mechanics"} Hope it helps."#;
        assert_eq!(
            extract_json(text).as_deref(),
            Some(r#"{"recommended_team": "Mechanics"}"#)
        );
    }

    #[test]
    fn extract_json_handles_nested_objects() {
        let text = r#"{"popup_output": {"title": "AI Assignment Recommendation"}}"#;
        assert_eq!(extract_json(text).as_deref(), Some(text));
    }

    #[test]
    fn extract_json_rejects_unbalanced_output() {
        assert!(extract_json("no json here").is_none());
        assert!(extract_json(r#"{"recommended_team": "Mechanics""#).is_none());
    }

    #[test]
    fn parse_recommendation_reads_full_reply() {
        let content = r#"```json
        {
          "is_correct_team": false,
          "recommended_team": "Electricians",
          "recommended_team_id": "team-2",
          "recommended_technician": "Emma Wilson",
          "recommended_technician_id": "tech-4",
          "confidence": "High",
          "popup_output": {
            "title": "AI Assignment Recommendation",
            "summary": {
              "current_team": "Mechanics",
              "current_technician": "John Carter",
              "recommended_team": "Electricians",
              "recommended_technician": "Emma Wilson",
              "confidence": "High"
            },
            "explanation": ["Sparks point to an electrical fault."],
            "workload_snapshot": ["Emma Wilson - 1 active tasks"],
            "actions": {
              "primary": "Reassign & Apply",
              "secondary": "Choose Manually",
              "note": "Advisory only."
            }
          }
        }
        ```"#;

        let rec = parse_recommendation(content).unwrap();
        assert!(!rec.is_correct_team);
        assert_eq!(rec.recommended_team_id, "team-2");
        assert_eq!(rec.recommended_technician_id, "tech-4");
        assert_eq!(rec.confidence, Confidence::High);
        assert_eq!(rec.popup_output.explanation.len(), 1);
    }

    #[test]
    fn parse_recommendation_defaults_missing_fields() {
        let rec = parse_recommendation(r#"{"recommended_team_id": "team-2"}"#).unwrap();
        assert_eq!(rec.recommended_team_id, "team-2");
        assert_eq!(rec.confidence, Confidence::Low);
        assert!(!rec.is_correct_team);
        assert!(rec.recommended_technician_id.is_empty());
    }

    #[test]
    fn parse_recommendation_rejects_garbage() {
        assert!(matches!(
            parse_recommendation("the model had a bad day"),
            Err(AdvisoryError::MalformedResponse)
        ));
    }

    #[test]
    fn parse_analysis_falls_back_on_garbage() {
        let analysis = parse_analysis("not json at all", "Mechanics");
        assert!(analysis.is_correct_team);
        assert_eq!(analysis.recommended_team, "Mechanics");
        assert_eq!(analysis.confidence, Confidence::Low);
        assert_eq!(
            analysis.reason,
            "Unable to analyze the request. Manual review recommended."
        );
    }

    #[test]
    fn parse_analysis_reads_valid_reply() {
        let content = r#"{"is_correct_team": false, "recommended_team": "IT Support",
            "confidence": "Medium", "reason": "Network symptoms"}"#;
        let analysis = parse_analysis(content, "Mechanics");
        assert!(!analysis.is_correct_team);
        assert_eq!(analysis.recommended_team, "IT Support");
        assert_eq!(analysis.confidence, Confidence::Medium);
    }

    #[test]
    fn dispatch_user_message_embeds_workload_and_teams() {
        let input = DispatchInput {
            equipment_name: "Industrial Robot Arm".to_string(),
            equipment_category: "Assembly".to_string(),
            subject: "Motor overheating issue".to_string(),
            description: "Temperature warnings during operation".to_string(),
            assigned_team: String::new(),
            assigned_technician: String::new(),
            technicians_workload: vec![TechnicianWorkload {
                id: "tech-3".to_string(),
                name: "Mike Chen".to_string(),
                team_id: "team-2".to_string(),
                team_name: "Electricians".to_string(),
                active_tasks: 1,
            }],
            teams: vec![TeamSummary {
                id: "team-2".to_string(),
                name: "Electricians".to_string(),
                description: "Electrical systems and wiring".to_string(),
            }],
        };

        let message = dispatch_user_message(&input);
        assert!(message.contains("Motor overheating issue"));
        assert!(message.contains("Currently Assigned Team: Not assigned"));
        assert!(message.contains("\"activeTasks\": 1"));
        assert!(message.contains("\"name\": \"Electricians\""));
    }
}
