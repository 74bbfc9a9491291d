//! OpenAI-compatible chat completions narrator
//!
//! One request per briefing, no retries. Any transport error, non-2xx
//! status, or empty completion becomes [`BriefingError::Generation`].

use std::fmt::Write;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::BriefingError;
use super::narrator::NarrativeGenerator;
use super::summary::StructuredSummary;

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiError {
    error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorDetail {
    message: String,
}

// ============================================================================
// PROMPTS
// ============================================================================

const SYSTEM_PROMPT: &str = "You are an experienced restaurant General Manager with 20+ years of operational experience in full-service and fine-dining restaurants.

Your job is to help restaurant operators make better real-time decisions by clearly explaining operational data in plain language.

You do NOT act like a data analyst or dashboard.
You do NOT list raw numbers without interpretation.

You:
- Think like an operator preparing for service
- Connect operational dots across sales, staffing, and guests
- Use cautious, realistic language (e.g., \"likely,\" \"suggests,\" \"appears\")
- Never invent data or assumptions not provided
- Never overstate certainty

If data is insufficient, say so clearly.
Your goal is clarity, context, and actionable insight, not prediction.";

/// Render the summary as the user prompt
fn user_prompt(s: &StructuredSummary) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_user_prompt(&mut out, s);
    out
}

fn write_user_prompt(out: &mut String, s: &StructuredSummary) -> std::fmt::Result {
    let m = &s.metrics;
    let date = s.service_date();

    writeln!(out, "You are generating a pre-shift operational briefing for a restaurant manager.")?;
    writeln!(out, "This briefing will be read quickly before service.")?;
    writeln!(out, "Assume the reader has NO time to interpret charts or tables.")?;
    writeln!(out)?;
    writeln!(out, "SERVICE DATE: {date}")?;
    writeln!(out)?;

    writeln!(out, "RESERVATIONS DATA:")?;
    writeln!(
        out,
        "- Reservations on the book: {} ({} confirmed, {} completed, {} cancelled)",
        m.reservation_count,
        s.status_breakdown.confirmed,
        s.status_breakdown.completed,
        s.status_breakdown.cancelled
    )?;
    writeln!(out, "- Total booked covers: {}", m.total_covers)?;
    writeln!(out, "- Expected walk-ins: {}-{}", m.walk_in_min, m.walk_in_max)?;
    writeln!(
        out,
        "- Total expected guest range: {}-{}",
        m.expected_guest_range.min, m.expected_guest_range.max
    )?;
    writeln!(out)?;

    writeln!(out, "PEAK PERIODS:")?;
    if let (Some(start), Some(end)) = (&s.peak_time_start, &s.peak_time_end) {
        writeln!(out, "- Planned peak window: {start}-{end}")?;
    }
    if s.peak_periods.is_empty() {
        writeln!(out, "- No clear peak identified")?;
    }
    for p in &s.peak_periods {
        writeln!(out, "- {}: {} covers", p.time, p.covers)?;
    }
    writeln!(out)?;

    writeln!(out, "STAFFING DATA:")?;
    writeln!(out, "- Total staff scheduled: {}", m.staff_scheduled_count)?;
    writeln!(out, "- Total scheduled hours: {}", m.total_hours)?;
    writeln!(out, "- Estimated labor cost: ${:.2}", m.labor_cost)?;
    writeln!(out, "Staff breakdown:")?;
    if s.staff_lines.is_empty() {
        writeln!(out, "- No staff scheduled")?;
    }
    for line in &s.staff_lines {
        writeln!(out, "- {line}")?;
    }
    writeln!(out)?;

    writeln!(out, "VIP/HIGH-VALUE GUESTS:")?;
    if s.guest_highlights.is_empty() {
        writeln!(out, "- No VIP or high-value guests identified")?;
    }
    for g in &s.guest_highlights {
        writeln!(out, "- {g}")?;
    }
    writeln!(out)?;

    writeln!(out, "NOTES:")?;
    if let Some(notes) = &s.service_notes {
        writeln!(out, "- Service: {notes}")?;
    }
    for n in &s.reservation_notes {
        writeln!(out, "- Reservation {n}")?;
    }
    for n in &s.schedule_notes {
        writeln!(out, "- Shift {n}")?;
    }
    if s.service_notes.is_none() && s.reservation_notes.is_empty() && s.schedule_notes.is_empty() {
        writeln!(out, "- None")?;
    }
    writeln!(out)?;

    writeln!(out, "Generate a concise operational story using the exact format below.")?;
    writeln!(out)?;
    writeln!(out, "Rules:")?;
    writeln!(out, "- Do NOT use bullet points unless explicitly shown")?;
    writeln!(out, "- Do NOT include raw tables or JSON")?;
    writeln!(out, "- Do NOT exceed 250-300 words")?;
    writeln!(out, "- Use calm, confident, operator-friendly tone")?;
    writeln!(out)?;
    writeln!(out, "TITLE:")?;
    writeln!(out, "Tonight's Service Intelligence - {date}")?;
    writeln!(out)?;
    writeln!(out, "SECTION 1 - HEADLINE")?;
    writeln!(out, "Write 1-2 sentences summarizing the most important operational takeaway for tonight.")?;
    writeln!(out)?;
    writeln!(out, "SECTION 2 - WHAT TONIGHT LOOKS LIKE")?;
    writeln!(out, "Briefly explain booked covers, the expected total guest range and peak periods.")?;
    writeln!(out)?;
    writeln!(out, "SECTION 3 - STAFFING INSIGHT")?;
    writeln!(out, "Explain whether staffing appears aligned or misaligned. Mention overtime risk ONLY if relevant.")?;
    writeln!(out, "Frame recommendations as considerations, not commands.")?;
    writeln!(out)?;
    writeln!(out, "SECTION 4 - GUEST HIGHLIGHTS")?;
    writeln!(out, "Mention ONLY guests that materially impact service or revenue, and why they matter operationally.")?;
    writeln!(out)?;
    writeln!(out, "SECTION 5 - SUGGESTED ACTIONS")?;
    writeln!(out, "List 2-3 clear, practical actions the manager could consider before or during service.")?;
    Ok(())
}

// ============================================================================
// NARRATOR
// ============================================================================

/// Chat-completions backed narrator
pub struct OpenAiNarrator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiNarrator {
    /// # Arguments
    /// * `api_key` - bearer token
    /// * `base_url` - e.g. `https://api.openai.com/v1`
    /// * `model` - e.g. `gpt-4o`
    /// * `timeout` - whole-request timeout for the single round trip
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BriefingError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BriefingError::Generation(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, BriefingError> {
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BriefingError::Generation("text generation service timed out".into())
                } else {
                    BriefingError::Generation(format!("text generation service unreachable: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(BriefingError::Generation(format!(
                "text generation service returned {status}: {detail}"
            )));
        }

        let parsed: CompletionResponse = response.json().await.map_err(|e| {
            BriefingError::Generation(format!("invalid response from text generation service: {e}"))
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                BriefingError::Generation("text generation service returned no content".into())
            })
    }
}

impl std::fmt::Debug for OpenAiNarrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiNarrator")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl NarrativeGenerator for OpenAiNarrator {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate(&self, summary: &StructuredSummary) -> Result<String, BriefingError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user_prompt(summary),
                },
            ],
            temperature: Some(0.4),
        };
        self.complete(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefing::metrics::aggregate;
    use crate::briefing::summary::build_summary;
    use crate::briefing::testing::{guest, reservation, schedule};
    use axum::{Json, Router, http::StatusCode, routing::post};
    use shared::models::ReservationStatus;

    const DATE: &str = "2025-06-01";

    fn sample_summary() -> StructuredSummary {
        let reservations = vec![reservation(1, 1, DATE, "19:00", 4, ReservationStatus::Confirmed)];
        let schedules = vec![schedule(1, "Rosa", DATE, "17:00", "22:00", 20.0)];
        let guests = vec![guest(1, "Ada", true, 0.0)];
        let metrics = aggregate(DATE, &reservations, &schedules, None);
        build_summary(metrics, &reservations, &schedules, None, &guests)
    }

    /// Serve `router` on an ephemeral port and return its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{addr}/v1")
    }

    fn narrator(base_url: &str) -> OpenAiNarrator {
        OpenAiNarrator::new("sk-test", base_url, "gpt-4o", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_user_prompt_carries_summary() {
        let prompt = user_prompt(&sample_summary());
        assert!(prompt.contains("SERVICE DATE: 2025-06-01"));
        assert!(prompt.contains("- Total booked covers: 4"));
        assert!(prompt.contains("- Rosa (server): 17:00-22:00 (5hrs @ $20.00/hr)"));
        assert!(prompt.contains("- Ada (Party of 4) at 19:00"));
        assert!(prompt.contains("SECTION 5 - SUGGESTED ACTIONS"));
    }

    #[tokio::test]
    async fn test_returns_completion_text() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["model"], "gpt-4o");
                assert_eq!(body["messages"][0]["role"], "system");
                Json(serde_json::json!({
                    "choices": [{ "message": { "role": "assistant", "content": "  Busy night ahead.  " } }]
                }))
            }),
        );
        let base = serve(router).await;
        let text = narrator(&base).generate(&sample_summary()).await.unwrap();
        assert_eq!(text, "Busy night ahead.");
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(serde_json::json!({ "error": { "message": "Rate limit reached" } })),
                )
            }),
        );
        let base = serve(router).await;
        let err = narrator(&base).generate(&sample_summary()).await.unwrap_err();
        assert!(matches!(err, BriefingError::Generation(msg) if msg.contains("429") && msg.contains("Rate limit reached")));
    }

    #[tokio::test]
    async fn test_empty_completion_is_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                Json(serde_json::json!({
                    "choices": [{ "message": { "role": "assistant", "content": "   " } }]
                }))
            }),
        );
        let base = serve(router).await;
        let err = narrator(&base).generate(&sample_summary()).await.unwrap_err();
        assert!(matches!(err, BriefingError::Generation(msg) if msg.contains("no content")));

        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { Json(serde_json::json!({ "choices": [] })) }),
        );
        let base = serve(router).await;
        assert!(narrator(&base).generate(&sample_summary()).await.is_err());
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(serde_json::json!({
                    "choices": [{ "message": { "role": "assistant", "content": "too late" } }]
                }))
            }),
        );
        let base = serve(router).await;
        let narrator =
            OpenAiNarrator::new("sk-test", &base, "gpt-4o", Duration::from_millis(200)).unwrap();

        let err = narrator.generate(&sample_summary()).await.unwrap_err();
        assert!(matches!(err, BriefingError::Generation(msg) if msg.contains("timed out")));
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = narrator(&format!("http://{addr}/v1"))
            .generate(&sample_summary())
            .await
            .unwrap_err();
        assert!(matches!(err, BriefingError::Generation(msg) if msg.contains("unreachable")));
    }

    #[test]
    fn test_debug_redacts_key() {
        let n = narrator("http://localhost/v1");
        assert!(!format!("{n:?}").contains("sk-test"));
    }
}
