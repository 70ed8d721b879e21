use crate::config::Config;
use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Gemini `generateContent` request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Enables live web search grounding for the generation
#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Endpoint for the configured model
fn endpoint(config: &Config) -> String {
    format!(
        "{}/models/{}:generateContent",
        config.gemini_api_url.trim_end_matches('/'),
        config.gemini_model
    )
}

/// Generate text with Google Search grounding enabled.
///
/// Issues exactly one request. Any network failure or non-success status is a
/// `FetchError::Transport`; the returned text is not interpreted here.
pub async fn generate_grounded(
    client: &reqwest::Client,
    config: &Config,
    system_instruction: &str,
    prompt: &str,
) -> Result<String, FetchError> {
    let request = GenerateRequest {
        system_instruction: Content::text(None, system_instruction),
        contents: vec![Content::text(Some("user"), prompt)],
        tools: vec![Tool {
            google_search: GoogleSearch {},
        }],
        generation_config: GenerationConfig {
            temperature: config.gemini_temperature,
        },
    };

    let response = client
        .post(endpoint(config))
        .header("x-goog-api-key", &config.gemini_api_key)
        .header("Content-Type", "application/json")
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        return Err(FetchError::Transport(format!(
            "Gemini API error ({}): {}",
            status, body
        )));
    }

    let generated: GenerateResponse = response.json().await.map_err(|e| {
        FetchError::MalformedResponse(format!("Failed to parse Gemini response: {}", e))
    })?;

    let text = generated.text();
    debug!("Gemini returned {} characters", text.len());
    Ok(text)
}
