use crate::config::Config;
use crate::dto::question_dto::GenerationRequest;
use crate::error::{Error, Result};
use crate::models::question::{Difficulty, Round};
use crate::utils::text::strip_code_fences;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value as JsonValue;

const TEMPERATURE: f32 = 0.8;

/// Fields of a candidate part that may carry the generated payload, in lookup order.
const PAYLOAD_FIELDS: [&str; 2] = ["text", "data"];

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

/// What a candidate part carried: model text, or already structured JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidatePayload {
    Text(String),
    Structured(JsonValue),
}

#[derive(Clone)]
pub struct GeminiService {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl GeminiService {
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            client,
            api_key: config.gemini_api_key.clone(),
            endpoint: config.generate_content_url(),
        }
    }

    /// Asks Gemini for one question. The returned JSON is whatever the model produced;
    /// shaping it into a `Question` is the caller's job.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<JsonValue> {
        let difficulty = Difficulty::resolve(&request.base_difficulty, request.question_index);

        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("GEMINI_API_KEY is not set".to_string()))?;

        tracing::debug!(
            previous_answers = request.previous_answers.len(),
            "Previous answers received (not used in prompt)"
        );

        let prompt = build_prompt(&request.domain, &request.round, &difficulty);
        let body = self.generate_content(api_key, prompt).await?;

        match extract_payload(&body)? {
            CandidatePayload::Structured(value) => Ok(value),
            CandidatePayload::Text(text) => parse_generated_text(&text),
        }
    }

    async fn generate_content(&self, api_key: &str, prompt: String) -> Result<JsonValue> {
        let payload = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        };

        let res = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(Error::UpstreamStatus { status, body });
        }

        Ok(res.json().await?)
    }
}

/// Pulls the payload out of `candidates[0].content.parts[0]`, trying each known field.
pub fn extract_payload(body: &JsonValue) -> Result<CandidatePayload> {
    let part = body
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0));

    let Some(part) = part else {
        return Err(Error::EmptyContent);
    };

    PAYLOAD_FIELDS
        .iter()
        .find_map(|field| match part.get(*field) {
            Some(JsonValue::String(s)) if !s.is_empty() => Some(CandidatePayload::Text(s.clone())),
            Some(v @ (JsonValue::Object(_) | JsonValue::Array(_))) => {
                Some(CandidatePayload::Structured(v.clone()))
            }
            _ => None,
        })
        .ok_or(Error::EmptyContent)
}

pub fn parse_generated_text(text: &str) -> Result<JsonValue> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(cleaned).map_err(|source| {
        tracing::error!(raw = %text, "Failed to parse JSON from Gemini");
        Error::Parse {
            source,
            raw: text.to_string(),
        }
    })
}

pub fn build_prompt(domain: &str, round: &Round, difficulty: &Difficulty) -> String {
    format!(
        r#"You are an AI interview question generator.

User domain: {domain}
Round type: {round}
Difficulty: {difficulty}

Your job:
- Generate ONE interview question only.
- For aptitude, generate quantitative/logical reasoning MCQs with 4 options and a correct answer.
- For technical, mix conceptual and scenario-based questions.
- For HR, ask behavioural/situational questions.
- For GD, generate a discussion topic only (no answer).
- For "me" round, generate self-reflection questions.

You MUST respond with ONLY a JSON object (no extra text) in this exact format:

{{
  "round": "aptitude" | "technical" | "hr" | "gd" | "me",
  "difficulty": "easy" | "medium" | "hard",
  "question_type": "mcq" | "open",
  "question": "string",
  "options": ["A...", "B...", "C...", "D..."] or [],
  "correct_option_index": number or null,
  "explanation": "string or null",
  "followup_tip": "string or null"
}}

Rules:
- For aptitude: question_type = "mcq", options length = 4, correct_option_index 0-3, explanation not null.
- For all other rounds: question_type = "open", options = [], correct_option_index = null.
- Difficulty must match "{difficulty}".
"#
    )
}
