use crate::dto::question_dto::GenerationRequest;
use crate::error::{Error, Result};
use crate::models::question::{Difficulty, Question, QuestionType, Round};
use crate::services::fallback_service::build_fallback;
use crate::services::gemini_service::GeminiService;
use serde_json::Value as JsonValue;
use std::time::Duration;

pub const MISSING_QUESTION_TEXT: &str = "AI did not return a question. Please try again.";

#[derive(Clone)]
pub struct QuestionService {
    gemini: GeminiService,
    timeout: Duration,
}

impl QuestionService {
    pub fn new(gemini: GeminiService, timeout: Duration) -> Self {
        Self { gemini, timeout }
    }

    /// Produces the next question. Exactly one Gemini attempt is made; any failure
    /// is logged and answered with the local fallback, so this never errors.
    pub async fn next_question(&self, request: &GenerationRequest) -> Question {
        match self.try_generate(request).await {
            Ok(question) => question,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.kind(),
                    round = %request.round,
                    domain = %request.domain,
                    question_index = request.question_index,
                    "Error generating AI question, serving fallback"
                );
                build_fallback(
                    &request.domain,
                    &request.round,
                    &request.base_difficulty,
                    request.question_index,
                )
            }
        }
    }

    async fn try_generate(&self, request: &GenerationRequest) -> Result<Question> {
        let raw = tokio::time::timeout(self.timeout, self.gemini.generate(request))
            .await
            .map_err(|_| Error::Timeout(self.timeout))??;

        Ok(normalize(
            &raw,
            &request.round,
            &request.base_difficulty,
            request.question_index,
        ))
    }
}

/// Coerces model output into a `Question`. Missing or wrongly typed fields get safe
/// defaults; this never fails, whatever `raw` contains.
pub fn normalize(
    raw: &JsonValue,
    round: &Round,
    base_difficulty: &str,
    question_index: u32,
) -> Question {
    let out_round = non_empty_str(raw, "round")
        .map(Round::from)
        .unwrap_or_else(|| round.clone());

    let difficulty = non_empty_str(raw, "difficulty")
        .map(Difficulty::from)
        .unwrap_or_else(|| Difficulty::resolve(base_difficulty, question_index));

    let question_type = raw
        .get("question_type")
        .and_then(JsonValue::as_str)
        .and_then(QuestionType::parse)
        .unwrap_or_else(|| round.question_type());

    let question = non_empty_str(raw, "question")
        .map(str::to_string)
        .unwrap_or_else(|| MISSING_QUESTION_TEXT.to_string());

    let options: Vec<String> = match raw.get("options") {
        Some(JsonValue::Array(items)) => items.iter().map(option_text).collect(),
        _ => Vec::new(),
    };

    let correct_option_index = match raw.get("correct_option_index").and_then(as_integer) {
        Some(idx) if question_type == QuestionType::Mcq => {
            if idx >= 0 && (idx as usize) < options.len() {
                Some(idx)
            } else {
                Some(0)
            }
        }
        Some(idx) => Some(idx),
        None if *round == Round::Aptitude => Some(0),
        None => None,
    };

    Question {
        round: out_round,
        difficulty,
        question_type,
        question,
        options,
        correct_option_index,
        explanation: optional_text(raw, "explanation"),
        followup_tip: optional_text(raw, "followup_tip"),
    }
}

fn non_empty_str<'a>(raw: &'a JsonValue, field: &str) -> Option<&'a str> {
    raw.get(field)
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
}

fn optional_text(raw: &JsonValue, field: &str) -> Option<String> {
    raw.get(field).and_then(JsonValue::as_str).map(str::to_string)
}

fn option_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_integer(value: &JsonValue) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
}
