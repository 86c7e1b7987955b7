use crate::models::question::{Round, AUTO_DIFFICULTY};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

pub const DEFAULT_DOMAIN: &str = "generic";
pub const DEFAULT_ROUND: &str = "technical";

/// Body of `POST /api/next-question`. Every field is optional and a wrongly typed,
/// null or empty value is treated as missing instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionPayload {
    #[serde(default, deserialize_with = "lenient_string")]
    pub domain: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub round: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub base_difficulty: Option<String>,
    #[serde(default, deserialize_with = "lenient_index")]
    pub question_index: Option<u32>,
    #[serde(default, deserialize_with = "lenient_answers")]
    pub previous_answers: Option<Vec<JsonValue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub domain: String,
    pub round: Round,
    pub base_difficulty: String,
    pub question_index: u32,
    /// Accepted and passed along, never used to shape the prompt.
    pub previous_answers: Vec<JsonValue>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        NextQuestionPayload::default().into()
    }
}

impl From<NextQuestionPayload> for GenerationRequest {
    fn from(payload: NextQuestionPayload) -> Self {
        Self {
            domain: payload.domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            round: Round::from(payload.round.unwrap_or_else(|| DEFAULT_ROUND.to_string())),
            base_difficulty: payload
                .base_difficulty
                .unwrap_or_else(|| AUTO_DIFFICULTY.to_string()),
            question_index: payload.question_index.unwrap_or(0),
            previous_answers: payload.previous_answers.unwrap_or_default(),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string))
}

fn lenient_index<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    let index = match value {
        Some(JsonValue::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.trunc() as u64)),
        _ => None,
    };
    Ok(index.map(|i| u32::try_from(i).unwrap_or(u32::MAX)))
}

fn lenient_answers<'de, D>(deserializer: D) -> Result<Option<Vec<JsonValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(JsonValue::Array(items)) => Some(items),
        _ => None,
    })
}
