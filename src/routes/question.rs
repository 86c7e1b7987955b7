use crate::{
    dto::question_dto::{GenerationRequest, NextQuestionPayload},
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};
use tracing::Instrument;
use uuid::Uuid;

/// `POST /api/next-question`. Always answers 200 with a question; a missing or
/// unparseable body is treated as an empty one.
#[axum::debug_handler]
pub async fn next_question(
    State(state): State<AppState>,
    payload: Option<Json<NextQuestionPayload>>,
) -> impl IntoResponse {
    let request: GenerationRequest = payload.map(|Json(p)| p).unwrap_or_default().into();

    tracing::info!(
        round = %request.round,
        domain = %request.domain,
        question_index = request.question_index,
        "Next question requested"
    );

    let span = tracing::info_span!("next_question", request_id = %Uuid::new_v4());
    let question = state
        .question_service
        .next_question(&request)
        .instrument(span)
        .await;
    Json(question)
}
