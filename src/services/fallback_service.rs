use crate::models::question::{Difficulty, Question, QuestionType, Round};

const STAR_TIP: &str = "Use STAR: Situation → Task → Action → Result.";

/// Builds the placeholder question served whenever generation fails.
/// Pure and infallible: needs no network, key or configuration.
pub fn build_fallback(
    domain: &str,
    round: &Round,
    base_difficulty: &str,
    question_index: u32,
) -> Question {
    let difficulty = Difficulty::resolve(base_difficulty, question_index);
    let number = u64::from(question_index) + 1;

    match round {
        Round::Aptitude => Question {
            round: round.clone(),
            question_type: QuestionType::Mcq,
            question: format!(
                "Sample {} aptitude question #{} (domain: {}).",
                difficulty, number, domain
            ),
            options: vec![
                "Option A (dummy)".to_string(),
                "Option B (dummy - correct)".to_string(),
                "Option C (dummy)".to_string(),
                "Option D (dummy)".to_string(),
            ],
            correct_option_index: Some(1),
            explanation: Some(
                "This is a placeholder explanation. Later the AI will generate a real one."
                    .to_string(),
            ),
            followup_tip: Some("Focus on understanding the logic first, then speed.".to_string()),
            difficulty,
        },
        Round::Gd => open_question(
            round,
            format!(
                "Dummy GD topic ({}): \"Impact of technology on {} jobs in India.\"",
                difficulty, domain
            ),
            "Organise your thoughts into 2–3 clear points and give examples.",
            difficulty,
        ),
        Round::Me => open_question(
            round,
            format!(
                "Self-reflection ({}): Describe one experience that changed how you think about your career in {}.",
                difficulty, domain
            ),
            "Be honest and specific. Mention situation, your feelings, and what you learnt.",
            difficulty,
        ),
        Round::Hr => open_question(
            round,
            format!(
                "({} HR) Tell me about a time you handled a difficult situation related to {}.",
                difficulty, domain
            ),
            STAR_TIP,
            difficulty,
        ),
        Round::Technical | Round::Other(_) => open_question(
            round,
            format!(
                "({} Technical) Explain a project or concept in {} that you are proud of.",
                difficulty, domain
            ),
            STAR_TIP,
            difficulty,
        ),
    }
}

fn open_question(round: &Round, question: String, tip: &str, difficulty: Difficulty) -> Question {
    Question {
        round: round.clone(),
        difficulty,
        question_type: QuestionType::Open,
        question,
        options: Vec::new(),
        correct_option_index: None,
        explanation: None,
        followup_tip: Some(tip.to_string()),
    }
}
