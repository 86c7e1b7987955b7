use serde::{Deserialize, Serialize};
use std::fmt;

/// Interview round. Unknown round names are carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Round {
    Aptitude,
    Technical,
    Hr,
    Gd,
    Me,
    Other(String),
}

impl Round {
    pub fn as_str(&self) -> &str {
        match self {
            Round::Aptitude => "aptitude",
            Round::Technical => "technical",
            Round::Hr => "hr",
            Round::Gd => "gd",
            Round::Me => "me",
            Round::Other(name) => name,
        }
    }

    /// Aptitude rounds are multiple choice, everything else is free response.
    pub fn question_type(&self) -> QuestionType {
        match self {
            Round::Aptitude => QuestionType::Mcq,
            _ => QuestionType::Open,
        }
    }
}

impl From<String> for Round {
    fn from(value: String) -> Self {
        match value.as_str() {
            "aptitude" => Round::Aptitude,
            "technical" => Round::Technical,
            "hr" => Round::Hr,
            "gd" => Round::Gd,
            "me" => Round::Me,
            _ => Round::Other(value),
        }
    }
}

impl From<&str> for Round {
    fn from(value: &str) -> Self {
        Round::from(value.to_string())
    }
}

impl From<Round> for String {
    fn from(value: Round) -> Self {
        match value {
            Round::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question difficulty. A caller-supplied level outside the usual three is passed through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

pub const AUTO_DIFFICULTY: &str = "auto";

impl Difficulty {
    /// Picks the difficulty for a question. An explicit base difficulty always wins;
    /// `"auto"` (or an empty value) ramps up with the question's position.
    pub fn resolve(base_difficulty: &str, question_index: u32) -> Self {
        if !base_difficulty.is_empty() && base_difficulty != AUTO_DIFFICULTY {
            return Difficulty::from(base_difficulty);
        }

        match question_index {
            0..=1 => Difficulty::Easy,
            2..=3 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Other(level) => level,
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Other(value),
        }
    }
}

impl From<&str> for Difficulty {
    fn from(value: &str) -> Self {
        Difficulty::from(value.to_string())
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Other(level) => level,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Mcq,
    Open,
}

impl QuestionType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "mcq" => Some(QuestionType::Mcq),
            "open" => Some(QuestionType::Open),
            _ => None,
        }
    }
}

/// The single response shape, shared by generated and fallback questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub round: Round,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    pub question: String,
    pub options: Vec<String>,
    pub correct_option_index: Option<i64>,
    pub explanation: Option<String>,
    pub followup_tip: Option<String>,
}
