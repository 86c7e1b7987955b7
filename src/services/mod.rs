pub mod fallback_service;
pub mod gemini_service;
pub mod question_service;
