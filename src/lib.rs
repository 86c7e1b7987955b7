pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::services::{gemini_service::GeminiService, question_service::QuestionService};
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = Client::builder().timeout(config.upstream_timeout).build()?;

        let gemini_service = GeminiService::new(config, http_client);
        let question_service = QuestionService::new(gemini_service, config.upstream_timeout);

        Ok(Self { question_service })
    }
}
