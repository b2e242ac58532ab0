pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use crate::config::Config;
use crate::error::Result;
use crate::services::{ai_service::AIService, attempt_service::AttemptService};
use reqwest::Client;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub ai_service: AIService,
    pub attempt_service: AttemptService,
}

impl AppState {
    pub fn new(pool: PgPool, ai_service: AIService) -> Self {
        let attempt_service = AttemptService::new(pool);
        Self {
            ai_service,
            attempt_service,
        }
    }

    pub fn from_config(pool: PgPool, config: &Config) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        let ai_service = AIService::from_config(config, http_client);
        Ok(Self::new(pool, ai_service))
    }
}
