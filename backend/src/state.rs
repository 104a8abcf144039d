//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The food tables are process-wide statics in the shared crate, so the
//! state only carries configuration and the parser built from it.

use crate::config::AppConfig;
use nutrilog_shared::FoodInputParser;
use std::sync::Arc;

/// Shared application state
///
/// Cloned per request; every field is an `Arc` or `Copy`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Parser configured from `config.parser`
    pub parser: FoodInputParser,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig) -> Self {
        let parser = FoodInputParser::new(config.parser.parser_options());

        Self {
            config: Arc::new(config),
            parser,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the configured food input parser
    #[inline]
    pub fn parser(&self) -> &FoodInputParser {
        &self.parser
    }
}
