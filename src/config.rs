// Copyright 2026 Muvon Un Limited
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants;

/// PDF splitter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    pub chunk_size: usize,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: constants::DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Connection settings for the Snowflake REST APIs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowflakeConfig {
    /// e.g. https://myorg-myaccount.snowflakecomputing.com
    pub account_url: String,
    /// Name of the environment variable holding the access token
    pub token_env: String,
    pub token_type: String,
    pub database: String,
    pub schema: String,
    pub warehouse: String,
    pub role: String,
    pub search_service: String,
    pub stage: String,
    pub statement_timeout_secs: u64,
    pub poll_interval_ms: u64,
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self {
            account_url: String::new(),
            token_env: constants::DEFAULT_TOKEN_ENV.to_string(),
            token_type: constants::DEFAULT_TOKEN_TYPE.to_string(),
            database: "RAG".to_string(),
            schema: "POC".to_string(),
            warehouse: String::new(),
            role: String::new(),
            search_service: "VECTOR_STORE".to_string(),
            stage: "docs".to_string(),
            statement_timeout_secs: 120,
            poll_interval_ms: 500,
        }
    }
}

/// Retrieval and generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub model: String,
    pub num_chunks: usize,
    pub columns: Vec<String>,
    pub presigned_url_ttl_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: constants::DEFAULT_CHAT_MODEL.to_string(),
            num_chunks: constants::DEFAULT_NUM_CHUNKS,
            columns: vec![
                constants::CHUNK_COLUMN.to_string(),
                constants::PATH_COLUMN.to_string(),
            ],
            presigned_url_ttl_secs: constants::DEFAULT_PRESIGNED_URL_TTL_SECS,
        }
    }
}

/// Main configuration for docsmith
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub splitter: SplitterConfig,
    pub snowflake: SnowflakeConfig,
    pub assistant: AssistantConfig,
}

impl Config {
    /// Load configuration from config.toml file
    /// First tries to load from system config directory, falls back to embedded template
    pub fn load() -> Result<Self> {
        let config_path = crate::storage::get_system_config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)?
        } else {
            let template_content = include_str!("../config-templates/default.toml");
            let config = Self::from_toml(template_content)?;

            if let Some(parent) = config_path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&config_path, template_content)?;

            config
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("DOCSMITH_ACCOUNT_URL").filter(|v| !v.trim().is_empty()) {
            self.snowflake.account_url = url;
        }
        if let Some(model) = lookup("DOCSMITH_MODEL").filter(|v| !v.trim().is_empty()) {
            self.assistant.model = model;
        }
    }
}
