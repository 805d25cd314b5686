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
use std::sync::Arc;

use crate::assistant::DocumentationAssistant;
use crate::cli::Commands;
use crate::config::Config;
use crate::snowflake::SnowflakeClient;

mod assistant;
mod mcp;
mod split;

pub async fn execute(config: &Config, command: Commands) -> Result<()> {
    match command {
        Commands::Split {
            pdf_files,
            chunk_size,
        } => {
            let chunk_size = chunk_size
                .map(|size| size as usize)
                .unwrap_or(config.splitter.chunk_size);
            split::execute(&pdf_files, chunk_size, &std::env::current_dir()?)
        }
        Commands::Docs => assistant::docs(&build_assistant(config)?).await,
        Commands::Ask {
            question,
            show_context,
            format,
        } => assistant::ask(&build_assistant(config)?, &question, show_context, format).await,
        Commands::Chat { show_context } => {
            assistant::chat(&build_assistant(config)?, show_context).await
        }
        Commands::Mcp { .. } => mcp::execute(build_assistant(config)?).await,
    }
}

/// Construct the Snowflake client once and hand it to every assistant seam
fn build_assistant(config: &Config) -> Result<DocumentationAssistant> {
    let client = Arc::new(SnowflakeClient::from_env(&config.snowflake)?);
    Ok(DocumentationAssistant::new(
        config.assistant.clone(),
        client.clone(),
        client.clone(),
        client,
    ))
}
