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

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Client, RequestBuilder};
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::assistant::services::{CompletionService, DocumentStage, SearchService};
use crate::assistant::types::{SearchResponse, StagedDocument};
use crate::config::SnowflakeConfig;
use crate::constants;
use crate::error::{Error, Result};
use crate::snowflake::statement::{
    Binding, StatementRequest, StatementResult, StatementStep, SQL_API,
};

const SEARCH_API: &str = "cortex search";

/// Client for the Snowflake SQL and Cortex Search REST APIs.
///
/// Built once at startup and shared by every assistant operation.
pub struct SnowflakeClient {
    http: Client,
    config: SnowflakeConfig,
    base_url: String,
    token: String,
}

impl SnowflakeClient {
    /// Reads the access token from the environment variable named in the config
    pub fn from_env(config: &SnowflakeConfig) -> Result<Self> {
        let token = std::env::var(&config.token_env).map_err(|_| {
            Error::InvalidInput(format!(
                "environment variable {} must hold a Snowflake access token",
                config.token_env
            ))
        })?;
        Self::new(config, token)
    }

    pub fn new(config: &SnowflakeConfig, token: String) -> Result<Self> {
        let base_url = config.account_url.trim().trim_end_matches('/').to_string();
        if !base_url.starts_with("https://") && !base_url.starts_with("http://") {
            return Err(Error::InvalidInput(format!(
                "snowflake.account_url must start with https://, got: {:?}",
                config.account_url
            )));
        }
        if token.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Snowflake access token is empty".to_string(),
            ));
        }
        for (field, value) in [
            ("database", &config.database),
            ("schema", &config.schema),
            ("search_service", &config.search_service),
            ("stage", &config.stage),
        ] {
            validate_identifier(field, value)?;
        }

        let http = Client::builder()
            .user_agent(constants::USER_AGENT)
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|source| Error::Transport {
                service: SQL_API,
                source,
            })?;

        Ok(Self {
            http,
            config: config.clone(),
            base_url,
            token,
        })
    }

    fn search_url(&self) -> String {
        format!(
            "{}/api/v2/databases/{}/schemas/{}/cortex-search-services/{}:query",
            self.base_url, self.config.database, self.config.schema, self.config.search_service
        )
    }

    fn statements_url(&self) -> String {
        format!(
            "{}/api/v2/statements?requestId={}",
            self.base_url,
            uuid::Uuid::new_v4()
        )
    }

    fn statement_status_url(&self, handle: &str) -> String {
        format!("{}/api/v2/statements/{}", self.base_url, handle)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header(
                "X-Snowflake-Authorization-Token-Type",
                self.config.token_type.as_str(),
            )
            .header(header::ACCEPT, "application/json")
    }

    /// Send a request and return the status with the body text. Non-2xx is an error.
    async fn send(&self, service: &'static str, request: RequestBuilder) -> Result<(u16, String)> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|source| Error::Transport { service, source })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|source| Error::Transport { service, source })?;

        ensure_success(service, status, body).map(|body| (status, body))
    }

    fn post_json(&self, url: &str, payload: &serde_json::Value) -> RequestBuilder {
        self.http
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload.to_string())
    }

    /// Run one SQL statement, waiting out asynchronous execution
    pub async fn execute(&self, statement: &str, bindings: Vec<Binding>) -> Result<StatementResult> {
        let request = StatementRequest {
            statement,
            timeout: self.config.statement_timeout_secs,
            database: &self.config.database,
            schema: &self.config.schema,
            warehouse: &self.config.warehouse,
            role: &self.config.role,
            bindings: BTreeMap::new(),
        }
        .with_bindings(bindings);

        let payload = serde_json::to_value(&request)
            .map_err(|e| Error::InvalidInput(format!("unserializable statement: {}", e)))?;

        debug!(statement, "Executing statement");
        let (status, body) = self
            .send(SQL_API, self.post_json(&self.statements_url(), &payload))
            .await?;

        let mut step = StatementStep::from_response(status, &body)?;
        let mut result = loop {
            match step {
                StatementStep::Done(result) => break result,
                StatementStep::Pending(pending) => {
                    tokio::time::sleep(Duration::from_millis(self.config.poll_interval_ms)).await;

                    debug!(handle = %pending.statement_handle, "Polling statement");
                    let (status, body) = self
                        .send(
                            SQL_API,
                            self.http
                                .get(self.statement_status_url(&pending.statement_handle)),
                        )
                        .await?;
                    step = StatementStep::from_response(status, &body)?;
                }
            }
        };

        self.fetch_remaining_partitions(&mut result).await?;

        debug!(
            handle = result.handle.as_deref().unwrap_or("-"),
            rows = result.rows.len(),
            partitions = result.partitions,
            "Statement completed"
        );
        Ok(result)
    }

    /// Large results are split into partitions; the first arrives with the statement
    async fn fetch_remaining_partitions(&self, result: &mut StatementResult) -> Result<()> {
        if result.partitions <= 1 {
            return Ok(());
        }
        let Some(handle) = result.handle.clone() else {
            warn!(
                partitions = result.partitions,
                "Partitioned result without a statement handle, keeping the first partition only"
            );
            return Ok(());
        };

        for partition in 1..result.partitions {
            let url = format!("{}?partition={}", self.statement_status_url(&handle), partition);
            debug!(%handle, partition, "Fetching result partition");
            let (_, body) = self.send(SQL_API, self.http.get(url)).await?;
            result.append_partition(&body)?;
        }

        Ok(())
    }
}

#[async_trait]
impl SearchService for SnowflakeClient {
    async fn search(
        &self,
        query: &str,
        columns: &[String],
        limit: usize,
    ) -> Result<SearchResponse> {
        let payload = json!({
            "query": query,
            "columns": columns,
            "limit": limit,
        });

        debug!(limit, "Querying search service");
        let (_, body) = self
            .send(SEARCH_API, self.post_json(&self.search_url(), &payload))
            .await?;
        debug!(payload = %body, "Search response");

        parse_search_response(&body)
    }
}

#[async_trait]
impl CompletionService for SnowflakeClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        let result = self
            .execute(
                "select snowflake.cortex.complete(?, ?) as response",
                vec![Binding::text(model), Binding::text(prompt)],
            )
            .await?;

        Ok(result.scalar("response")?.to_string())
    }
}

#[async_trait]
impl DocumentStage for SnowflakeClient {
    async fn list_documents(&self) -> Result<Vec<StagedDocument>> {
        let result = self
            .execute(&format!("ls @{}", self.config.stage), Vec::new())
            .await?;
        staged_documents(&result)
    }

    async fn presigned_url(&self, path: &str, ttl_secs: u64) -> Result<String> {
        let statement = format!(
            "select get_presigned_url(@{}, ?, ?) as url_link",
            self.config.stage
        );
        let result = self
            .execute(&statement, vec![Binding::text(path), Binding::fixed(ttl_secs)])
            .await?;

        Ok(result.scalar("url_link")?.to_string())
    }
}

/// Non-2xx responses become service errors carrying the body
fn ensure_success(service: &'static str, status: u16, body: String) -> Result<String> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(Error::Service {
            service,
            status,
            body,
        })
    }
}

pub(crate) fn parse_search_response(body: &str) -> Result<SearchResponse> {
    serde_json::from_str(body).map_err(|e| Error::malformed(SEARCH_API, e.to_string()))
}

/// Rows of `ls @stage`: name, size, md5, last_modified
pub(crate) fn staged_documents(result: &StatementResult) -> Result<Vec<StagedDocument>> {
    let names = result.column("name")?;
    let sizes = result.column("size").ok();
    let modified = result.column("last_modified").ok();

    let mut documents = Vec::with_capacity(names.len());
    for (row, name) in names.into_iter().enumerate() {
        let Some(name) = name else { continue };

        let size = sizes
            .as_ref()
            .and_then(|col| col[row])
            .and_then(|v| v.parse::<u64>().ok());
        let last_modified = modified
            .as_ref()
            .and_then(|col| col[row])
            .and_then(|v| DateTime::parse_from_rfc2822(v).ok())
            .map(|dt| dt.with_timezone(&Utc));

        documents.push(StagedDocument {
            name: name.rsplit('/').next().unwrap_or(name).to_string(),
            size,
            last_modified,
        });
    }

    Ok(documents)
}

/// Names interpolated into SQL or URL paths must be plain identifiers
fn validate_identifier(field: &str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.'));

    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "snowflake.{} is not a valid identifier: {:?}",
            field, value
        )))
    }
}
