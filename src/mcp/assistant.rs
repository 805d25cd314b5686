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

use serde_json::{json, Value};
use std::sync::Arc;

use crate::assistant::DocumentationAssistant;
use crate::error::ErrorKind;
use crate::mcp::types::{McpError, McpTool};

/// Documentation assistant tools provider
#[derive(Clone)]
pub struct AssistantProvider {
    assistant: Arc<DocumentationAssistant>,
}

impl AssistantProvider {
    pub fn new(assistant: Arc<DocumentationAssistant>) -> Self {
        Self { assistant }
    }

    /// Get all tool definitions for assistant operations
    pub fn get_tool_definitions() -> Vec<McpTool> {
        vec![
            McpTool {
                name: "ask_documentation".to_string(),
                description: "Answer a question using only the indexed documentation. Retrieves the most relevant document chunks, asks the model to answer strictly from them, and returns the answer followed by time-limited links to the source documents. If the documents do not contain the answer, the response says so.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "question": {
                            "type": "string",
                            "description": "The question to answer from the documentation, in natural language",
                            "minLength": 1
                        }
                    },
                    "required": ["question"],
                    "additionalProperties": false
                }),
            },
            McpTool {
                name: "list_documents".to_string(),
                description: "List the documents available to the documentation assistant.".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {},
                    "additionalProperties": false
                }),
            },
        ]
    }

    pub async fn execute_ask(&self, arguments: &Value) -> Result<String, McpError> {
        let question = arguments
            .get("question")
            .and_then(|v| v.as_str())
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| {
                McpError::invalid_params("Missing required parameter: question", "ask_documentation")
            })?;

        let reply = self
            .assistant
            .ask(question)
            .await
            .map_err(|e| to_mcp_error(e, "ask_documentation"))?;

        let mut output = String::new();
        output.push_str(reply.answer.text.trim());
        output.push('\n');

        if !reply.documents.is_empty() {
            output.push_str("\nRelated Documents:\n");
            for doc in &reply.documents {
                output.push_str(&format!("Doc: [{}]({})\n", doc.path, doc.url));
            }
        }

        Ok(output)
    }

    pub async fn execute_list_documents(&self) -> Result<String, McpError> {
        let documents = self
            .assistant
            .list_documents()
            .await
            .map_err(|e| to_mcp_error(e, "list_documents"))?;

        if documents.is_empty() {
            return Ok("No documents staged".to_string());
        }

        Ok(documents
            .iter()
            .map(|doc| doc.name.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn to_mcp_error(error: crate::error::Error, operation: &str) -> McpError {
    match error.kind() {
        ErrorKind::InvalidInput => McpError::invalid_params(error.to_string(), operation),
        _ => McpError::internal_error(error.to_string(), operation),
    }
}
