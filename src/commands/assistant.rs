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
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::assistant::formatting::{
    format_document_list, format_reply, format_search_context,
};
use crate::assistant::DocumentationAssistant;
use crate::cli::OutputFormat;

pub async fn docs(assistant: &DocumentationAssistant) -> Result<()> {
    let documents = assistant.list_documents().await?;
    println!("{}", format_document_list(&documents));
    Ok(())
}

pub async fn ask(
    assistant: &DocumentationAssistant,
    question: &str,
    show_context: bool,
    format: OutputFormat,
) -> Result<()> {
    let reply = assistant.ask(question).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        OutputFormat::Text => {
            if show_context {
                println!("{}", format_search_context(&reply.answer.context));
            }
            println!("{}", format_reply(&reply));
        }
    }

    Ok(())
}

/// Read questions line by line until EOF, `exit` or `quit`.
/// A failed question is reported and the session continues.
pub async fn chat(assistant: &DocumentationAssistant, show_context: bool) -> Result<()> {
    println!("Documentation Assistant");
    match assistant.list_documents().await {
        Ok(documents) => println!("{}", format_document_list(&documents)),
        Err(e) => warn!("Could not list documents: {}", e),
    }
    println!("Ask the documentation a question (exit to quit)");

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if matches!(command, "exit" | "quit") {
            break;
        }

        match assistant.ask(&line).await {
            Ok(reply) => {
                if show_context {
                    println!("{}", format_search_context(&reply.answer.context));
                }
                println!("{}", format_reply(&reply));
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}
