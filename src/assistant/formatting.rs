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

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::assistant::types::{AssistantReply, RelatedDocument, SearchResponse, StagedDocument};

pub fn format_reply(reply: &AssistantReply) -> String {
    let mut output = String::new();

    output.push_str(reply.answer.text.trim());
    output.push('\n');

    if !reply.documents.is_empty() {
        output.push('\n');
        output.push_str(&format_related_documents(&reply.documents));
    }

    output
}

pub fn format_related_documents(documents: &[RelatedDocument]) -> String {
    let mut output = String::new();

    output.push_str(&"Related Documents".bold().to_string());
    output.push('\n');
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for doc in documents {
        output.push_str(&format!("Doc: [{}]({})", doc.path.cyan(), doc.url));
        output.push('\n');
    }

    output
}

pub fn format_document_list(documents: &[StagedDocument]) -> String {
    if documents.is_empty() {
        return "No documents staged".to_string();
    }

    let mut output = String::new();

    output.push_str(&"Documents to be used:".bold().to_string());
    output.push('\n');
    output.push_str(
        &format!("{:<52} {:>10} {}\n", "Document", "Size", "Last Modified")
            .bold()
            .to_string(),
    );
    output.push_str(&"─".repeat(80));
    output.push('\n');

    for doc in documents {
        let name = if doc.name.chars().count() > 50 {
            format!("{}...", truncate_chars(&doc.name, 47))
        } else {
            doc.name.clone()
        };
        let size = doc.size.map(format_size).unwrap_or_else(|| "-".to_string());
        let modified = doc
            .last_modified
            .map(format_relative_time)
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!("{:<52} {:>10} {}\n", name, size, modified));
    }

    output
}

/// Raw retrieved context, for inspecting what the model was given
pub fn format_search_context(response: &SearchResponse) -> String {
    let mut output = String::new();

    output.push_str(&"Retrieved Context".bold().to_string());
    output.push('\n');

    for (i, hit) in response.results.iter().enumerate() {
        output.push_str(&"━".repeat(60));
        output.push('\n');
        output.push_str(
            &format!("#{} {}", i + 1, hit.relative_path)
                .bright_black()
                .to_string(),
        );
        output.push('\n');

        let preview = if hit.chunk.chars().count() > 300 {
            format!("{}...", truncate_chars(&hit.chunk, 300))
        } else {
            hit.chunk.clone()
        };
        output.push_str(&preview);
        output.push('\n');
    }

    output
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

fn format_relative_time(dt: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(dt);

    if duration.num_days() > 0 {
        format!("{} days ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{} hours ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{} minutes ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

fn truncate_chars(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}
