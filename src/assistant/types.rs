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
use serde::{Deserialize, Serialize};

/// One ranked hit from the search service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub chunk: String,
    pub relative_path: String,
}

/// Search service reply, validated at the boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Generated answer plus the documents its context came from
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub text: String,
    pub related_paths: Vec<String>,
    #[serde(skip)]
    pub context: SearchResponse,
}

/// A related document with a time-limited link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedDocument {
    pub path: String,
    pub url: String,
}

/// Answer together with resolved document links
#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    #[serde(flatten)]
    pub answer: Answer,
    pub documents: Vec<RelatedDocument>,
}

/// An entry of the document store listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StagedDocument {
    pub name: String,
    pub size: Option<u64>,
    pub last_modified: Option<DateTime<Utc>>,
}
