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

use crate::assistant::types::{SearchResponse, StagedDocument};
use crate::error::Result;

/// Vector/text similarity search over the indexed document chunks
#[async_trait]
pub trait SearchService: Send + Sync {
    async fn search(&self, query: &str, columns: &[String], limit: usize)
        -> Result<SearchResponse>;
}

/// Text completion by a hosted model
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String>;
}

/// The file store holding the source documents
#[async_trait]
pub trait DocumentStage: Send + Sync {
    async fn list_documents(&self) -> Result<Vec<StagedDocument>>;

    async fn presigned_url(&self, path: &str, ttl_secs: u64) -> Result<String>;
}
