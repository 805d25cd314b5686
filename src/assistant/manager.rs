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

use std::sync::Arc;
use tracing::debug;

use crate::assistant::prompt::{build_prompt, escape_dollars, related_paths};
use crate::assistant::services::{CompletionService, DocumentStage, SearchService};
use crate::assistant::types::{
    Answer, AssistantReply, RelatedDocument, SearchResponse, StagedDocument,
};
use crate::config::AssistantConfig;
use crate::error::{Error, Result};

/// Runs one question through search, prompt assembly, completion and link
/// resolution. Owns no retrieval or generation logic of its own.
pub struct DocumentationAssistant {
    config: AssistantConfig,
    search: Arc<dyn SearchService>,
    completion: Arc<dyn CompletionService>,
    stage: Arc<dyn DocumentStage>,
}

impl DocumentationAssistant {
    pub fn new(
        config: AssistantConfig,
        search: Arc<dyn SearchService>,
        completion: Arc<dyn CompletionService>,
        stage: Arc<dyn DocumentStage>,
    ) -> Self {
        Self {
            config,
            search,
            completion,
            stage,
        }
    }

    pub async fn list_documents(&self) -> Result<Vec<StagedDocument>> {
        self.stage.list_documents().await
    }

    /// Retrieve the top chunks for a question
    pub async fn search(&self, question: &str) -> Result<SearchResponse> {
        let response = self
            .search
            .search(question, &self.config.columns, self.config.num_chunks)
            .await?;

        debug!(
            hits = response.results.len(),
            request_id = response.request_id.as_deref().unwrap_or("-"),
            "Search completed"
        );
        Ok(response)
    }

    /// Returns the prompt together with the search response it embeds
    pub async fn create_prompt(&self, question: &str) -> Result<(String, SearchResponse)> {
        let context = self.search(question).await?;
        let prompt = build_prompt(question, &context);
        Ok((prompt, context))
    }

    pub async fn complete(&self, question: &str) -> Result<Answer> {
        validate_question(question)?;
        let (prompt, context) = self.create_prompt(question).await?;

        debug!(
            model = %self.config.model,
            prompt_chars = prompt.len(),
            "Requesting completion"
        );
        let generated = self.completion.complete(&self.config.model, &prompt).await?;

        Ok(Answer {
            text: escape_dollars(&generated),
            related_paths: related_paths(&context),
            context,
        })
    }

    /// Presigned links for each path, in the given order
    pub async fn resolve_links(&self, paths: &[String]) -> Result<Vec<RelatedDocument>> {
        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let url = self
                .stage
                .presigned_url(path, self.config.presigned_url_ttl_secs)
                .await?;
            documents.push(RelatedDocument {
                path: path.clone(),
                url,
            });
        }
        Ok(documents)
    }

    pub async fn ask(&self, question: &str) -> Result<AssistantReply> {
        let answer = self.complete(question).await?;
        let documents = self.resolve_links(&answer.related_paths).await?;
        Ok(AssistantReply { answer, documents })
    }
}

/// Blank questions are rejected; anything else is passed on as typed
fn validate_question(question: &str) -> Result<()> {
    if question.trim().is_empty() {
        return Err(Error::InvalidInput("question cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::types::SearchHit;
    use crate::error::ErrorKind;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeBackend {
        hits: Vec<SearchHit>,
        reply: String,
        fail_search: bool,
        searches: Mutex<Vec<(String, Vec<String>, usize)>>,
        completions: Mutex<Vec<(String, String)>>,
        presigned: Mutex<Vec<(String, u64)>>,
    }

    #[async_trait]
    impl SearchService for FakeBackend {
        async fn search(
            &self,
            query: &str,
            columns: &[String],
            limit: usize,
        ) -> Result<SearchResponse> {
            if self.fail_search {
                return Err(Error::Service {
                    service: "cortex search",
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }
            self.searches
                .lock()
                .unwrap()
                .push((query.to_string(), columns.to_vec(), limit));
            Ok(SearchResponse {
                results: self.hits.clone(),
                request_id: Some("req-1".to_string()),
            })
        }
    }

    #[async_trait]
    impl CompletionService for FakeBackend {
        async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
            self.completions
                .lock()
                .unwrap()
                .push((model.to_string(), prompt.to_string()));
            Ok(self.reply.clone())
        }
    }

    #[async_trait]
    impl DocumentStage for FakeBackend {
        async fn list_documents(&self) -> Result<Vec<StagedDocument>> {
            Ok(vec![StagedDocument {
                name: "guide.pdf".to_string(),
                size: Some(1024),
                last_modified: None,
            }])
        }

        async fn presigned_url(&self, path: &str, ttl_secs: u64) -> Result<String> {
            self.presigned
                .lock()
                .unwrap()
                .push((path.to_string(), ttl_secs));
            Ok(format!("https://stage.example/{}?ttl={}", path, ttl_secs))
        }
    }

    fn hit(chunk: &str, path: &str) -> SearchHit {
        SearchHit {
            chunk: chunk.to_string(),
            relative_path: path.to_string(),
        }
    }

    fn assistant(backend: Arc<FakeBackend>) -> DocumentationAssistant {
        DocumentationAssistant::new(
            AssistantConfig::default(),
            backend.clone(),
            backend.clone(),
            backend,
        )
    }

    #[tokio::test]
    async fn test_ask_runs_full_pipeline() {
        let backend = Arc::new(FakeBackend {
            hits: vec![
                hit("The pump costs $400.", "pumps.pdf"),
                hit("Pumps ship in 3 days.", "shipping.pdf"),
                hit("Pump warranty is 2 years.", "pumps.pdf"),
            ],
            reply: "It costs $400.".to_string(),
            ..Default::default()
        });

        let reply = assistant(backend.clone())
            .ask("  How much is the pump?  ")
            .await
            .unwrap();

        assert_eq!(reply.answer.text, "It costs \\$400.");
        assert_eq!(reply.answer.related_paths, vec!["pumps.pdf", "shipping.pdf"]);
        assert_eq!(
            reply.documents,
            vec![
                RelatedDocument {
                    path: "pumps.pdf".to_string(),
                    url: "https://stage.example/pumps.pdf?ttl=360".to_string(),
                },
                RelatedDocument {
                    path: "shipping.pdf".to_string(),
                    url: "https://stage.example/shipping.pdf?ttl=360".to_string(),
                },
            ]
        );

        let searches = backend.searches.lock().unwrap();
        assert_eq!(searches.len(), 1);
        assert_eq!(searches[0].0, "  How much is the pump?  ");
        assert_eq!(searches[0].1, vec!["chunk", "relative_path"]);
        assert_eq!(searches[0].2, 10);

        let completions = backend.completions.lock().unwrap();
        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].0, "mixtral-8x7b");
        assert!(completions[0].1.contains("The pump costs $400."));
        assert!(completions[0]
            .1
            .contains("<question>\n  How much is the pump?  \n</question>"));
    }

    #[tokio::test]
    async fn test_question_whitespace_reaches_search_and_prompt() {
        let backend = Arc::new(FakeBackend {
            hits: vec![hit("Tabs are kept.", "format.pdf")],
            reply: "Yes.".to_string(),
            ..Default::default()
        });
        let question = "  indented\tquestion?\n";

        assistant(backend.clone()).ask(question).await.unwrap();

        assert_eq!(backend.searches.lock().unwrap()[0].0, question);
        assert!(backend.completions.lock().unwrap()[0].1.contains(question));
    }

    #[tokio::test]
    async fn test_empty_question_is_rejected_without_calls() {
        let backend = Arc::new(FakeBackend::default());
        let err = assistant(backend.clone()).ask("   ").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(backend.searches.lock().unwrap().is_empty());
        assert!(backend.completions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_failure_skips_completion() {
        let backend = Arc::new(FakeBackend {
            fail_search: true,
            ..Default::default()
        });
        let err = assistant(backend.clone()).ask("anything").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ExternalServiceFailure);
        assert!(backend.completions.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_hits_means_no_links() {
        let backend = Arc::new(FakeBackend {
            reply: "I don't have that information.".to_string(),
            ..Default::default()
        });
        let reply = assistant(backend.clone()).ask("unknown topic").await.unwrap();

        assert!(reply.answer.related_paths.is_empty());
        assert!(reply.documents.is_empty());
        assert!(backend.presigned.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_documents_passes_through() {
        let backend = Arc::new(FakeBackend::default());
        let docs = assistant(backend).list_documents().await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "guide.pdf");
    }
}
