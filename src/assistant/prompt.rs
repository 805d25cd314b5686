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

use std::collections::HashSet;

use crate::assistant::types::SearchResponse;

/// Build the completion prompt: retrieved chunks go between the context
/// tags, the question between the question tags, both verbatim.
pub fn build_prompt(question: &str, context: &SearchResponse) -> String {
    let context_text = render_context(context);

    format!(
        r#"
You are an expert chat assistance that extracts information from the CONTEXT provided
between <context> and </context> tags.
When answering the question contained between <question> and </question> tags
be concise and do not hallucinate.
Only output information that you see in your CONTEXT, do not make anything up.
If you don't have the information just say so.
Only answer the question if you can extract it from the CONTEXT provided.
Provide your output in markdown format.

Do not reference the CONTEXT used in your answer.
Don't say things like "Based on the provided context".

<context>
{context_text}
</context>
<question>
{question}
</question>
Answer:
"#
    )
}

fn render_context(context: &SearchResponse) -> String {
    context
        .results
        .iter()
        .map(|hit| format!("[source: {}]\n{}", hit.relative_path, hit.chunk))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Distinct source paths in the order they were first retrieved
pub fn related_paths(context: &SearchResponse) -> Vec<String> {
    let mut seen = HashSet::new();
    context
        .results
        .iter()
        .filter(|hit| seen.insert(hit.relative_path.as_str()))
        .map(|hit| hit.relative_path.clone())
        .collect()
}

/// Escape every `$` in generated text for markdown display
pub fn escape_dollars(text: &str) -> String {
    text.replace('$', "\\$")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::types::SearchHit;

    fn response(hits: &[(&str, &str)]) -> SearchResponse {
        SearchResponse {
            results: hits
                .iter()
                .map(|(chunk, path)| SearchHit {
                    chunk: chunk.to_string(),
                    relative_path: path.to_string(),
                })
                .collect(),
            request_id: None,
        }
    }

    #[test]
    fn test_prompt_contains_question_and_context_verbatim() {
        let context = response(&[
            ("Pumps must be \"primed\" before use.\nSee table 4.", "pumps.pdf"),
            ("Warranty lasts 2 years.", "warranty.pdf"),
        ]);
        let question = "How long is the warranty?\nAnd priming?";

        let prompt = build_prompt(question, &context);

        // The instructions mention the tags too; the delimited blocks come last
        let context_start = prompt.rfind("<context>").unwrap();
        let context_end = prompt.rfind("</context>").unwrap();
        let context_block = &prompt[context_start..context_end];
        for hit in &context.results {
            assert!(context_block.contains(&hit.chunk));
        }

        let question_start = prompt.rfind("<question>").unwrap();
        let question_end = prompt.rfind("</question>").unwrap();
        assert!(prompt[question_start..question_end].contains(question));
        assert!(context_end < question_start);
    }

    #[test]
    fn test_prompt_keeps_ranked_order() {
        let context = response(&[("first hit", "a.pdf"), ("second hit", "b.pdf")]);
        let prompt = build_prompt("q", &context);
        assert!(prompt.find("first hit").unwrap() < prompt.find("second hit").unwrap());
    }

    #[test]
    fn test_prompt_with_no_results_still_has_tags() {
        let prompt = build_prompt("anything?", &response(&[]));
        assert!(prompt.contains("<context>\n\n</context>"));
        assert!(prompt.contains("<question>\nanything?\n</question>"));
    }

    #[test]
    fn test_related_paths_deduplicated_in_first_seen_order() {
        let context = response(&[
            ("a", "guide.pdf"),
            ("b", "faq.pdf"),
            ("c", "guide.pdf"),
            ("d", "guide.pdf"),
        ]);
        assert_eq!(related_paths(&context), vec!["guide.pdf", "faq.pdf"]);
    }

    #[test]
    fn test_escape_dollars() {
        assert_eq!(escape_dollars("costs $5 or $$10"), "costs \\$5 or \\$\\$10");
        assert_eq!(escape_dollars("no currency"), "no currency");
    }
}
