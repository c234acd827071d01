//! Bilingual definition generation via the LLM backend
//!
//! Builds the teaching prompt, sends it to a messages-style chat API, and
//! parses the model's JSON reply leniently (entries missing required fields
//! are skipped, not fatal).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::warn;
use vocab_db::types::Word;

#[derive(Debug)]
pub enum DefinitionError {
    Backend(String),
    EmptyResponse,
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::Backend(msg) => write!(f, "Definition backend error: {}", msg),
            DefinitionError::EmptyResponse => write!(f, "Definition backend returned no content"),
        }
    }
}

impl std::error::Error for DefinitionError {}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

/// HTTP client for the definition backend
pub struct DefinitionClient {
    client: Client,
    base_url: String,
    model: String,
}

impl DefinitionClient {
    pub fn new(base_url: &str, model: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
            model: model.to_string(),
        }
    }

    /// Ask the backend for study material covering `words`.
    pub async fn process_words(&self, words: &[String]) -> Result<Vec<Word>, DefinitionError> {
        let prompt = build_prompt(words);
        let url = format!("{}/v1/messages", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&MessagesRequest {
                model: &self.model,
                max_tokens: 4000,
                temperature: 0.5,
                top_p: 0.9,
                messages: vec![Message {
                    role: "user",
                    content: &prompt,
                }],
            })
            .send()
            .await
            .map_err(|e| DefinitionError::Backend(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DefinitionError::Backend(format!(
                "definition backend returned status {}",
                response.status()
            )));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| DefinitionError::Backend(e.to_string()))?;

        let text = body
            .content
            .first()
            .and_then(|block| block.text.clone())
            .ok_or(DefinitionError::EmptyResponse)?;

        Ok(parse_words(&text))
    }
}

/// Build the bilingual-teaching prompt with a strict JSON output contract
fn build_prompt(words: &[String]) -> String {
    format!(
        r#"## Instruction
You are an expert English teacher specializing in vocabulary instruction. Your task is to create bilingual learning materials for a given word list, following these requirements:

1. Provide the standard phonetic transcription for each word.
2. Provide the Chinese translation of each word's primary meaning.
3. For each word, provide three example sentences that meet the following criteria:
    - Concise (under 15 words)
    - Suitable for intermediate English learners
    - Demonstrate varied usage and contexts
    - Use natural, idiomatic expressions
    - Include Chinese translations
    - Mark the target word in **bold** format

## Word List
{}

## Output Format
Your response MUST follow this exact JSON structure:
{{"words": [
{{
"word": "target_word",
"phonetic": "phonetic_transcription",
"meaning": "chinese_meaning",
"examples": [
{{"en": "Example sentence with the **target_word**.", "zh": "对应的中文翻译"}},
{{"en": "Another example with the **target_word**.", "zh": "对应的中文翻译"}},
{{"en": "Final example using the **target_word**.", "zh": "对应的中文翻译"}}
]
}}
]
}}

Do not include any text outside the JSON structure."#,
        words.join(", ")
    )
}

/// Parse the model's JSON reply into word entries, skipping malformed ones.
fn parse_words(text: &str) -> Vec<Word> {
    let value: Value = match serde_json::from_str(text.trim()) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "Definition backend reply was not valid JSON");
            return Vec::new();
        }
    };

    let Some(items) = value.get("words").and_then(Value::as_array) else {
        warn!("Definition backend reply had no words array");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match serde_json::from_value::<Word>(item.clone()) {
            Ok(word) => Some(word),
            Err(e) => {
                warn!(error = %e, "Skipping malformed word entry");
                None
            }
        })
        .collect()
}
