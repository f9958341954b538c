//! Struct and methods to call the Gemini generateContent API.

use crate::genai::gemini_response::GeminiResponse;
use reqwest::Client;
use serde_json::json;
use tracing::{debug, warn};

/// Thin client around the Gemini REST endpoint. The API key is read from the
/// environment per call, so a missing key fails the request, not startup.
#[derive(Clone, Default)]
pub struct GeminiClient {
    http: Client,
}

impl GeminiClient {
    pub fn new() -> Self {
        GeminiClient {
            http: Client::new(),
        }
    }

    pub async fn generate(&self, prompt: String) -> Result<String, Box<dyn std::error::Error>> {
        debug!("Prompt: \n{}", prompt);

        let api_key = dotenv::var("GEMINI_API_KEY")?;
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/gemma-3-27b-it:generateContent?key={}",
            api_key
        );

        let body = json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ],
            "generationConfig": {
                "temperature": 0.5,
                "topK": 64,
                "topP": 0.98,
                "maxOutputTokens": 1024,
                "responseMimeType": "text/plain"
            }
        });

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            let response: GeminiResponse = serde_json::from_str(&response.text().await?)?;
            response
                .candidates
                .first()
                .and_then(|candidate| candidate.content.parts.first())
                .map(|part| part.text.clone())
                .ok_or_else(|| "Empty Gemini response".into())
        } else {
            warn!(
                "Gemini call failed with status: {} {}",
                response.status(),
                response.text().await?
            );
            Err("Gemini call failed".into())
        }
    }
}
