mod api;
mod gemini_response;

pub use self::api::GeminiClient;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

/// What the model proposes for a form field. Non-authoritative: the client
/// may accept or ignore it.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub suggestion: String,
    pub reasoning: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    pub description: String,
    pub current_text: Option<String>,
}

pub async fn suggest_text(
    client: &GeminiClient,
    request: &SuggestionRequest,
) -> Result<Suggestion, Box<dyn std::error::Error>> {
    let masked = SuggestionRequest {
        description: mask_sensitive(&request.description),
        current_text: request.current_text.as_deref().map(mask_sensitive),
    };

    let prompt = PROMPT
        .to_string()
        .replace("{REQUEST_JSON}", serde_json::to_string(&masked)?.as_str());

    info!(
        "Calling Gemini for a suggestion on \"{}\"",
        masked.description
    );
    let text = client.generate(prompt).await?;

    let suggestion = parse_suggestion(&text)?;
    info!("Gemini returned suggestion: {:?}", suggestion.suggestion);
    Ok(suggestion)
}

/// Replaces digit runs and short dates before the text leaves the process.
fn mask_sensitive(text: &str) -> String {
    let regex_replaces: [(Regex, &str); 2] = [
        (Regex::new(r"\d{5,99}").unwrap(), "00000"), // account/card numbers
        (Regex::new(r"\d{2}/\d{2}").unwrap(), "01/01"), // dates
    ];

    let mut masked = text.to_string();
    for (regex, replace) in regex_replaces.iter() {
        masked = regex.replace_all(&masked, *replace).to_string();
    }
    masked
}

fn parse_suggestion(text: &str) -> Result<Suggestion, Box<dyn std::error::Error>> {
    if text.starts_with("```json\n") && text.ends_with("\n```") {
        let json_str = &text[8..text.len() - 3];
        return Ok(serde_json::from_str(json_str)?);
    }

    Err("Failed to parse JSON".into())
}

const PROMPT: &str = r#"
You are an assistant inside a household expense tracker. Given an expense
description, and optionally the text the user has typed so far, propose a
short note that would be useful to keep alongside the expense.

**Input:**

```json
{REQUEST_JSON}
```

**Instructions:**

1. Analyze the expense description.
2. If `current_text` is present, refine it rather than replacing it.
3. Keep the suggestion under 120 characters, plain text, no markdown.
4. Optionally include a one-sentence `reasoning`.

**Output (JSON object with `suggestion` and optional `reasoning`)**

"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_digit_runs_and_dates() {
        assert_eq!(
            mask_sensitive("CARD 12345678 on 12/08"),
            "CARD 00000 on 01/01"
        );
        assert_eq!(mask_sensitive("bus x2"), "bus x2");
    }

    #[test]
    fn parses_a_fenced_json_suggestion() {
        let text = "```json\n{\"suggestion\": \"Weekly groceries\", \"reasoning\": \"Recurring store\"}\n```";
        let parsed = parse_suggestion(text).unwrap();

        assert_eq!(parsed.suggestion, "Weekly groceries");
        assert_eq!(parsed.reasoning.as_deref(), Some("Recurring store"));
    }

    #[test]
    fn rejects_unfenced_output() {
        assert!(parse_suggestion("Weekly groceries").is_err());
    }
}
