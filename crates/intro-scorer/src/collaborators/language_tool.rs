use async_trait::async_trait;
use serde::Deserialize;

use super::{CollaboratorError, GrammarChecker, GrammarIssue};

#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<CheckMatch>,
}

#[derive(Debug, Deserialize)]
struct CheckMatch {
    message: String,
    offset: usize,
    length: usize,
    rule: Option<CheckRule>,
}

#[derive(Debug, Deserialize)]
struct CheckRule {
    id: String,
}

impl From<CheckMatch> for GrammarIssue {
    fn from(value: CheckMatch) -> Self {
        Self {
            message: value.message,
            offset: value.offset,
            length: value.length,
            rule_id: value.rule.map(|rule| rule.id).unwrap_or_default(),
        }
    }
}

/// Grammar checker backed by a LanguageTool HTTP server (`/v2/check`).
pub struct LanguageToolClient {
    client: reqwest::Client,
    endpoint: String,
    language: String,
}

impl LanguageToolClient {
    pub fn new(base_url: &str, language: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/v2/check", base_url.trim_end_matches('/')),
            language: language.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn decode(body: &str) -> Result<Vec<GrammarIssue>, CollaboratorError> {
        let response: CheckResponse = serde_json::from_str(body)
            .map_err(|err| CollaboratorError::Malformed(err.to_string()))?;
        Ok(response.matches.into_iter().map(GrammarIssue::from).collect())
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolClient {
    async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, CollaboratorError> {
        let body = self
            .client
            .post(&self.endpoint)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| CollaboratorError::Unavailable(err.to_string()))?
            .text()
            .await
            .map_err(|err| CollaboratorError::Unavailable(err.to_string()))?;

        Self::decode(&body)
    }

    fn name(&self) -> &str {
        "languagetool"
    }
}
