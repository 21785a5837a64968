//! Blocking HTTP client for Messages-style text generation APIs.
use log::{debug, log_enabled, Level};
use serde::{Deserialize, Serialize};

use super::prompt::user_message;
use super::{Correction, Error, Oracle, Usage};
use crate::config::OracleConfig;

const API_VERSION: &str = "2023-06-01";

/// Max number of characters of an error body kept in [Error::Status].
const ERROR_BODY_EXCERPT: usize = 500;

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseUsage {
    input_tokens: u64,
    output_tokens: u64,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<ResponseUsage>,
}

impl TryFrom<MessagesResponse> for Correction {
    type Error = Error;

    fn try_from(resp: MessagesResponse) -> Result<Self, Self::Error> {
        let text = resp
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| Error::Malformed("no text content in response".to_string()))?;

        let usage = resp.usage.map(|u| Usage {
            input_tokens: u.input_tokens,
            output_tokens: u.output_tokens,
        });

        Ok(Correction::new(text, usage))
    }
}

/// Holds the http client and the settings used on every request.
pub struct MessagesClient {
    url: String,
    config: OracleConfig,
    client: reqwest::blocking::Client,
}

impl MessagesClient {
    pub fn new(config: OracleConfig) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        let url = format!("{}/v1/messages", config.endpoint.trim_end_matches('/'));
        debug!("oracle client on {} using {:?}", url, config);

        Ok(Self {
            url,
            config,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn request_body(&self, text: &str) -> MessagesRequest<'_> {
        MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![Message {
                role: "user",
                content: user_message(&self.config.instructions, text),
            }],
        }
    }
}

impl Oracle for MessagesClient {
    fn correct(&self, text: &str) -> Result<Correction, Error> {
        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&self.request_body(text))
            .send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(Error::Status {
                code: status.as_u16(),
                body: body.chars().take(ERROR_BODY_EXCERPT).collect(),
            });
        }

        if log_enabled!(Level::Debug) {
            debug!("oracle answered {} bytes", body.len());
        }

        let resp: MessagesResponse = serde_json::from_str(&body)?;
        Correction::try_from(resp)
    }
}
