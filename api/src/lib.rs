pub mod domain;
pub mod error;
pub mod store;
pub mod utilities;

use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use domain::environment::EnvironmentVariable;
use domain::request::{ApiRequest, HttpMethod};
use domain::response::ApiResponse;
use utilities::request::{convert_http_method, remove_duplicate_headers};
use utilities::response::build_response;

pub use error::{PlaygroundError, Result};

/// Replaces every literal `{{key}}` occurrence with the pair's value,
/// processing pairs in list order. Inserted values are plain text; unmatched
/// placeholders are left as-is.
pub fn substitute_env_vars(text: &str, variables: &[EnvironmentVariable]) -> String {
    if text.is_empty() {
        return text.to_string();
    }
    variables.iter().fold(text.to_string(), |acc, variable| {
        acc.replace(&format!("{{{{{}}}}}", variable.key), &variable.value)
    })
}

/// Produces the fully-resolved copy of a request: env vars substituted into
/// the URL, every header key and value, and the body. The input is untouched;
/// history captures the pre-substitution form.
pub fn resolve_request(request: &ApiRequest, variables: &[EnvironmentVariable]) -> ApiRequest {
    ApiRequest {
        url: substitute_env_vars(&request.url, variables),
        method: request.method,
        headers: request
            .headers
            .iter()
            .map(|(key, value)| {
                (
                    substitute_env_vars(key, variables),
                    substitute_env_vars(value, variables),
                )
            })
            .collect(),
        body: substitute_env_vars(&request.body, variables),
        timestamp: None,
    }
}

pub struct PlaygroundApi {
    pub client: reqwest::Client,
}

impl Default for PlaygroundApi {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaygroundApi {
    pub fn new() -> Self {
        PlaygroundApi {
            client: reqwest::Client::new(),
        }
    }

    /// Resolves placeholders, issues the HTTP call, times it, and normalizes
    /// the result. No retry and no timeout of its own; the call runs until
    /// the underlying client settles.
    pub async fn send_request(
        &self,
        request: &ApiRequest,
        variables: &[EnvironmentVariable],
    ) -> Result<ApiResponse> {
        let resolved = resolve_request(request, variables);
        if resolved.url.is_empty() {
            return Err(PlaygroundError::Validation(String::from("URL is required")));
        }
        log::info!("dispatching {} {}", resolved.method, resolved.url);

        // First occurrence wins when keys collide, even when substitution
        // rewrites two distinct keys into the same one.
        let unique_headers = remove_duplicate_headers(resolved.headers);
        let mut headers = HeaderMap::new();
        for (key, value) in &unique_headers {
            match (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(header_value)) => {
                    headers.insert(name, header_value);
                }
                _ => log::warn!("skipping invalid header '{}'", key),
            }
        }

        let method = convert_http_method(resolved.method);
        let mut req = self
            .client
            .request(method, resolved.url.as_str())
            .headers(headers);
        // GET never carries a body, whatever the editor holds.
        if resolved.method != HttpMethod::GET && !resolved.body.is_empty() {
            req = req.body(resolved.body.clone());
        }

        let start = Instant::now();
        let res = req.send().await?;
        let elapsed = start.elapsed().as_millis();

        let status = res.status();
        let response_headers = res
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body_text = res.text().await?;

        Ok(build_response(status, response_headers, body_text, elapsed))
    }
}
