use std::collections::HashSet;

use reqwest::Method;

use crate::domain::request::HttpMethod;

pub fn convert_http_method(input: HttpMethod) -> Method {
    match input {
        HttpMethod::GET => Method::GET,
        HttpMethod::POST => Method::POST,
        HttpMethod::PUT => Method::PUT,
        HttpMethod::PATCH => Method::PATCH,
        HttpMethod::DELETE => Method::DELETE,
        HttpMethod::HEAD => Method::HEAD,
        HttpMethod::OPTIONS => Method::OPTIONS,
    }
}

/// Keeps the first occurrence of each header key, preserving order.
pub fn remove_duplicate_headers(headers: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut unique_keys = HashSet::new();
    let mut result = Vec::new();
    for (key, value) in headers {
        if !unique_keys.contains(&key) {
            unique_keys.insert(key.clone());
            result.push((key, value));
        }
    }
    result
}
