use api::domain::environment::EnvironmentVariable;
use api::domain::request::{ApiRequest, HttpMethod};
use api::{resolve_request, substitute_env_vars};

fn var(key: &str, value: &str) -> EnvironmentVariable {
    EnvironmentVariable {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn env_var_substitution_applies_correctly_in_urls() {
    let variables = vec![var("host", "api.example.com")];
    let resolved = substitute_env_vars("https://{{host}}/v1/ping", &variables);
    assert_eq!(resolved, "https://api.example.com/v1/ping");
}

#[test]
fn unmatched_placeholders_are_left_as_is() {
    let variables = vec![var("host", "api.example.com")];
    let resolved = substitute_env_vars("{{BOGUS}}/json", &variables);
    assert_eq!(resolved, "{{BOGUS}}/json");
}

#[test]
fn empty_text_is_returned_unchanged() {
    let variables = vec![var("host", "api.example.com")];
    assert_eq!(substitute_env_vars("", &variables), "");
}

#[test]
fn substitution_is_idempotent_when_values_hold_no_placeholders() {
    let variables = vec![var("host", "api.example.com"), var("token", "abc123")];
    let text = "https://{{host}}/v1?token={{token}}&missing={{other}}";
    let once = substitute_env_vars(text, &variables);
    let twice = substitute_env_vars(&once, &variables);
    assert_eq!(once, twice);
}

#[test]
fn duplicate_keys_are_applied_in_list_order() {
    // The first pair consumes every occurrence, so the second never fires.
    let variables = vec![var("host", "first.example.com"), var("host", "second.example.com")];
    let resolved = substitute_env_vars("https://{{host}}/", &variables);
    assert_eq!(resolved, "https://first.example.com/");
}

#[test]
fn resolve_request_substitutes_url_headers_and_body() {
    let variables = vec![var("host", "api.example.com"), var("token", "abc123")];
    let request = ApiRequest {
        url: String::from("https://{{host}}/v1/ping"),
        method: HttpMethod::POST,
        headers: vec![(String::from("Authorization"), String::from("Bearer {{token}}"))],
        body: String::from("{\"host\":\"{{host}}\"}"),
        timestamp: None,
    };
    let resolved = resolve_request(&request, &variables);
    assert_eq!(resolved.url, "https://api.example.com/v1/ping");
    assert_eq!(
        resolved.headers,
        vec![(String::from("Authorization"), String::from("Bearer abc123"))]
    );
    assert_eq!(resolved.body, "{\"host\":\"api.example.com\"}");
    // the input is untouched
    assert_eq!(request.url, "https://{{host}}/v1/ping");
}
