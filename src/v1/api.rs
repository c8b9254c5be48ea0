/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::InstagramError;
use crate::v1::parsers::{from_lenient_code, from_lenient_str};
use crate::v1::{BuiltRequest, Config, Params, RequestBuilder, Response, Verb};
use log::{debug, trace, warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Deserialize;

pub const USER_AGENT: &str = concat!("instagram/", env!("CARGO_PKG_VERSION"), ";rust");

/// Directly communicates with the API.
///
/// Owns the configuration and the access token, builds urls through [`RequestBuilder`] and
/// turns failed responses into typed [`InstagramError`]s.
#[derive(Clone)]
pub struct ApiClient {
    config: Config,
    access_token: Option<String>,
    https_client: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self, InstagramError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if !config.verify_ssl() {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let https_client = builder
            .build()
            .map_err(|e| InstagramError::generic(e.without_url().to_string()))?;

        Ok(Self {
            config,
            access_token: None,
            https_client,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the access token or an authentication error if none has been set
    pub fn access_token(&self) -> Result<&str, InstagramError> {
        self.access_token
            .as_deref()
            .ok_or_else(InstagramError::missing_access_token)
    }

    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.access_token = Some(access_token.into());
    }

    pub fn request_builder(&self) -> RequestBuilder<'_> {
        RequestBuilder::new(&self.config, self.access_token.as_deref())
    }

    /// Builds the url for `path` without sending anything
    pub fn build_url(
        &self,
        path: &str,
        params: Params,
        raw: bool,
        verb: Verb,
    ) -> Result<BuiltRequest, InstagramError> {
        self.request_builder().build(path, params, raw, verb)
    }

    /// Performs a single request against the API.
    ///
    /// `path` is either a path template relative to the versioned API root or an absolute
    /// `http(s)://` url, which is used as is.
    pub async fn execute(
        &self,
        path: &str,
        verb: Verb,
        params: Params,
    ) -> Result<Response, InstagramError> {
        let (url, body) = if is_absolute_url(path) {
            if verb.has_body() {
                (path.to_string(), params)
            } else {
                (with_query(path, &params)?, Params::new())
            }
        } else {
            let built = self.build_url(path, params, false, verb)?;
            (built.url, built.body)
        };
        self.dispatch(verb, &url, &body).await
    }

    pub async fn get(&self, path: &str, params: Params) -> Result<Response, InstagramError> {
        self.execute(path, Verb::Get, params).await
    }

    pub async fn post(&self, path: &str, params: Params) -> Result<Response, InstagramError> {
        self.execute(path, Verb::Post, params).await
    }

    pub async fn put(&self, path: &str, params: Params) -> Result<Response, InstagramError> {
        self.execute(path, Verb::Put, params).await
    }

    pub async fn patch(&self, path: &str, params: Params) -> Result<Response, InstagramError> {
        self.execute(path, Verb::Patch, params).await
    }

    pub async fn delete(&self, path: &str, params: Params) -> Result<Response, InstagramError> {
        self.execute(path, Verb::Delete, params).await
    }

    async fn dispatch(
        &self,
        verb: Verb,
        url: &str,
        body: &Params,
    ) -> Result<Response, InstagramError> {
        debug!("{} {}", verb, redact_access_token(url));

        let mut req = self
            .https_client
            .request(verb.method(), url)
            .header(ACCEPT, "application/json");
        if verb.has_body() {
            req = req
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body.to_form_body());
        }

        let resp = req.send().await.map_err(|e| {
            let e = e.without_url();
            warn!("Request failed: {}", e);
            InstagramError::generic(e.to_string())
        })?;

        let status = resp.status().as_u16();
        let transport_error = resp.error_for_status_ref().err();
        let text = match resp.text().await {
            Ok(text) => text,
            Err(e) if transport_error.is_none() => {
                return Err(InstagramError::generic(e.without_url().to_string()));
            }
            Err(_) => String::new(),
        };
        // Token exchange replies carry the access token so only the size is logged
        trace!("Response {}: {} bytes", status, text.len());

        if let Some(err) = transport_error {
            let err = classify_failure(status, &text, err.without_url().to_string());
            warn!("API error {:?}: {}", err.code(), err);
            return Err(err);
        }
        Response::from_body(status, &text)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("access_token", &self.access_token.as_ref().map(|_| "xxx"))
            .finish()
    }
}

/// Maps a failed HTTP exchange onto the error taxonomy.
///
/// A 404 is always [`InstagramError::NotFound`]. Otherwise the body is read as an API error
/// envelope, nested under `meta` or flat. Bodies that aren't a JSON object fall back to a
/// generic error carrying the transport's message.
pub fn classify_failure(status: u16, body: &str, transport_message: String) -> InstagramError {
    if status == 404 {
        return InstagramError::NotFound {
            message: transport_message,
            code: Some(404),
        };
    }
    match ErrorBody::parse(body) {
        Some(error_body) => error_body.into_error(status),
        None => InstagramError::generic(transport_message),
    }
}

// Instagram reports errors either as {"meta": {...}} or with the fields at the top level.
// The flat shape is only used when there is no `meta` key at all.
#[derive(Debug, PartialEq)]
enum ErrorBody {
    Nested { meta: ErrorMeta },
    Flat(ErrorMeta),
}

#[derive(Deserialize, Debug, Default, PartialEq)]
struct ErrorMeta {
    #[serde(default, deserialize_with = "from_lenient_str")]
    error_type: Option<String>,

    #[serde(default, deserialize_with = "from_lenient_str")]
    error_message: Option<String>,

    #[serde(default, deserialize_with = "from_lenient_code")]
    code: Option<u32>,
}

impl ErrorMeta {
    // Fields that don't parse fall back to their defaults; a non-object gives all defaults
    fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

impl ErrorBody {
    fn parse(body: &str) -> Option<Self> {
        let serde_json::Value::Object(mut fields) = serde_json::from_str(body).ok()? else {
            return None;
        };
        Some(match fields.remove("meta") {
            Some(meta) => ErrorBody::Nested {
                meta: ErrorMeta::from_value(meta),
            },
            None => ErrorBody::Flat(ErrorMeta::from_value(serde_json::Value::Object(fields))),
        })
    }

    fn into_error(self, status: u16) -> InstagramError {
        let (meta, default_message) = match self {
            ErrorBody::Nested { meta } => (meta, "Message not available"),
            ErrorBody::Flat(meta) => (meta, "Message is not available"),
        };
        let error_type = meta.error_type.as_deref().unwrap_or("Unknown");
        let message = format!(
            "[{}]: {}",
            error_type,
            meta.error_message.as_deref().unwrap_or(default_message)
        );
        let code = Some(meta.code.unwrap_or(status.into()));

        match error_type {
            "OAuthParameterException" => InstagramError::Authentication { message, code },
            "OAuthPermissionsException" => InstagramError::NotPermitted { message, code },
            _ => InstagramError::Generic { message, code },
        }
    }
}

fn is_absolute_url(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

// Appends the present params to an absolute url's query string
fn with_query(url: &str, params: &Params) -> Result<String, InstagramError> {
    if params.present().next().is_none() {
        return Ok(url.to_string());
    }
    let mut url = url::Url::parse(url)?;
    url.query_pairs_mut().extend_pairs(params.present());
    Ok(url.into())
}

fn redact_access_token(url: &str) -> String {
    match url.find("access_token=") {
        Some(start) => {
            let value_start = start + "access_token=".len();
            let value_end = url[value_start..]
                .find('&')
                .map_or(url.len(), |i| value_start + i);
            format!("{}xxx{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v1::ErrorKind;

    #[test]
    fn not_found_wins() {
        let err = classify_failure(
            404,
            r#"{"meta":{"error_type":"OAuthParameterException","code":400}}"#,
            "HTTP status client error (404 Not Found)".into(),
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), Some(404));
        assert_eq!(err.to_string(), "HTTP status client error (404 Not Found)");
    }

    #[test]
    fn nested_oauth_parameter_exception() {
        let err = classify_failure(
            400,
            r#"{"meta":{"error_type":"OAuthParameterException","error_message":"bad token","code":400}}"#,
            "transport".into(),
        );
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.code(), Some(400));
        assert_eq!(err.to_string(), "[OAuthParameterException]: bad token");
    }

    #[test]
    fn flat_oauth_permissions_exception() {
        let err = classify_failure(
            400,
            r#"{"error_type":"OAuthPermissionsException","error_message":"no access","code":403}"#,
            "transport".into(),
        );
        assert_eq!(err.kind(), ErrorKind::NotPermitted);
        assert_eq!(err.code(), Some(403));
        assert_eq!(err.to_string(), "[OAuthPermissionsException]: no access");
    }

    #[test]
    fn unknown_type_is_generic() {
        let err = classify_failure(
            429,
            r#"{"meta":{"error_type":"OAuthRateLimitException","error_message":"slow down","code":"429"}}"#,
            "transport".into(),
        );
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.code(), Some(429));
        assert_eq!(err.to_string(), "[OAuthRateLimitException]: slow down");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let err = classify_failure(400, r#"{"meta":{}}"#, "transport".into());
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.code(), Some(400));
        assert_eq!(err.to_string(), "[Unknown]: Message not available");

        let err = classify_failure(503, r#"{"unrelated": true}"#, "transport".into());
        assert_eq!(err.code(), Some(503));
        assert_eq!(err.to_string(), "[Unknown]: Message is not available");
    }

    #[test]
    fn unstructured_body_keeps_transport_message() {
        for body in ["", "<html>Bad Gateway</html>", "[1, 2]", "\"oops\""] {
            let err = classify_failure(502, body, "HTTP status server error (502 Bad Gateway)".into());
            assert_eq!(err.kind(), ErrorKind::Generic);
            assert_eq!(err.code(), None);
            assert_eq!(err.to_string(), "HTTP status server error (502 Bad Gateway)");
        }
    }

    #[test]
    fn error_body_shapes() {
        assert_eq!(
            ErrorBody::parse(r#"{"meta":{"error_type":"X"},"error_type":"Y"}"#),
            Some(ErrorBody::Nested {
                meta: ErrorMeta {
                    error_type: Some("X".into()),
                    ..Default::default()
                }
            })
        );
        // meta present but not an object still selects the nested shape, with defaults
        assert_eq!(
            ErrorBody::parse(r#"{"meta":null,"error_type":"Y","code":401}"#),
            Some(ErrorBody::Nested {
                meta: ErrorMeta::default()
            })
        );
        assert_eq!(
            ErrorBody::parse(r#"{"error_type":"Y","code":401}"#),
            Some(ErrorBody::Flat(ErrorMeta {
                error_type: Some("Y".into()),
                error_message: None,
                code: Some(401),
            }))
        );
    }

    #[test]
    fn nested_meta_with_odd_field_types() {
        let err = classify_failure(
            400,
            r#"{"meta":{"error_type":"OAuthParameterException","error_message":123,"code":400}}"#,
            "transport".into(),
        );
        assert_eq!(err.kind(), ErrorKind::Authentication);
        assert_eq!(err.code(), Some(400));
        assert_eq!(err.to_string(), "[OAuthParameterException]: Message not available");
    }

    #[test]
    fn null_meta_ignores_top_level_fields() {
        let err = classify_failure(
            400,
            r#"{"meta":null,"error_type":"OAuthPermissionsException","code":401}"#,
            "transport".into(),
        );
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.code(), Some(400));
        assert_eq!(err.to_string(), "[Unknown]: Message not available");
    }

    #[test]
    fn absolute_urls() {
        assert!(is_absolute_url("https://api.instagram.com/oauth/access_token"));
        assert!(is_absolute_url("HTTP://localhost"));
        assert!(!is_absolute_url("users/self"));
        assert!(!is_absolute_url("httpbin"));
        assert!(!is_absolute_url("é"));
    }

    #[test]
    fn query_is_appended_to_absolute_urls() {
        let params = Params::new().with("a", "1 2").with("b", None::<&str>);
        assert_eq!(
            with_query("https://example.com/x?y=1", &params).unwrap(),
            "https://example.com/x?y=1&a=1+2"
        );
        assert_eq!(
            with_query("https://example.com/x", &Params::new()).unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn redacts_token() {
        assert_eq!(
            redact_access_token("https://h/v1/users/self?access_token=abc&count=2"),
            "https://h/v1/users/self?access_token=xxx&count=2"
        );
        assert_eq!(
            redact_access_token("https://h/v1/users/self?access_token=abc"),
            "https://h/v1/users/self?access_token=xxx"
        );
        assert_eq!(redact_access_token("https://h/oauth"), "https://h/oauth");
    }

    #[test]
    fn user_agent_has_version() {
        assert!(USER_AGENT.starts_with("instagram/"));
        assert!(USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
