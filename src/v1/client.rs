/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::InstagramError;
use crate::v1::{ApiClient, Config, Params, Response};

/// Entry point for the Instagram endpoints.
///
/// ```rust,no_run
/// use instagram::v1::{Client, Config};
///
/// async fn print_username(access_token: &str) -> Result<(), instagram::v1::InstagramError> {
///     let config = Config::new("client-id", "client-secret")?
///         .with_redirect_uri("https://example.com/callback");
///     let client = Client::new(config)?.with_access_token(access_token);
///     let user = client.authenticated_user().await?;
///     println!("{}", user.get_str("data.username", "unknown"));
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_client: ApiClient,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, InstagramError> {
        Ok(Self {
            api_client: ApiClient::new(config)?,
        })
    }

    /// Sets the access token and returns the client
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.set_access_token(access_token);
        self
    }

    pub fn access_token(&self) -> Result<&str, InstagramError> {
        self.api_client.access_token()
    }

    pub fn set_access_token(&mut self, access_token: impl Into<String>) {
        self.api_client.set_access_token(access_token);
    }

    pub fn config(&self) -> &Config {
        self.api_client.config()
    }

    /// Lower level interface for endpoints not wrapped by this client
    pub fn api(&self) -> &ApiClient {
        &self.api_client
    }

    /// Page size to request: the caller's value when given, else the configured default
    pub fn limit_size(&self, limit: Option<u32>) -> u32 {
        self.config().limit_size(limit)
    }

    pub(crate) async fn get(&self, template: &str, params: Params) -> Result<Response, InstagramError> {
        self.api_client.get(template, params).await
    }

    pub(crate) async fn post(&self, template: &str, params: Params) -> Result<Response, InstagramError> {
        self.api_client.post(template, params).await
    }

    pub(crate) async fn delete(&self, template: &str, params: Params) -> Result<Response, InstagramError> {
        self.api_client.delete(template, params).await
    }
}

// Tags may be given as "#tag" or with stray spaces
pub(crate) fn normalize_tag(tag: &str) -> &str {
    tag.trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .trim_end()
}
