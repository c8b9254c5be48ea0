/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::InstagramError;
use crate::v1::{Client, Params, Response, Scope, Verb};
use log::debug;

/// OAuth2 authorization code flow.
///
/// Send the user to [`Client::get_login_url`]; Instagram redirects back to the configured
/// redirect uri with a `code` which is exchanged for an access token through
/// [`Client::get_oauth_token`]. Storing the token is left to the caller.
impl Client {
    /// Url of the authorization page requesting `scopes` (`basic` when empty)
    pub fn get_login_url(&self, scopes: &[Scope]) -> Result<String, InstagramError> {
        let scope = if scopes.is_empty() {
            Scope::Basic.to_string()
        } else {
            scopes
                .iter()
                .map(|s| <&str>::from(*s))
                .collect::<Vec<_>>()
                .join(" ")
        };
        let params = Params::new()
            .with("client_id", self.config().client_id())
            .with("redirect_uri", self.config().redirect_uri())
            .with("response_type", "code")
            .with("scope", scope);
        Ok(self
            .api()
            .build_url("oauth/authorize", params, true, Verb::Get)?
            .url)
    }

    /// Exchanges an authorization code and returns the whole response (token and user)
    pub async fn get_oauth_token(&self, code: &str) -> Result<Response, InstagramError> {
        let config = self.config();
        let params = Params::new()
            .with("client_secret", config.client_secret())
            .with("client_id", config.client_id())
            .with("grant_type", "authorization_code")
            .with("code", code)
            .with("redirect_uri", config.redirect_uri());

        // Raw url so the exchange never carries an access token
        let req = self
            .api()
            .build_url("oauth/access_token", params, true, Verb::Post)?;
        debug!("Exchanging OAuth code");
        self.api().execute(&req.url, Verb::Post, req.body).await
    }

    /// Exchanges an authorization code and returns only the access token
    pub async fn get_oauth_access_token(&self, code: &str) -> Result<String, InstagramError> {
        let resp = self.get_oauth_token(code).await?;
        match resp.get_str("access_token", "") {
            "" => Err(InstagramError::Authentication {
                message: "Response did not include an access_token".into(),
                code: Some(resp.status().into()),
            }),
            token => Ok(token.to_string()),
        }
    }
}
