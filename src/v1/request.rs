/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::InstagramError;
use crate::v1::{Config, ParamValue, Params, Verb};
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Output of [`RequestBuilder::build`].
///
/// `body` holds the leftover parameters of a body-bearing verb and is empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    pub url: String,
    pub body: Params,
}

/// Turns a path template and its parameters into a fully qualified API url.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    config: &'a Config,
    access_token: Option<&'a str>,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a Config, access_token: Option<&'a str>) -> Self {
        Self {
            config,
            access_token,
        }
    }

    /// Builds the url for `path`.
    ///
    /// Placeholder segments (`:name`) consume the matching entry of `params`. Unless `raw`
    /// is set the url is versioned and carries the access token. Leftover parameters are
    /// appended to the query string, or handed back in [`BuiltRequest::body`] for
    /// POST/PUT/PATCH.
    pub fn build(
        &self,
        path: &str,
        mut params: Params,
        raw: bool,
        verb: Verb,
    ) -> Result<BuiltRequest, InstagramError> {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            return Err(InstagramError::InvalidArgument(
                "Path needs to be set and not empty".into(),
            ));
        }

        let path = self.substitute(path, &mut params)?;

        let mut url = if raw {
            format!("{}/{}", self.config.base_url(), path)
        } else {
            format!(
                "{}/v{}/{}",
                self.config.base_url(),
                self.config.api_version(),
                path
            )
        };

        let mut separator = '?';
        let mut token = None;
        if !raw {
            let access_token = self
                .access_token
                .ok_or_else(InstagramError::missing_access_token)?;
            url.push_str("?access_token=");
            url.push_str(&urlencoding::encode(access_token));
            separator = '&';
            token = Some(access_token);
            // The configured token always wins over one passed as a parameter
            params.remove("access_token");
        }

        let sig = match token {
            Some(access_token) if self.config.signed_requests() => Some(self.signature(
                &path,
                std::iter::once(("access_token", access_token)).chain(params.present()),
            )?),
            _ => None,
        };

        if verb.has_body() {
            if let Some(sig) = sig {
                params.insert("sig", sig);
            }
            return Ok(BuiltRequest { url, body: params });
        }

        for (key, value) in params.present().chain(sig.as_deref().map(|s| ("sig", s))) {
            url.push(separator);
            url.push_str(&urlencoding::encode(key));
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            separator = '&';
        }

        Ok(BuiltRequest {
            url,
            body: Params::new(),
        })
    }

    // Single pass over the path segments. Substituted text is never re-scanned.
    fn substitute(&self, path: &str, params: &mut Params) -> Result<String, InstagramError> {
        let segments = path
            .split('/')
            .map(|segment| match placeholder_name(segment) {
                Some(name) => match params.remove(name) {
                    Some(ParamValue::Value(v)) => Ok(urlencoding::encode(&v).into_owned()),
                    _ if self.config.strict_placeholders() => {
                        Err(InstagramError::InvalidArgument(format!(
                            "Missing value for path parameter :{}",
                            name
                        )))
                    }
                    _ => Ok(String::new()),
                },
                None => Ok(segment.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(segments.join("/"))
    }

    // HMAC-SHA256 over "/{endpoint}|key=value|..." with keys sorted
    fn signature<'p>(
        &self,
        endpoint: &str,
        params: impl Iterator<Item = (&'p str, &'p str)>,
    ) -> Result<String, InstagramError> {
        let mut params: Vec<_> = params.collect();
        params.sort_by(|a, b| a.0.cmp(b.0));

        let mut message = format!("/{}", endpoint);
        for (key, value) in params {
            message.push('|');
            message.push_str(key);
            message.push('=');
            message.push_str(value);
        }

        let mut mac = Hmac::<Sha256>::new_from_slice(self.config.client_secret().as_bytes())
            .map_err(|e| InstagramError::InvalidArgument(e.to_string()))?;
        mac.update(message.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

// `:name` where name is a word identifier
fn placeholder_name(segment: &str) -> Option<&str> {
    let name = segment.strip_prefix(':')?;
    let is_word = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_word.then_some(name)
}
