/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::InstagramError;
use crate::v1::Protocol;
use std::num::NonZeroU32;
use std::time::Duration;

// Root Instagram API host
pub const API_HOST: &str = "api.instagram.com";

pub const API_VERSION: u32 = 1;

pub const DEFAULT_LIMIT: NonZeroU32 = NonZeroU32::new(20).unwrap();

/// Client configuration. Validated once at construction and read-only afterwards apart
/// from the chained `with_*` setters used while building it.
#[derive(Clone)]
pub struct Config {
    client_id: String,
    client_secret: String,
    redirect_uri: Option<String>,
    protocol: Protocol,
    host: String,
    default_limit: NonZeroU32,
    verify_ssl: bool,
    timeout: Option<Duration>,
    signed_requests: bool,
    strict_placeholders: bool,
}

impl Config {
    /// Creates a configuration from the application's client id and secret.
    ///
    /// Both values must be non-empty.
    pub fn new(client_id: &str, client_secret: &str) -> Result<Self, InstagramError> {
        if client_id.trim().is_empty() {
            return Err(InstagramError::InvalidArgument(
                "client_id needs to be set and not empty".into(),
            ));
        }
        if client_secret.trim().is_empty() {
            return Err(InstagramError::InvalidArgument(
                "client_secret needs to be set and not empty".into(),
            ));
        }
        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: None,
            protocol: Protocol::default(),
            host: API_HOST.into(),
            default_limit: DEFAULT_LIMIT,
            verify_ssl: true,
            timeout: None,
            signed_requests: false,
            strict_placeholders: false,
        })
    }

    pub fn with_redirect_uri(mut self, redirect_uri: &str) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Overrides the API host (e.g. a proxy or a local mock server). May include a port.
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.trim_end_matches('/').into();
        self
    }

    /// Page size used by endpoints when the caller doesn't provide one
    pub fn with_default_limit(mut self, limit: NonZeroU32) -> Self {
        self.default_limit = limit;
        self
    }

    pub fn with_verify_ssl(mut self, verify_ssl: bool) -> Self {
        self.verify_ssl = verify_ssl;
        self
    }

    /// Request timeout handed through to the HTTP transport
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds the HMAC `sig` parameter required by apps with "Enforce signed requests" enabled
    pub fn with_signed_requests(mut self, signed_requests: bool) -> Self {
        self.signed_requests = signed_requests;
        self
    }

    /// When set a placeholder with no matching parameter is an error instead of an empty segment
    pub fn with_strict_placeholders(mut self, strict: bool) -> Self {
        self.strict_placeholders = strict;
        self
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn api_version(&self) -> u32 {
        API_VERSION
    }

    pub fn default_limit(&self) -> NonZeroU32 {
        self.default_limit
    }

    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn signed_requests(&self) -> bool {
        self.signed_requests
    }

    pub fn strict_placeholders(&self) -> bool {
        self.strict_placeholders
    }

    /// `{protocol}://{host}`
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.protocol, self.host)
    }

    /// Resolves the page size for a request. An explicit override is used verbatim, zero included.
    pub fn limit_size(&self, limit: Option<u32>) -> u32 {
        limit.unwrap_or(self.default_limit.get())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"xxx")
            .field("redirect_uri", &self.redirect_uri)
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("default_limit", &self.default_limit)
            .field("verify_ssl", &self.verify_ssl)
            .field("timeout", &self.timeout)
            .field("signed_requests", &self.signed_requests)
            .field("strict_placeholders", &self.strict_placeholders)
            .finish()
    }
}
