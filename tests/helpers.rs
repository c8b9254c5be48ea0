/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use instagram::v1::{Client, Config, Protocol};
use std::net::TcpListener;
use wiremock::MockServer;

#[allow(dead_code)]
pub(crate) const CLIENT_ID: &str = "test-client";
#[allow(dead_code)]
pub(crate) const CLIENT_SECRET: &str = "test-secret";
#[allow(dead_code)]
pub(crate) const REDIRECT_URI: &str = "http://localhost/callback";
#[allow(dead_code)]
pub(crate) const ACCESS_TOKEN: &str = "token.abc";

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
fn config_for_host(host: &str) -> Config {
    Config::new(CLIENT_ID, CLIENT_SECRET)
        .unwrap()
        .with_redirect_uri(REDIRECT_URI)
        .with_protocol(Protocol::Http)
        .with_host(host)
}

/// Client pointed at the mock server, without an access token
#[allow(dead_code)]
pub(crate) fn anonymous_client(server: &MockServer) -> Client {
    init_logging();
    Client::new(config_for_host(&server.address().to_string())).unwrap()
}

/// Client pointed at the mock server with [`ACCESS_TOKEN`] set
#[allow(dead_code)]
pub(crate) fn mock_client(server: &MockServer) -> Client {
    anonymous_client(server).with_access_token(ACCESS_TOKEN)
}

/// Client pointed at a local port nothing listens on
#[allow(dead_code)]
pub(crate) fn unreachable_client() -> Client {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Client::new(config_for_host(&addr.to_string()))
        .unwrap()
        .with_access_token(ACCESS_TOKEN)
}

/// Client for the real API, configured from the environment (or a `.env` file)
#[allow(dead_code)]
pub(crate) fn live_client() -> anyhow::Result<Client> {
    let client_id = std::env::var("INSTAGRAM_CLIENT_ID")?;
    let client_secret = std::env::var("INSTAGRAM_CLIENT_SECRET")?;
    let access_token = std::env::var("INSTAGRAM_ACCESS_TOKEN")?;

    let mut config = Config::new(&client_id, &client_secret)?;
    if let Ok(redirect_uri) = std::env::var("INSTAGRAM_REDIRECT_URI") {
        config = config.with_redirect_uri(&redirect_uri);
    }
    Ok(Client::new(config)?.with_access_token(access_token))
}
