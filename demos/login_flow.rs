/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate instagram;

use anyhow::Result;
use dotenvy::dotenv;
use instagram::v1::{Client, Config, Scope};
use std::io::BufRead;

// Walks through the OAuth2 code flow and prints the resulting access token.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The client id/secret come from the app registered with Instagram.
    // The redirect uri must match the one registered for that app.
    let config = Config::new(
        &std::env::var("INSTAGRAM_CLIENT_ID")?,
        &std::env::var("INSTAGRAM_CLIENT_SECRET")?,
    )?
    .with_redirect_uri(&std::env::var("INSTAGRAM_REDIRECT_URI")?);
    let mut client = Client::new(config)?;

    println!(
        "Open this url and authorize the app:\n{}",
        client.get_login_url(&[Scope::Basic, Scope::PublicContent])?
    );
    println!("Paste the `code` parameter from the redirect:");

    let mut code = String::new();
    std::io::stdin().lock().read_line(&mut code)?;

    // Keeping the whole response around since it also describes the user
    let resp = client.get_oauth_token(code.trim()).await?;
    let access_token = resp.get_str("access_token", "").to_string();
    println!(
        "Authorized as {}. Access token: {}",
        resp.get_str("user.username", "unknown"),
        access_token
    );

    client.set_access_token(access_token);
    let user = client.authenticated_user().await?;
    println!(
        "Followers: {}",
        user.get("data.counts.followed_by", serde_json::json!(0))
    );
    Ok(())
}
