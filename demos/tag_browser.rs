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
use instagram::v1::{Client, Config, ErrorKind};
use serde::Deserialize;

// Just the fields we print
#[derive(Deserialize, Debug)]
struct MediaSummary {
    id: String,
    link: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let tag = std::env::args().nth(1).unwrap_or_else(|| "#nofilter".to_string());

    let config = Config::new(
        &std::env::var("INSTAGRAM_CLIENT_ID")?,
        &std::env::var("INSTAGRAM_CLIENT_SECRET")?,
    )?;
    // The access token is obtained via the OAuth2 flow (see the login_flow demo)
    let client = Client::new(config)?.with_access_token(std::env::var("INSTAGRAM_ACCESS_TOKEN")?);

    let info = match client.get_tag(&tag).await {
        Ok(info) => info,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            println!("No such tag: {}", tag);
            return Ok(());
        }
        Err(err) if err.kind() == ErrorKind::NotPermitted => {
            println!("The access token is missing the public_content scope: {}", err);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    println!(
        "{} has {} posts",
        info.get_str("data.name", &tag),
        info.get("data.media_count", serde_json::json!(0))
    );

    let recent = client.get_tagged_media(&tag, Some(5), None, None).await?;
    let media: Vec<MediaSummary> = recent.get_as("data")?.unwrap_or_default();
    for item in media {
        println!("{} {} {:?}", item.id, item.link, item.tags);
    }

    // Cursor for the next page, if any
    if let Some(next) = recent.lookup("pagination.next_max_tag_id") {
        println!("Next page starts after {}", next);
    }
    Ok(())
}
