/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Instagram
//!
//! This Instagram library was created for working with the Instagram APIv1 interface.
//!
//! For further details on the Rest API refer to the [Instagram API Docs](https://www.instagram.com/developer/endpoints/)
//!
//! ## Features
//!
//! - OAuth2 authorization code flow
//!     - Builds the login url for the requested scopes
//!     - Exchanges the returned code for an access token
//! - User information, media, likes and feed
//! - Tag information and tagged media
//! - Media, comments and likes
//! - Relationships
//! - Locations
//! - Optional signed requests (`sig` parameter)
//! - Lower level interface for handling the raw communication
//!
//! *Errors returned by the API are mapped onto [`v1::InstagramError`] so callers can match
//! on not found, authentication and permission failures without inspecting messages.*
//!
//! *Responses are returned as a [`v1::Response`] which supports dotted path lookups such
//! as `data.username` or `data.0.id`.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! instagram = "0.4.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to register a client with Instagram to get a client id/secret**
//!
//! ```rust,no_run
//! use instagram::v1::{Client, Config, InstagramError, Scope};
//!
//! async fn recent_tagged(code: &str) -> Result<(), InstagramError> {
//!     let config = Config::new("client-id", "client-secret")?
//!         .with_redirect_uri("https://example.com/callback");
//!     let mut client = Client::new(config)?;
//!
//!     // Send the user here first. Instagram redirects back with a code.
//!     println!("{}", client.get_login_url(&[Scope::Basic, Scope::PublicContent])?);
//!
//!     let access_token = client.get_oauth_access_token(code).await?;
//!     client.set_access_token(access_token);
//!
//!     let media = client.get_tagged_media("#nofilter", Some(5), None, None).await?;
//!     println!("first media id: {}", media.get_str("data.0.id", "none"));
//!     Ok(())
//! }
//! ```
//!
pub mod v1;
