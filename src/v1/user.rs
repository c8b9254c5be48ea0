/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::InstagramError;
use crate::v1::{Client, Params, Response};

/// User endpoints.
///
/// See [Instagram API Docs](https://www.instagram.com/developer/endpoints/users/) for details
/// on the returned fields.
impl Client {
    /// Returns information for the specified user id (`self` for the token owner)
    pub async fn get_user(&self, user_id: &str) -> Result<Response, InstagramError> {
        self.get("users/:id", Params::new().with("id", user_id)).await
    }

    /// Returns information for the authenticated user
    pub async fn authenticated_user(&self) -> Result<Response, InstagramError> {
        self.get_user("self").await
    }

    /// Searches for users by name
    pub async fn search_user(
        &self,
        name: &str,
        limit: Option<u32>,
    ) -> Result<Response, InstagramError> {
        let params = Params::new()
            .with("q", name)
            .with("count", self.limit_size(limit));
        self.get("users/search", params).await
    }

    /// Most recent media published by a user
    pub async fn get_user_media(
        &self,
        user_id: &str,
        limit: Option<u32>,
        min_id: Option<&str>,
        max_id: Option<&str>,
    ) -> Result<Response, InstagramError> {
        let params = Params::new()
            .with("id", user_id)
            .with("count", self.limit_size(limit))
            .with("min_id", min_id)
            .with("max_id", max_id);
        self.get("users/:id/media/recent", params).await
    }

    /// Media the authenticated user has liked
    pub async fn get_user_liked(
        &self,
        limit: Option<u32>,
        max_like_id: Option<&str>,
    ) -> Result<Response, InstagramError> {
        let params = Params::new()
            .with("count", self.limit_size(limit))
            .with("max_like_id", max_like_id);
        self.get("users/self/media/liked", params).await
    }

    /// The authenticated user's feed
    pub async fn get_user_feed(
        &self,
        limit: Option<u32>,
        min_id: Option<&str>,
        max_id: Option<&str>,
    ) -> Result<Response, InstagramError> {
        let params = Params::new()
            .with("count", self.limit_size(limit))
            .with("min_id", min_id)
            .with("max_id", max_id);
        self.get("users/self/feed", params).await
    }
}
