/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::InstagramError;
use crate::v1::{Client, Params, Response};

/// Media, comment and like endpoints.
///
/// See [Instagram API Docs](https://www.instagram.com/developer/endpoints/media/).
impl Client {
    /// Returns information about a media object
    pub async fn get_media(&self, media_id: &str) -> Result<Response, InstagramError> {
        self.get("media/:id", Params::new().with("id", media_id)).await
    }

    /// Looks up a media object by the shortcode found in its web url
    pub async fn get_media_by_shortcode(&self, shortcode: &str) -> Result<Response, InstagramError> {
        self.get(
            "media/shortcode/:shortcode",
            Params::new().with("shortcode", shortcode),
        )
        .await
    }

    /// Recent media around a location. `distance` is in meters.
    pub async fn search_media(
        &self,
        lat: f64,
        lng: f64,
        distance: Option<u32>,
    ) -> Result<Response, InstagramError> {
        let params = Params::new()
            .with("lat", lat)
            .with("lng", lng)
            .with("distance", distance);
        self.get("media/search", params).await
    }

    pub async fn get_media_comments(&self, media_id: &str) -> Result<Response, InstagramError> {
        self.get("media/:id/comments", Params::new().with("id", media_id))
            .await
    }

    pub async fn add_media_comment(
        &self,
        media_id: &str,
        text: &str,
    ) -> Result<Response, InstagramError> {
        let params = Params::new().with("id", media_id).with("text", text);
        self.post("media/:id/comments", params).await
    }

    /// Removes a comment made by, or on media of, the authenticated user
    pub async fn delete_media_comment(
        &self,
        media_id: &str,
        comment_id: &str,
    ) -> Result<Response, InstagramError> {
        let params = Params::new()
            .with("id", media_id)
            .with("comment_id", comment_id);
        self.delete("media/:id/comments/:comment_id", params).await
    }

    /// Users who have liked a media object
    pub async fn get_media_likes(&self, media_id: &str) -> Result<Response, InstagramError> {
        self.get("media/:id/likes", Params::new().with("id", media_id))
            .await
    }

    pub async fn like_media(&self, media_id: &str) -> Result<Response, InstagramError> {
        self.post("media/:id/likes", Params::new().with("id", media_id))
            .await
    }

    pub async fn unlike_media(&self, media_id: &str) -> Result<Response, InstagramError> {
        self.delete("media/:id/likes", Params::new().with("id", media_id))
            .await
    }
}
