/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::client::normalize_tag;
use crate::v1::errors::InstagramError;
use crate::v1::{Client, Params, Response};

impl Client {
    /// Searches for tags by name
    pub async fn search_tags(&self, query: &str) -> Result<Response, InstagramError> {
        self.get("tags/search", Params::new().with("q", query)).await
    }

    /// Returns information about a tag. A leading `#` is ignored.
    pub async fn get_tag(&self, tag: &str) -> Result<Response, InstagramError> {
        self.get("tags/:tag", Params::new().with("tag", normalize_tag(tag)))
            .await
    }

    /// Recently tagged media
    pub async fn get_tagged_media(
        &self,
        tag: &str,
        limit: Option<u32>,
        min_tag_id: Option<&str>,
        max_tag_id: Option<&str>,
    ) -> Result<Response, InstagramError> {
        let params = Params::new()
            .with("tag", normalize_tag(tag))
            .with("count", self.limit_size(limit))
            .with("min_tag_id", min_tag_id)
            .with("max_tag_id", max_tag_id);
        self.get("tags/:tag/media/recent", params).await
    }
}
