/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::InstagramError;
use crate::v1::{Client, Params, RelationshipAction, Response};

impl Client {
    /// Users the authenticated user follows
    pub async fn get_follows(&self) -> Result<Response, InstagramError> {
        self.get("users/self/follows", Params::new()).await
    }

    /// Users following the authenticated user
    pub async fn get_followed_by(&self) -> Result<Response, InstagramError> {
        self.get("users/self/followed-by", Params::new()).await
    }

    /// Pending follow requests
    pub async fn get_requested_by(&self) -> Result<Response, InstagramError> {
        self.get("users/self/requested-by", Params::new()).await
    }

    pub async fn get_relationship(&self, user_id: &str) -> Result<Response, InstagramError> {
        self.get("users/:id/relationship", Params::new().with("id", user_id))
            .await
    }

    /// Follows, unfollows, approves or ignores the given user
    pub async fn modify_relationship(
        &self,
        user_id: &str,
        action: RelationshipAction,
    ) -> Result<Response, InstagramError> {
        let params = Params::new()
            .with("id", user_id)
            .with("action", <&str>::from(action));
        self.post("users/:id/relationship", params).await
    }
}
