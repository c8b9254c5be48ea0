/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::InstagramError;
use crate::v1::{Client, Params, Response};

impl Client {
    pub async fn get_location(&self, location_id: &str) -> Result<Response, InstagramError> {
        self.get("locations/:id", Params::new().with("id", location_id))
            .await
    }

    /// Recent media tagged at a location
    pub async fn get_location_media(
        &self,
        location_id: &str,
        min_id: Option<&str>,
        max_id: Option<&str>,
    ) -> Result<Response, InstagramError> {
        let params = Params::new()
            .with("id", location_id)
            .with("min_id", min_id)
            .with("max_id", max_id);
        self.get("locations/:id/media/recent", params).await
    }

    /// Locations around a coordinate. `distance` is in meters.
    pub async fn search_locations(
        &self,
        lat: f64,
        lng: f64,
        distance: Option<u32>,
    ) -> Result<Response, InstagramError> {
        let params = Params::new()
            .with("lat", lat)
            .with("lng", lng)
            .with("distance", distance);
        self.get("locations/search", params).await
    }
}
