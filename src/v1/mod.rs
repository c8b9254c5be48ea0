/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod location;
pub mod media;
pub mod oauth;
pub mod params;
mod parsers;
pub mod properties;
pub mod relationship;
pub mod request;
pub mod response;
pub mod tag;
pub mod user;

pub use api::*;
pub use client::*;
pub use config::*;
pub use errors::*;
pub use params::*;
pub use properties::*;
pub use request::*;
pub use response::*;
