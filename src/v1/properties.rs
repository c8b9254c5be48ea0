/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{Display, EnumString, IntoStaticStr};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Protocol {
    Http,
    #[default]
    Https,
}

/// HTTP verbs understood by the request pipeline
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Verb {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    /// Verbs whose leftover parameters travel in a form-encoded body instead of the query string
    pub fn has_body(self) -> bool {
        matches!(self, Verb::Post | Verb::Put | Verb::Patch)
    }

    pub(crate) fn method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// OAuth2 permission scopes that can be requested on the login url.
///
/// See [Instagram Login Permissions](https://www.instagram.com/developer/authorization/)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Scope {
    Basic,
    PublicContent,
    FollowerList,
    Comments,
    Relationships,
    Likes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum RelationshipAction {
    Follow,
    Unfollow,
    Approve,
    Ignore,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn wire_names() {
        assert_eq!(<&str>::from(Scope::PublicContent), "public_content");
        assert_eq!(Scope::FollowerList.to_string(), "follower_list");
        assert_eq!(<&str>::from(RelationshipAction::Unfollow), "unfollow");
        assert_eq!(Verb::Patch.to_string(), "PATCH");
        assert_eq!(Protocol::default().to_string(), "https");
        assert_eq!(Protocol::from_str("HTTP").unwrap(), Protocol::Http);
        assert!(Protocol::from_str("ftp").is_err());
    }

    #[test]
    fn body_bearing_verbs() {
        assert!(Verb::Post.has_body());
        assert!(Verb::Put.has_body());
        assert!(Verb::Patch.has_body());
        assert!(!Verb::Get.has_body());
        assert!(!Verb::Delete.has_body());
    }
}
