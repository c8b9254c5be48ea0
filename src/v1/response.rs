/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v1::errors::InstagramError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parsed response body.
///
/// Values are looked up with dotted paths such as `meta.code` or `data.0.id` (numeric
/// segments index into arrays).
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    status: u16,
    body: Value,
}

impl Response {
    pub(crate) fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Parses a JSON body. An empty body is treated as `null`.
    pub fn from_body(status: u16, body: &str) -> Result<Self, InstagramError> {
        if body.trim().is_empty() {
            return Ok(Self::new(status, Value::Null));
        }
        let body = serde_json::from_str(body).map_err(InstagramError::ResponseMalformed)?;
        Ok(Self::new(status, body))
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the value at `path` if there is one
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .filter(|key| !key.is_empty())
            .try_fold(&self.body, |node, key| match node {
                Value::Object(map) => map.get(key),
                Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }

    /// Returns the value at `path` or `default` when it is missing or null
    pub fn get(&self, path: &str, default: Value) -> Value {
        match self.lookup(path) {
            Some(Value::Null) | None => default,
            Some(v) => v.clone(),
        }
    }

    pub fn get_str<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        self.lookup(path).and_then(Value::as_str).unwrap_or(default)
    }

    /// Deserializes the value at `path` into `T`
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, InstagramError> {
        match self.lookup(path) {
            Some(Value::Null) | None => Ok(None),
            Some(v) => Ok(Some(serde_json::from_value(v.clone())?)),
        }
    }

    /// The `data` envelope used by every resource endpoint
    pub fn data(&self) -> Option<&Value> {
        self.lookup("data")
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_value(self) -> Value {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn response() -> Response {
        Response::new(
            200,
            json!({
                "meta": {"code": 200},
                "data": [
                    {"id": "1", "user": {"username": "snoopy"}},
                    {"id": "2", "caption": null}
                ],
                "pagination": {"next_max_id": "2"}
            }),
        )
    }

    #[test]
    fn dotted_lookup() {
        let resp = response();
        assert_eq!(resp.lookup("meta.code"), Some(&json!(200)));
        assert_eq!(resp.get_str("data.0.user.username", ""), "snoopy");
        assert_eq!(resp.get_str("data.1.id", ""), "2");
        assert_eq!(resp.lookup("data.5.id"), None);
        assert_eq!(resp.lookup("meta.code.deeper"), None);
        assert_eq!(resp.get_str("pagination.next_url", "none"), "none");
    }

    #[test]
    fn defaults() {
        let resp = response();
        assert_eq!(resp.get("data.1.caption", json!("n/a")), json!("n/a"));
        assert_eq!(resp.get("missing", json!(0)), json!(0));
        assert_eq!(resp.get("meta.code", json!(0)), json!(200));
    }

    #[test]
    fn typed_lookup() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct UserRef {
            username: String,
        }
        let resp = response();
        let user: Option<UserRef> = resp.get_as("data.0.user").unwrap();
        assert_eq!(
            user,
            Some(UserRef {
                username: "snoopy".into()
            })
        );
        assert!(resp.get_as::<UserRef>("data.1.user").unwrap().is_none());
        assert!(resp.get_as::<u32>("data.0.user").is_err());
    }

    #[test]
    fn parses_body() {
        let resp = Response::from_body(200, r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(resp.get_str("access_token", ""), "abc");
        assert_eq!(Response::from_body(204, "").unwrap().body(), &Value::Null);
        assert!(Response::from_body(200, "<html>").is_err());
    }
}
