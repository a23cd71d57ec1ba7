// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use reqwest::Url;
use test_ack_schema::AckKey;

use crate::{GatewayError, GatewayResult};

pub const DEFAULT_API_PATH: &str = "/api/test_acknowledgments";
pub const DEFAULT_USER_AGENT: &str = "test_ack_editor/0.1";

/// Where the acknowledgments REST resource lives.
///
/// - `POST {base_url}{api_path}` saves (creates when the key is null).
/// - `DELETE {base_url}{api_path}/{key}` deletes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_path: String,
    pub user_agent: String,
}

impl GatewayConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_path: DEFAULT_API_PATH.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }

    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidUrl`] if `base_url` + `api_path` don't form an
    /// absolute URL.
    pub fn collection_url(&self) -> GatewayResult<Url> {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_path.trim_start_matches('/')
        );
        Url::parse(&url).map_err(|error| GatewayError::InvalidUrl {
            url,
            reason: error.to_string(),
        })
    }

    /// The key is appended as one path segment, so it is percent encoded as needed.
    ///
    /// # Errors
    ///
    /// Same as [`Self::collection_url`], plus when the URL can't have path segments
    /// (eg: `mailto:`).
    pub fn item_url(&self, key: &AckKey) -> GatewayResult<Url> {
        let mut url = self.collection_url()?;
        let invalid = |url: &Url| GatewayError::InvalidUrl {
            url: url.to_string(),
            reason: "URL can't be a base".into(),
        };
        let snapshot = url.clone();
        url.path_segments_mut()
            .map_err(|()| invalid(&snapshot))?
            .pop_if_empty()
            .push(key.as_str());
        Ok(url)
    }
}
