//! Endpoint URL construction.

use url::Url;

use crate::config::EndpointConfig;
use crate::submission::TaskSubmission;

/// The remote endpoint, parsed once from configuration.
#[derive(Debug, Clone)]
pub struct Endpoint {
    base: Url,
    cache_bust_param: String,
}

impl Endpoint {
    pub fn new(base: Url, cache_bust_param: impl Into<String>) -> Self {
        Self {
            base,
            cache_bust_param: cache_bust_param.into(),
        }
    }

    pub fn from_config(config: &EndpointConfig) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(&config.url)?, config.cache_bust_param.clone()))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// URL for the opaque POST, with the cache-busting timestamp appended.
    pub fn submit_url(&self, now_millis: i64) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair(&self.cache_bust_param, &now_millis.to_string());
        url
    }

    /// URL for the readable GET, carrying every submission field.
    pub fn query_url(&self, submission: &TaskSubmission) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().extend_pairs(submission.pairs());
        url
    }
}

/// Current time in Unix milliseconds, for cache busting.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
