//! HTTP task feed client
//!
//! Fetches sample tasks from a configured demo endpoint returning a JSON
//! array of task records (the original application's `/api/demo-tasks`).

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::domain::Task;
use crate::ports::TaskFeedProvider;

/// Blocking HTTP client for a task feed endpoint
#[derive(Debug)]
pub struct TaskApiClient {
    client: Client,
    endpoint: String,
}

impl TaskApiClient {
    /// Create a client for the given endpoint URL
    ///
    /// The URL must be absolute with an http or https scheme.
    pub fn new(endpoint: &str) -> Result<Self> {
        let parsed = Url::parse(endpoint)
            .map_err(|e| Error::feed(format!("invalid endpoint URL '{endpoint}': {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::feed(format!(
                "endpoint must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::feed(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: parsed.into(),
        })
    }
}

impl TaskFeedProvider for TaskApiClient {
    fn name(&self) -> &str {
        "api"
    }

    fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(|e| Error::feed(format!("request to {} failed: {e}", self.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::feed(format!(
                "{} answered {status}",
                self.endpoint
            )));
        }

        response
            .json::<Vec<Task>>()
            .map_err(|e| Error::feed(format!("malformed task feed response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_urls() {
        assert!(TaskApiClient::new("/api/demo-tasks").is_err());
    }

    #[test]
    fn test_rejects_non_http_schemes() {
        assert!(TaskApiClient::new("ftp://example.com/tasks").is_err());
    }

    #[test]
    fn test_accepts_http_and_https() {
        assert!(TaskApiClient::new("http://localhost:3000/api/demo-tasks").is_ok());
        assert!(TaskApiClient::new("https://example.com/api/demo-tasks").is_ok());
    }
}
