//! Source trait and HTTP implementation for the schedule document

#[cfg(test)]
use mockall::automock;

use tracing::warn;

use crate::schedule::error::FetchError;
use crate::schedule::types::RawSchedule;

/// URL of the published Node.js release schedule.
const DEFAULT_SCHEDULE_URL: &str =
    "https://raw.githubusercontent.com/nodejs/Release/master/schedule.json";

/// Trait for fetching the raw schedule document.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Location of the schedule document, used in error reports.
    fn location(&self) -> String;

    /// Fetches and decodes the raw schedule document.
    async fn fetch(&self) -> Result<RawSchedule, FetchError>;
}

/// Schedule source backed by an HTTP GET of the published JSON document.
pub struct HttpScheduleSource {
    client: reqwest::Client,
    url: String,
}

impl HttpScheduleSource {
    /// Creates a new HttpScheduleSource with a custom document URL.
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("nodejs-schedule")
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
        }
    }
}

impl Default for HttpScheduleSource {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEDULE_URL)
    }
}

#[async_trait::async_trait]
impl ScheduleSource for HttpScheduleSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<RawSchedule, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("schedule endpoint returned status {}: {}", status, self.url);
            return Err(FetchError::Status(status));
        }

        let raw: RawSchedule = response.json().await.map_err(|e| {
            warn!("failed to decode the schedule document: {}", e);
            FetchError::Decode(e.to_string())
        })?;

        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn fetch_decodes_schedule_document() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/schedule.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "v4": {
                        "start": "2015-09-08",
                        "end": "2018-04-30",
                        "lts": "2015-10-12",
                        "codename": "Argon"
                    },
                    "v0.12": {"start": "2015-02-06", "end": "2016-12-31"}
                }"#,
            )
            .create_async()
            .await;

        let source = HttpScheduleSource::new(&format!("{}/schedule.json", server.url()));
        let raw = source.fetch().await.unwrap();

        mock.assert_async().await;
        assert_eq!(raw.len(), 2);
        assert_eq!(raw["v4"].start, "2015-09-08");
        assert_eq!(raw["v4"].codename.as_deref(), Some("Argon"));
        assert_eq!(raw["v0.12"].lts, None);
    }

    #[tokio::test]
    async fn fetch_returns_status_error_for_server_failure() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/schedule.json")
            .with_status(500)
            .create_async()
            .await;

        let source = HttpScheduleSource::new(&format!("{}/schedule.json", server.url()));
        let result = source.fetch().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::Status(status)) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn fetch_returns_decode_error_for_malformed_body() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/schedule.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let source = HttpScheduleSource::new(&format!("{}/schedule.json", server.url()));
        let result = source.fetch().await;

        mock.assert_async().await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }
}
