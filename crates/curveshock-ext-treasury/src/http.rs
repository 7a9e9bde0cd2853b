//! Treasury daily par yield curve over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use curveshock_config::SourceConfig;
use curveshock_core::{CurveSnapshot, ParsePolicy};
use curveshock_traits::{CurveSource, SourceType, TraitError};

use crate::parse::parse_daily_curve;

/// Fetches `{base_url}/{year}/all?...&_format=csv` and parses the newest row.
pub struct TreasuryHttpSource {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    policy: ParsePolicy,
}

impl TreasuryHttpSource {
    /// Creates a source against `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        user_agent: &str,
        timeout: Duration,
        policy: ParsePolicy,
    ) -> Result<Self, TraitError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| TraitError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
            policy,
        })
    }

    /// Creates a source from the `[source]` configuration section.
    pub fn from_config(config: &SourceConfig) -> Result<Self, TraitError> {
        Self::new(
            config.base_url.clone(),
            &config.user_agent,
            config.timeout(),
            config.parse_policy,
        )
    }

    /// Request URL for one reference year.
    pub fn url_for_year(&self, year: i32) -> String {
        format!(
            "{}/{year}/all?type=daily_treasury_yield_curve&field_tdr_date_value={year}&page&_format=csv",
            self.base_url
        )
    }

    fn map_transport_error(&self, err: reqwest::Error) -> TraitError {
        if err.is_timeout() {
            TraitError::Timeout(self.timeout)
        } else {
            TraitError::ConnectionFailed(err.to_string())
        }
    }
}

#[async_trait]
impl CurveSource for TreasuryHttpSource {
    fn source_type(&self) -> SourceType {
        SourceType::Snapshot
    }

    fn name(&self) -> &str {
        "treasury-http"
    }

    async fn latest_for_year(&self, year: i32) -> Result<CurveSnapshot, TraitError> {
        let url = self.url_for_year(year);
        debug!(%url, "requesting Treasury curve");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), year, "Treasury request rejected");
            return Err(TraitError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        parse_daily_curve(&body, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use curveshock_core::Tenor;

    /// Serves one canned HTTP response and returns the base URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut read = 0;
            loop {
                let n = socket.read(&mut buf[read..]).await.unwrap();
                read += n;
                if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "{status_line}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/rates.csv")
    }

    fn source(base: &str) -> TreasuryHttpSource {
        TreasuryHttpSource::new(base, "test-agent", Duration::from_secs(5), ParsePolicy::Lenient)
            .unwrap()
    }

    #[test]
    fn test_url_for_year() {
        let src = source("https://example.test/rates.csv/");
        assert_eq!(
            src.url_for_year(2025),
            "https://example.test/rates.csv/2025/all?type=daily_treasury_yield_curve&field_tdr_date_value=2025&page&_format=csv"
        );
    }

    #[tokio::test]
    async fn test_fetch_and_parse() {
        let base = serve_once(
            "HTTP/1.1 200 OK",
            "Date,\"2 Yr\",\"10 Yr\"\n10/17/2025,3.46,4.01\n10/16/2025,3.43,3.99\n",
        )
        .await;
        let snap = source(&base).latest_for_year(2025).await.unwrap();
        assert_eq!(snap.as_of, "10/17/2025");
        assert_eq!(snap.curve.get(Tenor::years(2)), Some(3.46));
        assert_eq!(snap.curve.get(Tenor::years(10)), Some(4.01));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let base = serve_once("HTTP/1.1 404 Not Found", "").await;
        let err = source(&base).latest_for_year(2025).await.unwrap_err();
        match err {
            TraitError::HttpStatus { status, url } => {
                assert_eq!(status, 404);
                assert!(url.contains("/2025/all?"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = source(&format!("http://{addr}"))
            .latest_for_year(2025)
            .await
            .unwrap_err();
        assert!(matches!(err, TraitError::ConnectionFailed(_)));
    }
}
