//! Report fetch layer.
//!
//! [`ReportSource`] abstracts where raw report payloads come from so
//! the service can be tested without a BW endpoint. [`BwApiClient`] is
//! the HTTP implementation; [`ReportService`] keeps a per-report-name
//! cache of parsed and transformed results.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::parser::parse_report;
use crate::transform::{transform_report, TransformedReport};

/// Source of raw report payloads, keyed by report name.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch_raw(&self, report_name: &str) -> Result<String>;
}

/// HTTP client for the BW report endpoint
pub struct BwApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl BwApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .context("failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ReportSource for BwApiClient {
    async fn fetch_raw(&self, report_name: &str) -> Result<String> {
        let url = format!("{}/reports/{}", self.base_url, report_name);
        tracing::info!("BW API: GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "text/xml")
            .send()
            .await
            .with_context(|| format!("network error requesting {}", url))?;

        let status = response.status();
        tracing::info!("BW API response: {} for {}", status, url);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "HTTP {} requesting {}: {}",
                status,
                url,
                body
            ));
        }

        response
            .text()
            .await
            .with_context(|| format!("failed to read response body from {}", url))
    }
}

/// Fetch, parse and pivot reports, caching the result per report name.
pub struct ReportService<S> {
    source: S,
    cache: Mutex<HashMap<String, Arc<TransformedReport>>>,
}

impl<S: ReportSource> ReportService<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The transformed report for `report_name`, fetching on a cache
    /// miss. Payloads that parse but carry no characteristic field
    /// surface the transform error.
    pub async fn report(&self, report_name: &str) -> Result<Arc<TransformedReport>> {
        {
            let cache = self.cache.lock().await;
            if let Some(report) = cache.get(report_name) {
                return Ok(Arc::clone(report));
            }
        }

        let raw = self.source.fetch_raw(report_name).await?;
        let parsed = parse_report(&raw);
        if let Some(error) = &parsed.error {
            return Err(anyhow::anyhow!(
                "report '{}' failed to parse: {}",
                report_name,
                error
            ));
        }
        let transformed = Arc::new(
            transform_report(&parsed)
                .with_context(|| format!("report '{}' failed to transform", report_name))?,
        );

        let mut cache = self.cache.lock().await;
        let report = cache
            .entry(report_name.to_string())
            .or_insert(transformed);
        Ok(Arc::clone(report))
    }

    /// Drop the cached result for one report name.
    pub async fn invalidate(&self, report_name: &str) {
        self.cache.lock().await.remove(report_name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const PAYLOAD: &str = r#"
        <ZBW_QUERY_OUTPUT_METADATA type="CHA">
            <FIELDNAME>ZSCMCMD</FIELDNAME>
            <SCRTEXT_L>Commodity</SCRTEXT_L>
        </ZBW_QUERY_OUTPUT_METADATA>
        <ZBW_QUERY_OUTPUT_METADATA type="KF">
            <FIELDNAME>VALUE001</FIELDNAME>
            <SCRTEXT_L>Order Value</SCRTEXT_L>
        </ZBW_QUERY_OUTPUT_METADATA>
        <OUTPUT>
            <item>
                <ZSCMCMD>OCTG</ZSCMCMD>
                <VALUE001>100</VALUE001>
            </item>
        </OUTPUT>
    "#;

    struct StubSource {
        payload: &'static str,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn new(payload: &'static str) -> Self {
            Self {
                payload,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ReportSource for &StubSource {
        async fn fetch_raw(&self, _report_name: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.payload.to_string())
        }
    }

    #[tokio::test]
    async fn second_request_is_served_from_cache() {
        let source = StubSource::new(PAYLOAD);
        let service = ReportService::new(&source);

        let first = service.report("ZSCM_CMD_REPORT").await.unwrap();
        let second = service.report("ZSCM_CMD_REPORT").await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(
            first.cell("ZSCMCMD", "OCTG", "VALUE001").map(|v| v.to_number()),
            Some(100.0)
        );
    }

    #[tokio::test]
    async fn invalidate_forces_a_refetch() {
        let source = StubSource::new(PAYLOAD);
        let service = ReportService::new(&source);

        service.report("ZSCM_CMD_REPORT").await.unwrap();
        service.invalidate("ZSCM_CMD_REPORT").await;
        service.report("ZSCM_CMD_REPORT").await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn blank_payload_surfaces_the_parse_error() {
        let source = StubSource::new("   ");
        let service = ReportService::new(&source);

        let err = service.report("EMPTY").await.unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[tokio::test]
    async fn payload_without_characteristics_surfaces_the_transform_error() {
        let source = StubSource::new(
            r#"
            <ZBW_QUERY_OUTPUT_METADATA type="KF">
                <FIELDNAME>VALUE001</FIELDNAME>
                <SCRTEXT_L>Order Value</SCRTEXT_L>
            </ZBW_QUERY_OUTPUT_METADATA>
            <OUTPUT>
                <item>
                    <VALUE001>100</VALUE001>
                </item>
            </OUTPUT>
            "#,
        );
        let service = ReportService::new(&source);

        let err = service.report("NO_CHA").await.unwrap_err();
        assert!(err.to_string().contains("failed to transform"));
    }
}
