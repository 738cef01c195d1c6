//! Rate fetcher - retrieval chain and query surface
//!
//! Retrieval is an ordered chain of sources, each tried once: the ECB network
//! endpoint first, then (when configured) a local fallback file in the same
//! schema. The first source that yields a parseable document wins; there are
//! no retries and nothing is cached between calls.

use crate::currency::Currency;
use crate::document::RateDocument;
use crate::error::{EcbError, Result};
use log::{debug, warn};
use reqwest::Client;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// The ECB daily reference-rate endpoint
pub const ECB_DAILY_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml";

/// One retrieval strategy in the fallback chain
#[derive(Debug, Clone)]
enum RateSource {
    Network { url: String },
    File { path: PathBuf },
}

impl RateSource {
    fn describe(&self) -> String {
        match self {
            RateSource::Network { url } => url.clone(),
            RateSource::File { path } => path.display().to_string(),
        }
    }
}

/// Fetcher for the euro's daily reference exchange rates
///
/// Every query re-fetches and re-parses the publication; the fetcher itself
/// holds no rate state, only the HTTP client and the source chain.
///
/// # Example
/// ```rust,no_run
/// use ecb_rates::RateFetcher;
///
/// # async fn run() -> ecb_rates::Result<()> {
/// let fetcher = RateFetcher::new()?;
/// let usd = fetcher.rate("USD").await?;
/// println!("1 EUR = {} USD", usd);
/// # Ok(())
/// # }
/// ```
pub struct RateFetcher {
    client: Client,
    sources: Vec<RateSource>,
}

impl RateFetcher {
    /// Create a fetcher that queries the ECB endpoint only (no fallback)
    pub fn new() -> Result<Self> {
        Self::configure(ECB_DAILY_URL, None)
    }

    /// Create a fetcher that falls back to a local document when the network
    /// call fails or returns unparseable content
    pub fn with_fallback(path: impl Into<PathBuf>) -> Result<Self> {
        Self::configure(ECB_DAILY_URL, Some(path.into()))
    }

    /// Create a fetcher against an arbitrary endpoint, e.g. a mirror
    pub fn configure(url: impl Into<String>, fallback: Option<PathBuf>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| EcbError::RetrievalFailed(format!("Failed to create HTTP client: {}", e)))?;

        let mut sources = vec![RateSource::Network { url: url.into() }];
        if let Some(path) = fallback {
            sources.push(RateSource::File { path });
        }

        Ok(Self { client, sources })
    }

    /// Rate of the euro denominated in the given currency
    ///
    /// Scans the current snapshot linearly and returns the first entry whose
    /// symbol matches case-sensitively. An unknown symbol is a normal
    /// [`EcbError::SymbolNotFound`] outcome, not a malformed input.
    pub async fn rate(&self, symbol: &str) -> Result<f64> {
        let document = self.retrieve_document().await?;
        let snapshot = document.current_snapshot()?;

        for entry in &snapshot.entries {
            if entry.symbol == symbol {
                return entry.value();
            }
        }

        Err(EcbError::SymbolNotFound(symbol.to_string()))
    }

    /// [`RateFetcher::rate`] for a known currency
    pub async fn rate_for(&self, currency: Currency) -> Result<f64> {
        self.rate(currency.code()).await
    }

    /// All rates of the euro denominated in other currencies
    ///
    /// One entry per currency in the current snapshot. All-or-nothing: a
    /// single unparseable rate string fails the whole call rather than
    /// producing a partial table.
    pub async fn all_rates(&self) -> Result<HashMap<String, f64>> {
        let document = self.retrieve_document().await?;
        let snapshot = document.current_snapshot()?;

        let mut rates = HashMap::with_capacity(snapshot.entries.len());
        for entry in &snapshot.entries {
            rates.insert(entry.symbol.clone(), entry.value()?);
        }
        Ok(rates)
    }

    /// Try each source once, in order, returning the first parseable
    /// document. The last source's failure is the operation's failure.
    async fn retrieve_document(&self) -> Result<RateDocument> {
        let mut last_error =
            EcbError::RetrievalFailed("no retrieval sources configured".to_string());

        for source in &self.sources {
            match self.try_source(source).await {
                Ok(document) => return Ok(document),
                Err(err) => {
                    warn!("rate source {} failed: {}", source.describe(), err);
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }

    async fn try_source(&self, source: &RateSource) -> Result<RateDocument> {
        let body = match source {
            RateSource::Network { url } => {
                debug!("fetching daily reference rates from {}", url);

                let response = self.client.get(url).send().await.map_err(|e| {
                    EcbError::RetrievalFailed(format!("HTTP request failed: {}", e))
                })?;

                if !response.status().is_success() {
                    return Err(EcbError::RetrievalFailed(format!(
                        "endpoint returned error status: {}",
                        response.status()
                    )));
                }

                response.text().await.map_err(|e| {
                    EcbError::RetrievalFailed(format!("Failed to read response body: {}", e))
                })?
            }
            RateSource::File { path } => {
                debug!("reading fallback document from {}", path.display());

                tokio::fs::read_to_string(path).await.map_err(|e| {
                    EcbError::RetrievalFailed(format!(
                        "Failed to read fallback file {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
        };

        RateDocument::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // Nothing listens on the discard port, so the network source fails fast.
    const UNREACHABLE_URL: &str = "http://127.0.0.1:9/eurofxref-daily.xml";

    const FALLBACK_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gesmes:Envelope xmlns:gesmes="http://www.gesmes.org/xml/2002-08-01" xmlns="http://www.ecb.int/vocabulary/2002-08-01/eurofxref">
    <gesmes:subject>Reference rates</gesmes:subject>
    <Cube>
        <Cube time='2024-03-15'>
            <Cube currency='USD' rate='1.10' />
        </Cube>
    </Cube>
</gesmes:Envelope>"#;

    fn write_fallback(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_fallback_engaged_on_network_failure() {
        let file = write_fallback(FALLBACK_DOC);
        let fetcher =
            RateFetcher::configure(UNREACHABLE_URL, Some(file.path().to_path_buf())).unwrap();

        let rate = fetcher.rate("USD").await.unwrap();
        assert_relative_eq!(rate, 1.10);
    }

    #[tokio::test]
    async fn test_double_failure_is_retrieval_failed() {
        let fetcher = RateFetcher::configure(
            UNREACHABLE_URL,
            Some(PathBuf::from("/nonexistent/eurofxref-daily.xml")),
        )
        .unwrap();

        let err = fetcher.rate("USD").await.unwrap_err();
        assert!(matches!(err, EcbError::RetrievalFailed(_)));
    }

    #[tokio::test]
    async fn test_network_only_failure_is_final() {
        let fetcher = RateFetcher::configure(UNREACHABLE_URL, None).unwrap();

        let err = fetcher.all_rates().await.unwrap_err();
        assert!(matches!(err, EcbError::RetrievalFailed(_)));
    }

    #[tokio::test]
    async fn test_unparseable_fallback_is_malformed() {
        let file = write_fallback("definitely not the reference-rate schema");
        let fetcher =
            RateFetcher::configure(UNREACHABLE_URL, Some(file.path().to_path_buf())).unwrap();

        let err = fetcher.rate("USD").await.unwrap_err();
        assert!(matches!(err, EcbError::MalformedDocument(_)));
    }

    #[tokio::test]
    async fn test_symbol_not_found() {
        let file = write_fallback(FALLBACK_DOC);
        let fetcher =
            RateFetcher::configure(UNREACHABLE_URL, Some(file.path().to_path_buf())).unwrap();

        let err = fetcher.rate("GBP").await.unwrap_err();
        match err {
            EcbError::SymbolNotFound(symbol) => assert_eq!(symbol, "GBP"),
            other => panic!("expected SymbolNotFound, got {}", other),
        }
    }

    #[tokio::test]
    async fn test_rate_for_known_currency() {
        let file = write_fallback(FALLBACK_DOC);
        let fetcher =
            RateFetcher::configure(UNREACHABLE_URL, Some(file.path().to_path_buf())).unwrap();

        let rate = fetcher.rate_for(Currency::USD).await.unwrap();
        assert_relative_eq!(rate, 1.10);
    }
}
