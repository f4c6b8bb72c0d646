//! FRED graph-export client.
//!
//! Uses the public `fredgraph.csv` export, which needs no API key and returns
//! one `date,value` row per observation. FRED writes `.` for dates that have
//! no value.

use crate::{Result, error::FredError};
use chrono::NaiveDate;
use csv::Reader;
use reqwest::Client;
use std::time::Duration;
use wacc_traits::{DateWindow, Observation};

/// Base URL for the FRED graph CSV export.
const FRED_BASE_URL: &str = "https://fred.stlouisfed.org/graph/fredgraph.csv";

/// Placeholder FRED uses for a missing value.
const MISSING_VALUE: &str = ".";

/// Client for FRED (Federal Reserve Economic Data) series.
#[derive(Debug, Clone)]
pub struct FredClient {
    client: Client,
    base_url: String,
}

impl Default for FredClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FredClient {
    /// Create a client for the public FRED export.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: FRED_BASE_URL.to_string(),
        }
    }

    /// Use a request timeout for every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Point the client at a different export URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, series_id: &str, window: DateWindow) -> String {
        format!(
            "{}?id={series_id}&cosd={}&coed={}",
            self.base_url,
            window.start.format("%Y-%m-%d"),
            window.end.format("%Y-%m-%d")
        )
    }

    /// Fetch observations of `series_id` within `window`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the CSV is malformed or the
    /// window holds no observations.
    pub async fn observations(&self, series_id: &str, window: DateWindow) -> Result<Vec<Observation>> {
        let url = self.url(series_id, window);
        tracing::debug!(series_id, start = %window.start, end = %window.end, "fred request");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FredError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;
        let observations = parse_csv(series_id, &text)?;
        tracing::debug!(series_id, rows = observations.len(), "fred response parsed");
        Ok(observations)
    }
}

/// Parse a two-column FRED CSV export.
///
/// The header is skipped whatever its spelling (`DATE` or
/// `observation_date` depending on the export version).
pub(crate) fn parse_csv(series_id: &str, text: &str) -> Result<Vec<Observation>> {
    let mut rdr = Reader::from_reader(text.as_bytes());
    let mut observations = Vec::new();

    for (idx, record) in rdr.records().enumerate() {
        let row = record?;
        let malformed = |reason: String| FredError::MalformedRow {
            series: series_id.to_string(),
            row: idx + 1,
            reason,
        };

        let date_cell = row.get(0).map(str::trim).unwrap_or_default();
        let date = NaiveDate::parse_from_str(date_cell, "%Y-%m-%d")
            .map_err(|e| malformed(format!("date {date_cell:?}: {e}")))?;

        let value_cell = row.get(1).map(str::trim).unwrap_or_default();
        let observation = if value_cell.is_empty() || value_cell == MISSING_VALUE {
            Observation::missing(date)
        } else {
            let value = value_cell
                .parse::<f64>()
                .map_err(|e| malformed(format!("value {value_cell:?}: {e}")))?;
            Observation::new(date, value)
        };
        observations.push(observation);
    }

    if observations.is_empty() {
        return Err(FredError::NoData(series_id.to_string()));
    }

    Ok(observations)
}
