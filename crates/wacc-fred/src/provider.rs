//! [`SeriesProvider`] implementation backed by FRED.

use crate::FredClient;
use wacc_traits::{DateWindow, Result, SeriesProvider, TimeSeries};

#[async_trait::async_trait]
impl SeriesProvider for FredClient {
    fn provider_name(&self) -> &'static str {
        "fred"
    }

    async fn series(&self, id: &str, window: DateWindow) -> Result<TimeSeries> {
        let observations = self.observations(id, window).await?;
        Ok(TimeSeries::new(id, observations))
    }
}
