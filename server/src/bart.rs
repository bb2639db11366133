//! BART real-time departures (ETD) client
//!
//! Calls `etd.aspx` with the configured station and key and reduces the
//! response to destination → minutes. Only the fields used are modelled, all
//! of them optional so structural gaps map onto the documented messages
//! instead of a generic decode error.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::UpstreamConfig;
use crate::error::{ServerError, ServerResult, UpstreamError};
use crate::report::{DestinationEtas, EtdReport};

/// Anything that can produce the current departure report.
#[async_trait]
pub trait DepartureSource: Send + Sync {
    /// Fetch a fresh report. Failures are folded into [`EtdReport::Error`].
    async fn report(&self) -> EtdReport;
}

// =============================================================================
// Upstream response shape
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct EtdResponse {
    pub root: Option<Root>,
}

#[derive(Debug, Deserialize)]
pub struct Root {
    pub station: Option<Vec<Station>>,
}

#[derive(Debug, Deserialize)]
pub struct Station {
    pub etd: Option<Vec<Etd>>,
}

#[derive(Debug, Deserialize)]
pub struct Etd {
    pub destination: String,
    #[serde(default)]
    pub estimate: Vec<Estimate>,
}

#[derive(Debug, Deserialize)]
pub struct Estimate {
    pub minutes: String,
}

/// Reduce a decoded response to the per-destination minute lists.
///
/// Destinations keep their first-seen order. A destination listed twice (two
/// platforms serving the same terminus) has its estimates appended rather than
/// replaced.
pub fn departures(response: EtdResponse) -> Result<Vec<DestinationEtas>, UpstreamError> {
    let root = response.root.ok_or(UpstreamError::MissingRoot)?;
    let station = root
        .station
        .and_then(|stations| stations.into_iter().next())
        .ok_or(UpstreamError::MissingStation)?;
    let etds = station.etd.ok_or(UpstreamError::MissingDepartures)?;

    let mut result: Vec<DestinationEtas> = Vec::with_capacity(etds.len());
    for etd in etds {
        let minutes = etd.estimate.into_iter().map(|estimate| estimate.minutes);
        match result.iter_mut().find(|entry| entry.destination == etd.destination) {
            Some(entry) => entry.minutes.extend(minutes),
            None => result.push(DestinationEtas {
                destination: etd.destination,
                minutes: minutes.collect(),
            }),
        }
    }
    Ok(result)
}

/// Parse a raw upstream body into departures.
pub fn parse_body(body: &str) -> Result<Vec<DestinationEtas>, UpstreamError> {
    let response: EtdResponse = serde_json::from_str(body)?;
    departures(response)
}

// =============================================================================
// HTTP client
// =============================================================================

/// [`DepartureSource`] backed by the BART HTTP API.
pub struct BartClient {
    http: Client,
    config: UpstreamConfig,
}

impl BartClient {
    pub fn new(config: UpstreamConfig) -> ServerResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServerError::Client(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn query(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![
            ("cmd", "etd"),
            ("orig", self.config.station.as_str()),
            ("key", self.config.api_key.as_str()),
        ];
        if let Some(direction) = &self.config.direction {
            params.push(("dir", direction.as_str()));
        }
        params.push(("json", "y"));
        params
    }

    /// Fetch and reduce the current departures.
    pub async fn fetch(&self) -> Result<Vec<DestinationEtas>, UpstreamError> {
        let body = self
            .http
            .get(&self.config.base_url)
            .query(&self.query())
            .send()
            .await?
            .text()
            .await?;
        parse_body(&body)
    }
}

#[async_trait]
impl DepartureSource for BartClient {
    async fn report(&self) -> EtdReport {
        let started = Instant::now();
        match self.fetch().await {
            Ok(departures) => {
                debug!(
                    station = %self.config.station,
                    destinations = departures.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Fetched departures"
                );
                EtdReport::Departures(departures)
            }
            Err(err) => {
                warn!(station = %self.config.station, error = %err, "Upstream request failed");
                EtdReport::error(err.to_string())
            }
        }
    }
}
