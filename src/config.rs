//! Externally supplied venue-API configuration.
//!
//! Credentials and the API version are never embedded in the crate; they
//! are read from the environment at startup. The HTTP call itself lives
//! with the caller.

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding the venue-API client id.
pub const CLIENT_ID_VAR: &str = "VENUE_API_CLIENT_ID";
/// Environment variable holding the venue-API client secret.
pub const CLIENT_SECRET_VAR: &str = "VENUE_API_CLIENT_SECRET";
/// Environment variable holding the venue-API version string.
pub const VERSION_VAR: &str = "VENUE_API_VERSION";
/// Environment variable overriding the venue-API endpoint.
pub const ENDPOINT_VAR: &str = "VENUE_API_ENDPOINT";

const DEFAULT_ENDPOINT: &str = "https://api.foursquare.com/v2/venues/explore";

/// Credentials and endpoint for the venue-discovery API.
#[derive(Debug, Clone, Deserialize)]
pub struct VenueApiConfig {
    /// Venue-explore endpoint.
    pub endpoint: Url,
    /// API client id.
    pub client_id: String,
    /// API client secret.
    pub client_secret: String,
    /// API version string, e.g. a `YYYYMMDD` date.
    pub version: String,
}

impl VenueApiConfig {
    /// Load the configuration from the environment.
    ///
    /// `VENUE_API_CLIENT_ID`, `VENUE_API_CLIENT_SECRET` and
    /// `VENUE_API_VERSION` are required; `VENUE_API_ENDPOINT` overrides the
    /// default endpoint. Fails with [`Error::Config`] naming the first
    /// missing or invalid value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::Config(format!("{key} is not set")))
        };

        let endpoint = lookup(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint)
            .map_err(|err| Error::Config(format!("{ENDPOINT_VAR}: {err}")))?;

        Ok(Self {
            endpoint,
            client_id: required(CLIENT_ID_VAR)?,
            client_secret: required(CLIENT_SECRET_VAR)?,
            version: required(VERSION_VAR)?,
        })
    }
}
