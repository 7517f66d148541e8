use async_trait::async_trait;
use reqwest::Client;
use crate::types::{NrfError, NrfResult, PlmnId};

/// Supplies the PLMNs a profile falls back to when its registration
/// carries none. An empty list is a valid answer, distinct from an error.
#[async_trait]
pub trait PlmnSource: Send + Sync {
    async fn fetch_plmn_config(&self) -> NrfResult<Vec<PlmnId>>;
}

pub struct StaticPlmnSource {
    plmns: Vec<PlmnId>,
}

impl StaticPlmnSource {
    pub fn new(plmns: Vec<PlmnId>) -> Self {
        Self { plmns }
    }
}

#[async_trait]
impl PlmnSource for StaticPlmnSource {
    async fn fetch_plmn_config(&self) -> NrfResult<Vec<PlmnId>> {
        Ok(self.plmns.clone())
    }
}

/// Reads the network-wide PLMN configuration from the webconsole.
pub struct WebconsolePlmnSource {
    client: Client,
    webconsole_uri: String,
}

impl WebconsolePlmnSource {
    pub fn new(webconsole_uri: String) -> NrfResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| NrfError::PlmnSource(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            webconsole_uri: webconsole_uri.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PlmnSource for WebconsolePlmnSource {
    async fn fetch_plmn_config(&self) -> NrfResult<Vec<PlmnId>> {
        let url = format!("{}/nfconfig/plmn", self.webconsole_uri);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NrfError::PlmnSource(format!("Failed to reach webconsole: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NrfError::PlmnSource(format!(
                "Webconsole PLMN request failed with status {}",
                status
            )));
        }

        let plmns: Vec<PlmnId> = response
            .json()
            .await
            .map_err(|e| NrfError::PlmnSource(format!("Failed to parse webconsole PLMN config: {}", e)))?;

        tracing::debug!("Fetched {} PLMNs from webconsole", plmns.len());
        Ok(plmns)
    }
}
