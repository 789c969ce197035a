use crate::{
    error::StatsError,
    models::{from_object_slice, Identifier, UpstreamPayload, UpstreamRequest},
};
use reqwest::StatusCode;

/// Client for the retail statistics API. One POST per call, no retries.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    api_url: String,
}

impl UpstreamClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn fetch_by_point(
        &self,
        bearer_token: &str,
        from: &str,
        to: &str,
        point_id: &Identifier,
    ) -> Result<UpstreamPayload, StatsError> {
        let request = UpstreamRequest { from, point_id, to };

        tracing::info!("Fetching statistics for point {} ({} - {})", point_id, from, to);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(bearer_token)
            .json(&request)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.bytes().await?;
                let payload: UpstreamPayload = from_object_slice(&body)
                    .map_err(|e| StatsError::InvalidPayload(e.to_string()))?;

                tracing::debug!("Statistics API returned {} items", payload.items.len());
                Ok(payload)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!("Statistics API rejected token: {}", response.status());
                Err(StatsError::AuthExpired)
            }
            status => {
                let body = response.text().await?;
                tracing::warn!("Statistics API failed: {}", status);
                Err(StatsError::Upstream {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}
