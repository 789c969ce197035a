use crate::{
    config::Config,
    error::StatsError,
    models::{from_object_slice, AggregatedStatistics, StatsQuery},
    services::{aggregate, UpstreamClient},
};
use axum::{body::Bytes, extract::State, Json};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let upstream = UpstreamClient::new(config.api_url.clone());
        Self {
            config: Arc::new(config),
            upstream: Arc::new(upstream),
        }
    }
}

pub async fn fetch_statistics(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AggregatedStatistics>, StatsError> {
    let query: StatsQuery =
        from_object_slice(&body).map_err(|e| StatsError::MalformedInput(e.to_string()))?;

    let (from, to, point_id) = match (&query.from, &query.to, &query.point_id) {
        (Some(from), Some(to), Some(point_id))
            if !from.is_empty() && !to.is_empty() && point_id.is_present() =>
        {
            (from.as_str(), to.as_str(), point_id)
        }
        _ => return Err(StatsError::MissingParameters),
    };

    let bearer_token = state
        .config
        .bearer_token
        .as_deref()
        .ok_or(StatsError::MissingToken)?;

    let payload = state
        .upstream
        .fetch_by_point(bearer_token, from, to, point_id)
        .await?;

    let statistics = aggregate(&payload);

    tracing::info!(
        "Statistics ready for point {}: {} users",
        point_id,
        statistics.statistics.len()
    );

    Ok(Json(statistics))
}
