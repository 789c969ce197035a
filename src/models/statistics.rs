use super::Identifier;
use serde::Serialize;
use std::collections::BTreeMap;

/// The six per-employee counters, in raw or weighted form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub dc_collected: f64,
    pub store_collected: f64,
    pub dc_moved: f64,
    pub placed: f64,
    pub weight_placement: f64,
    pub packing_order: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Identifier,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsEntry {
    pub full_name: String,
    pub raw: Metrics,
    pub calculated: Metrics,
    pub total_result: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedStatistics {
    pub users_list: Vec<UserSummary>,
    /// Keyed by the user id rendered as a string.
    pub statistics: BTreeMap<String, StatisticsEntry>,
}
